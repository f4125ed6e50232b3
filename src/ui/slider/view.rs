// SPDX-License-Identifier: MPL-2.0
//! Rendering of the carousel: title, slide frame, arrows and indicators.

use super::component::{DisplayMode, Message, State};
use super::slide::SlideImage;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, image, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Alignment, ContentFit, Element, Length};

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

/// Render the carousel body according to its display mode.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.display_mode() {
        DisplayMode::Loading => {
            status_text(ctx.i18n.tr("slider-loading"), ctx.scheme.text_secondary)
        }
        DisplayMode::Error(message) => status_text(
            ctx.i18n.tr_with_args("slider-error", &[("message", message)]),
            ctx.scheme.error,
        ),
        DisplayMode::Slider => slider(state, &ctx),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}

fn status_text<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .color(color)
        .into()
}

fn slider<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("slider-title"))
        .size(typography::TITLE_LG)
        .color(ctx.scheme.text_primary);

    let previous = arrow_button(
        icons::arrow_left_circle(),
        ctx.i18n.tr("slider-previous"),
        Message::Previous,
        ctx.scheme,
    );
    let next = arrow_button(
        icons::arrow_right_circle(),
        ctx.i18n.tr("slider-next"),
        Message::Next,
        ctx.scheme,
    );

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(previous)
        .push(slide_frame(state, ctx))
        .push(next);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(title)
        .push(stage)
        .push(indicators(state, ctx.scheme))
        .into()
}

fn arrow_button<'a>(
    icon: iced::widget::Svg<'static>,
    label: String,
    message: Message,
    scheme: ColorScheme,
) -> Element<'a, Message> {
    let arrow = button(icons::sized(icon, sizing::ARROW, scheme.brand_primary))
        .on_press(message)
        .padding(0)
        .style(styles::button::arrow);

    tooltip(
        arrow,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

fn slide_frame<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(item) = state.current_item() else {
        // Empty list: keep the frame's footprint without content.
        return Space::new()
            .width(Length::Fixed(sizing::SLIDE_MAX_WIDTH))
            .height(Length::Fixed(sizing::SLIDE_MAX_HEIGHT))
            .into();
    };

    let content: Element<'a, Message> = match state.slide() {
        SlideImage::Ready { handle, .. } => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        SlideImage::Failed { .. } => Text::new(ctx.i18n.tr_with_args(
            "slider-image-unavailable",
            &[("url", item.download_url.as_str())],
        ))
        .size(typography::CAPTION)
        .color(ctx.scheme.text_secondary)
        .into(),
        SlideImage::Loading { .. } | SlideImage::Empty => Space::new().into(),
    };

    container(content)
        .center_x(Length::Fixed(sizing::SLIDE_MAX_WIDTH))
        .center_y(Length::Fixed(sizing::SLIDE_MAX_HEIGHT))
        .style(styles::container::slide_frame)
        .into()
}

fn indicators<'a>(state: &'a State, scheme: ColorScheme) -> Element<'a, Message> {
    let current = state.current_index();

    state
        .items()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, _)| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::indicator(scheme, index == current)),
            )
        })
        .into()
}
