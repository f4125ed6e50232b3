// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::slider::{self, source_bar};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slider: &'a slider::State,
    pub scheme: ColorScheme,
    /// Fluent key of the notice to show, if any.
    pub notice: Option<&'a str>,
}

/// Renders the source bar above the carousel, with the notice line below.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let bar = source_bar::view(ctx.slider, ctx.i18n).map(Message::Slider);
    let carousel = slider::view::view(
        ctx.slider,
        slider::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
        },
    )
    .map(Message::Slider);

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(bar)
        .push(carousel);

    if let Some(key) = ctx.notice {
        column = column.push(notice(ctx.i18n, key, ctx.scheme));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn notice<'a>(i18n: &'a I18n, key: &str, scheme: ColorScheme) -> Element<'a, Message> {
    let dismiss = button(Text::new("×").size(typography::CAPTION))
        .on_press(Message::DismissNotice)
        .padding([0.0, spacing::XS]);

    Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Alignment::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .color(scheme.error),
        )
        .push(Space::new().width(Length::Fill))
        .push(dismiss)
        .into()
}
