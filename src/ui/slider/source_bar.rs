// SPDX-License-Identifier: MPL-2.0
//! Source bar: listing URL, page and page size inputs.

use super::component::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text_input, Row, Text};
use iced::widget::text_input::TextInput;
use iced::{Alignment, Element, Length};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let url_placeholder = i18n.tr("source-url-placeholder");
    let url_input = text_input(url_placeholder.as_str(), state.url_input())
        .on_input(Message::UrlInputChanged)
        .on_submit(Message::SubmitSource)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let page_input = text_input("1", state.page_input())
        .on_input(Message::PageInputChanged)
        .on_submit(Message::SubmitSource)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    let limit_input = text_input("5", state.limit_input())
        .on_input(Message::LimitInputChanged)
        .on_submit(Message::SubmitSource)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::NUMBER_INPUT_WIDTH));

    let load = button(Text::new(i18n.tr("source-load")).size(typography::BODY))
        .on_press_maybe(state.source_is_valid().then_some(Message::SubmitSource))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    // Reload needs a non-blank source to have been submitted.
    let can_reload = state
        .params()
        .is_some_and(|params| !params.is_blank())
        && !state.is_loading();
    let reload = button(Text::new(i18n.tr("source-reload")).size(typography::BODY))
        .on_press_maybe(can_reload.then_some(Message::Reload))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(url_input)
        .push(Text::new(i18n.tr("source-page")).size(typography::CAPTION))
        .push(stepper(page_input, Message::StepPage))
        .push(Text::new(i18n.tr("source-limit")).size(typography::CAPTION))
        .push(stepper(limit_input, Message::StepLimit))
        .push(load)
        .push(reload);

    container(row)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::source_bar)
        .into()
}

/// Numeric input flanked by decrement and increment buttons.
fn stepper<'a>(
    input: TextInput<'a, Message>,
    on_step: fn(i32) -> Message,
) -> Row<'a, Message> {
    let step_button = |label: &'static str, delta: i32| {
        button(Text::new(label).size(typography::BODY))
            .on_press(on_step(delta))
            .padding([0.0, spacing::XS])
            .style(styles::button::primary)
    };

    Row::new()
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .push(step_button("-", -1))
        .push(input)
        .push(step_button("+", 1))
}
