// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frame behind the visible slide.
///
/// Derived from the active Iced `Theme` background so it reads in both light
/// and dark modes.
pub fn slide_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bar holding the source URL and paging inputs.
pub fn source_bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
