// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (source bar "Load").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round, transparent button wrapping an arrow icon.
pub fn arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Slide indicator dot; `active` marks the visible slide.
pub fn indicator(
    scheme: ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match (active, status) {
            (true, _) => scheme.indicator_active,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_HOVER,
                ..scheme.indicator_active
            },
            (false, _) => scheme.indicator_inactive,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: fill,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_color(style: &button::Style) -> Option<Color> {
        match style.background {
            Some(Background::Color(color)) => Some(color),
            _ => None,
        }
    }

    #[test]
    fn active_indicator_ignores_hover() {
        let scheme = ColorScheme::light();
        let style = indicator(scheme.clone(), true);
        let idle = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        assert_eq!(background_color(&idle), Some(scheme.indicator_active));
        assert_eq!(background_color(&idle), background_color(&hovered));
    }

    #[test]
    fn inactive_indicator_uses_inactive_fill() {
        let scheme = ColorScheme::dark();
        let style = indicator(scheme.clone(), false);
        let idle = style(&Theme::Dark, button::Status::Active);
        assert_eq!(background_color(&idle), Some(scheme.indicator_inactive));
    }

    #[test]
    fn arrow_is_transparent_until_hovered() {
        let idle = arrow(&Theme::Dark, button::Status::Active);
        let hovered = arrow(&Theme::Dark, button::Status::Hovered);
        assert_eq!(background_color(&idle).map(|c| c.a), Some(opacity::TRANSPARENT));
        assert!(background_color(&hovered).map(|c| c.a).unwrap_or_default() > 0.0);
    }
}
