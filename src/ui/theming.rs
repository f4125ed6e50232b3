// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub error: Color,

    /// Fill of the visible slide's indicator.
    pub indicator_active: Color,
    /// Fill of every other indicator.
    pub indicator_inactive: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            error: palette::ERROR_500,
            indicator_active: palette::GRAY_900,
            indicator_inactive: palette::GRAY_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            error: palette::ERROR_500,
            indicator_active: palette::WHITE,
            indicator_inactive: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Pins `System` to the OS theme detected now; `Light` and `Dark` are
    /// returned unchanged.
    #[must_use]
    pub fn resolved(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Maps the mode onto one of Iced's built-in themes.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn active_indicator_stands_out_from_inactive() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert_ne!(scheme.indicator_active, scheme.indicator_inactive);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn resolved_mode_is_never_system() {
        assert_eq!(ThemeMode::Light.resolved(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolved(), ThemeMode::Dark);
        assert_ne!(ThemeMode::System.resolved(), ThemeMode::System);
    }

    #[test]
    fn scheme_follows_mode() {
        let dark = ColorScheme::for_mode(ThemeMode::Dark);
        assert_eq!(dark.text_primary, ColorScheme::dark().text_primary);
        let light = ColorScheme::for_mode(ThemeMode::Light);
        assert_eq!(light.text_primary, ColorScheme::light().text_primary);
    }
}
