// SPDX-License-Identifier: MPL-2.0
//! Arrow icons for the carousel controls.
//!
//! Icons are inline SVG sources; handles are created once and cached with
//! `OnceLock`. The fill is overridden at render time by the svg style so a
//! single source serves both themes.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(concat!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" fill="black"><path d=""#,
                    $path,
                    r#""/></svg>"#
                ).as_bytes())
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    arrow_left_circle,
    "M8 0a8 8 0 1 0 0 16A8 8 0 0 0 8 0m3.5 7.5a.5.5 0 0 1 0 1H5.707l2.147 2.146a.5.5 0 0 1-.708.708l-3-3a.5.5 0 0 1 0-.708l3-3a.5.5 0 1 1 .708.708L5.707 7.5z",
    "Filled circle with a left-pointing arrow."
);

define_icon!(
    arrow_right_circle,
    "M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0M4.5 7.5a.5.5 0 0 0 0 1h5.793l-2.147 2.146a.5.5 0 0 0 .708.708l3-3a.5.5 0 0 0 0-.708l-3-3a.5.5 0 1 0-.708.708L10.293 7.5z",
    "Filled circle with a right-pointing arrow."
);

/// Sizes an icon to a square and tints it with `color`.
pub fn sized(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
