// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`slider`] - The carousel screen and its source bar
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG arrow icons

pub mod design_tokens;
pub mod icons;
pub mod slider;
pub mod styles;
pub mod theming;
