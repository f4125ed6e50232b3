// SPDX-License-Identifier: MPL-2.0
//! Image carousel screen.
//!
//! [`component`] owns the state and update logic, [`view`] draws the slider
//! and [`source_bar`] the inputs that pick the listing.

pub mod component;
pub mod slide;
pub mod source_bar;
pub mod view;

pub use component::{DisplayMode, Effect, Message, Options, State};
pub use slide::SlideImage;
pub use view::ViewContext;
