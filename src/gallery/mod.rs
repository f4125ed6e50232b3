// SPDX-License-Identifier: MPL-2.0
//! Remote image listing: items, fetch lifecycle, slide navigation and HTTP access.
//!
//! Everything here is free of UI types so the carousel logic can be driven
//! and tested without a window.

pub mod fetch;
pub mod item;
pub mod navigator;
pub mod source;

pub use fetch::{
    is_blank_url, Completion, FetchController, FetchParams, PageRequest, RefetchPolicy,
    RequestId, BLANK_URL_SENTINEL,
};
pub use item::ImageItem;
pub use navigator::{IndexOnReload, SlideNavigator};
pub use source::{ImageSource, DEFAULT_TIMEOUT_SECS};
