// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a paginated remote image carousel built with the Iced GUI
//! framework.
//!
//! It fetches a page of image descriptors from a JSON listing endpoint and
//! shows them one at a time with wrap-around arrows and slide indicators.
//! The fetch lifecycle and navigation live in [`gallery`] and carry no UI
//! types, so they can be driven and tested headless.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

pub use app::config;
