// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::slider;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Slider(slider::Message),
    /// Hide the notice line under the carousel.
    DismissNotice,
}

/// Runtime flags parsed from the command line.
///
/// Every value is optional; absent values fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Listing URL, overriding `[source] url`.
    pub url: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Optional locale passed on the command line.
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Force debug logging of fetched data.
    pub debug: bool,
}
