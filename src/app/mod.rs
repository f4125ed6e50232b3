// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the carousel component to localization and the
//! persisted configuration, and translates component effects into side
//! effects like saving the last submitted source.

pub mod config;
pub mod logging;
mod message;
pub mod paths;
mod persistence;
mod view;

pub use message::{Flags, Message};

use crate::gallery::{FetchParams, ImageSource, BLANK_URL_SENTINEL};
use crate::i18n::fluent::I18n;
use crate::ui::slider::{self, Effect};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 860;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Everything resolved before the event loop starts.
#[derive(Debug, Clone)]
pub struct Startup {
    pub flags: Flags,
    pub config: config::Config,
    /// Notice key produced while loading the config.
    pub config_warning: Option<String>,
    pub source: ImageSource,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    slider: slider::State,
    config: config::Config,
    /// Configured mode, resolved once at startup so `System` does not
    /// query the OS every frame.
    theme_mode: ThemeMode,
    /// Fluent key of the notice under the carousel.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("items", &self.slider.items().len())
            .field("notice", &self.notice)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    // iced 0.14 requires `Fn` for boot, so hand out clones.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Merges CLI flags over the `[source]` section. CLI values win.
pub fn initial_params(flags: &Flags, source: &config::SourceConfig) -> FetchParams {
    let url = flags
        .url
        .clone()
        .or_else(|| source.url.clone())
        .unwrap_or_else(|| BLANK_URL_SENTINEL.to_string());
    let page = flags.page.unwrap_or(source.page).max(config::MIN_PAGE);
    let limit = flags.limit.unwrap_or(source.limit).clamp(1, config::MAX_LIMIT);
    FetchParams::new(url, page, limit)
}

impl App {
    /// Initializes application state and issues the first page request when
    /// a source is configured.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            flags,
            config,
            config_warning,
            source,
        } = startup;

        let i18n = I18n::new(flags.lang.clone(), &config);
        let options = slider::Options {
            refetch_policy: config.fetch.refetch_policy,
            index_on_reload: config.fetch.index_on_reload,
            debug_log: flags.debug || config.diagnostics.debug_log,
        };
        let mut slider = slider::State::new(source, options);
        let task = slider
            .apply_params(initial_params(&flags, &config.source))
            .map(Message::Slider);

        let app = App {
            i18n,
            slider,
            theme_mode: config.general.theme_mode.resolved(),
            notice: config_warning,
            config,
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn scheme(&self) -> ColorScheme {
        ColorScheme::for_mode(self.theme_mode)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slider(slider_message) => {
                let (effect, task) = self.slider.handle_message(slider_message);
                if let Effect::PersistSource(params) = effect {
                    if let Some(key) = persistence::persist_source(&mut self.config, &params, None)
                    {
                        self.notice = Some(key);
                    }
                }
                task.map(Message::Slider)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            slider: &self.slider,
            scheme: self.scheme(),
            notice: self.notice.as_deref(),
        })
    }
}
