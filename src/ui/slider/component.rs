// SPDX-License-Identifier: MPL-2.0
//! Carousel component: fetch lifecycle, slide navigation and the source bar.

use super::slide::SlideImage;
use crate::config::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, MIN_PAGE};
use crate::error::FetchFailure;
use crate::gallery::{
    Completion, FetchController, FetchParams, ImageItem, ImageSource, IndexOnReload, PageRequest,
    RefetchPolicy, RequestId, SlideNavigator, BLANK_URL_SENTINEL,
};
use iced::Task;

/// Construction options, usually taken from the config file and CLI.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub refetch_policy: RefetchPolicy,
    pub index_on_reload: IndexOnReload,
    /// Emit the fetched items at debug level.
    pub debug_log: bool,
}

/// Which of the three mutually exclusive views to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    Loading,
    Error(&'a str),
    Slider,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
    PageFetched {
        request: RequestId,
        result: Result<Vec<ImageItem>, FetchFailure>,
    },
    SlideLoaded {
        id: String,
        result: Result<Vec<u8>, FetchFailure>,
    },
    UrlInputChanged(String),
    PageInputChanged(String),
    LimitInputChanged(String),
    /// Step the page by the given delta and submit.
    StepPage(i32),
    /// Step the page size by the given delta and submit.
    StepLimit(i32),
    /// Submit the source bar inputs as new fetch parameters.
    SubmitSource,
    /// Fetch the current parameters again.
    Reload,
}

/// Side effects the application must perform on behalf of the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user submitted a new source; persist it.
    PersistSource(FetchParams),
}

/// Carousel state.
#[derive(Debug, Clone)]
pub struct State {
    fetch: FetchController,
    navigator: SlideNavigator,
    slide: SlideImage,
    index_on_reload: IndexOnReload,
    debug_log: bool,
    source: ImageSource,
    url_input: String,
    page_input: String,
    limit_input: String,
}

impl State {
    pub fn new(source: ImageSource, options: Options) -> Self {
        Self {
            fetch: FetchController::new(options.refetch_policy),
            navigator: SlideNavigator::new(),
            slide: SlideImage::Empty,
            index_on_reload: options.index_on_reload,
            debug_log: options.debug_log,
            source,
            url_input: String::new(),
            page_input: DEFAULT_PAGE.to_string(),
            limit_input: DEFAULT_LIMIT.to_string(),
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn items(&self) -> &[ImageItem] {
        self.fetch.items()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.fetch.error()
    }

    pub fn params(&self) -> Option<&FetchParams> {
        self.fetch.params()
    }

    /// Item under the navigator, if the list is non-empty.
    pub fn current_item(&self) -> Option<&ImageItem> {
        self.fetch.items().get(self.navigator.current_index())
    }

    pub fn slide(&self) -> &SlideImage {
        &self.slide
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn page_input(&self) -> &str {
        &self.page_input
    }

    pub fn limit_input(&self) -> &str {
        &self.limit_input
    }

    /// Loading wins over error, error wins over the slider.
    pub fn display_mode(&self) -> DisplayMode<'_> {
        if self.fetch.is_loading() {
            DisplayMode::Loading
        } else if let Some(message) = self.fetch.error() {
            DisplayMode::Error(message)
        } else {
            DisplayMode::Slider
        }
    }

    // ---------------------------------------------------------------------
    // Fetch plumbing
    // ---------------------------------------------------------------------

    /// Stores new parameters, mirrors them into the source bar, and returns
    /// the page request if one is due under the refetch policy.
    pub fn set_params(&mut self, params: FetchParams) -> Option<PageRequest> {
        self.url_input = if params.is_blank() {
            String::new()
        } else {
            params.url.clone()
        };
        self.page_input = params.page.to_string();
        self.limit_input = params.limit.to_string();
        self.fetch.update_params(params)
    }

    /// Runs `request` on the shared HTTP client.
    pub fn request_task(&self, request: PageRequest) -> Task<Message> {
        let source = self.source.clone();
        let id = request.id;
        Task::perform(
            async move { source.fetch_page(request.params).await },
            move |result| Message::PageFetched {
                request: id,
                result,
            },
        )
    }

    /// [`Self::set_params`] followed by [`Self::request_task`].
    pub fn apply_params(&mut self, params: FetchParams) -> Task<Message> {
        match self.set_params(params) {
            Some(request) => self.request_task(request),
            None => Task::none(),
        }
    }

    /// Ensures the visible slide's picture is requested.
    fn sync_slide(&mut self) -> Task<Message> {
        let Some(item) = self.current_item() else {
            self.slide = SlideImage::Empty;
            return Task::none();
        };
        if self.slide.covers(&item.id) {
            return Task::none();
        }

        let id = item.id.clone();
        let url = item.download_url.clone();
        self.slide = SlideImage::Loading { id: id.clone() };

        let source = self.source.clone();
        Task::perform(
            async move { source.fetch_image(url).await },
            move |result| Message::SlideLoaded { id, result },
        )
    }

    fn source_params(&self) -> Option<FetchParams> {
        let page = self.page_input.trim().parse::<u32>().ok()?;
        let limit = self.limit_input.trim().parse::<u32>().ok()?;
        if page < MIN_PAGE || limit == 0 || limit > MAX_LIMIT {
            return None;
        }
        let url = self.url_input.trim();
        let url = if url.is_empty() {
            BLANK_URL_SENTINEL.to_string()
        } else {
            url.to_string()
        };
        Some(FetchParams::new(url, page, limit))
    }

    /// Returns `true` when the source bar holds submittable values.
    pub fn source_is_valid(&self) -> bool {
        self.source_params().is_some()
    }

    fn submit_source(&mut self) -> (Effect, Task<Message>) {
        let Some(params) = self.source_params() else {
            return (Effect::None, Task::none());
        };
        let task = match self.fetch.update_params(params.clone()) {
            Some(request) => self.request_task(request),
            None => Task::none(),
        };
        (Effect::PersistSource(params), task)
    }

    // ---------------------------------------------------------------------
    // Update
    // ---------------------------------------------------------------------

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let len = self.fetch.len();
        match message {
            Message::Previous => {
                self.navigator.previous(len);
                (Effect::None, self.sync_slide())
            }
            Message::Next => {
                self.navigator.next(len);
                (Effect::None, self.sync_slide())
            }
            Message::JumpTo(index) => {
                if !self.navigator.jump_to(index, len) {
                    tracing::debug!(index, len, "ignoring out-of-range indicator");
                    return (Effect::None, Task::none());
                }
                (Effect::None, self.sync_slide())
            }
            Message::PageFetched { request, result } => {
                match self.fetch.complete(request, result) {
                    Completion::Loaded { count } => {
                        if self.debug_log {
                            let ids: Vec<&str> =
                                self.fetch.items().iter().map(|i| i.id.as_str()).collect();
                            tracing::debug!(count, ?ids, "fetched images");
                        }
                        self.navigator.refit(count, self.index_on_reload);
                        // A fresh page retries a picture that failed before.
                        if matches!(self.slide, SlideImage::Failed { .. }) {
                            self.slide = SlideImage::Empty;
                        }
                        (Effect::None, self.sync_slide())
                    }
                    Completion::Failed | Completion::Stale => (Effect::None, Task::none()),
                }
            }
            Message::SlideLoaded { id, result } => {
                if !self.slide.resolve(&id, result) {
                    tracing::debug!(item = %id, "dropping picture of hidden slide");
                }
                (Effect::None, Task::none())
            }
            Message::UrlInputChanged(value) => {
                self.url_input = value;
                (Effect::None, Task::none())
            }
            Message::PageInputChanged(value) => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.page_input = value;
                }
                (Effect::None, Task::none())
            }
            Message::LimitInputChanged(value) => {
                if value.chars().all(|c| c.is_ascii_digit()) {
                    self.limit_input = value;
                }
                (Effect::None, Task::none())
            }
            Message::StepPage(delta) => {
                self.page_input = step(&self.page_input, delta, MIN_PAGE, u32::MAX).to_string();
                self.submit_source()
            }
            Message::StepLimit(delta) => {
                self.limit_input = step(&self.limit_input, delta, 1, MAX_LIMIT).to_string();
                self.submit_source()
            }
            Message::SubmitSource => self.submit_source(),
            Message::Reload => match self.fetch.reload() {
                Some(request) => (Effect::None, self.request_task(request)),
                None => (Effect::None, Task::none()),
            },
        }
    }
}

/// Adds `delta` to a numeric input, falling back to `min` when it does not parse.
fn step(input: &str, delta: i32, min: u32, max: u32) -> u32 {
    let current = input.trim().parse::<u32>().unwrap_or(min);
    current.saturating_add_signed(delta).clamp(min, max)
}
