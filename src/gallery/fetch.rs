// SPDX-License-Identifier: MPL-2.0
//! Page-fetch lifecycle: when to request, and which responses to keep.
//!
//! The controller performs no I/O. [`FetchController::update_params`] decides
//! whether a request is due and hands back a [`PageRequest`]; the caller runs
//! it and feeds the outcome into [`FetchController::complete`]. Every request
//! carries a [`RequestId`] and only the most recent one may touch the state,
//! so a slow response for an old URL cannot overwrite a newer page.

use super::item::ImageItem;
use crate::error::FetchFailure;
use serde::{Deserialize, Serialize};

/// URL meaning "no source configured".
pub const BLANK_URL_SENTINEL: &str = " ";

/// Which parameter changes start a new request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RefetchPolicy {
    /// Only a different URL refetches; page and limit are read at request time.
    #[default]
    UrlOnly,
    /// Any change of URL, page or limit refetches.
    AnyParam,
}

/// Query inputs of one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub url: String,
    pub page: u32,
    pub limit: u32,
}

impl FetchParams {
    pub fn new(url: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            url: url.into(),
            page,
            limit,
        }
    }

    /// Returns `true` for the blank sentinel and for any other whitespace-only URL.
    pub fn is_blank(&self) -> bool {
        is_blank_url(&self.url)
    }
}

/// Returns `true` when `url` carries no source.
pub fn is_blank_url(url: &str) -> bool {
    url.trim().is_empty()
}

/// Monotonic tag of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// A request the caller must run and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub id: RequestId,
    pub params: FetchParams,
}

/// Result of feeding a completion into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A new list replaced the previous one.
    Loaded { count: usize },
    /// The error message was recorded; items are unchanged.
    Failed,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

/// Loading / error / data state of the carousel source.
#[derive(Debug, Clone, Default)]
pub struct FetchController {
    params: Option<FetchParams>,
    policy: RefetchPolicy,
    items: Vec<ImageItem>,
    loading: bool,
    error: Option<String>,
    last_issued: u64,
}

impl FetchController {
    pub fn new(policy: RefetchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parameters last handed to [`Self::update_params`].
    pub fn params(&self) -> Option<&FetchParams> {
        self.params.as_ref()
    }

    /// Records new parameters and returns the request to run, if one is due.
    ///
    /// The first call counts as a URL change. With [`RefetchPolicy::UrlOnly`]
    /// page and limit changes are stored but do not fetch until the URL
    /// changes. Blank URLs never fetch; a due change to a blank URL cancels
    /// the request in flight.
    pub fn update_params(&mut self, params: FetchParams) -> Option<PageRequest> {
        let due = match &self.params {
            None => true,
            Some(previous) => match self.policy {
                RefetchPolicy::UrlOnly => previous.url != params.url,
                RefetchPolicy::AnyParam => *previous != params,
            },
        };
        self.params = Some(params);

        let params = self.params.as_ref()?;
        if !due {
            return None;
        }
        if params.is_blank() {
            self.supersede();
            return None;
        }
        let params = params.clone();
        Some(self.begin(params))
    }

    /// Issues a request for the current parameters regardless of policy.
    pub fn reload(&mut self) -> Option<PageRequest> {
        let params = self.params.clone()?;
        if params.is_blank() {
            return None;
        }
        Some(self.begin(params))
    }

    /// Retires the request in flight so its completion comes back stale.
    fn supersede(&mut self) {
        if self.loading {
            tracing::debug!(request = self.last_issued, "source cleared; cancelling request");
        }
        self.last_issued += 1;
        self.loading = false;
    }

    fn begin(&mut self, params: FetchParams) -> PageRequest {
        self.last_issued += 1;
        self.loading = true;
        self.error = None;
        tracing::info!(
            request = self.last_issued,
            url = %params.url,
            page = params.page,
            limit = params.limit,
            "fetching image page"
        );
        PageRequest {
            id: RequestId(self.last_issued),
            params,
        }
    }

    /// Applies the outcome of request `id`.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<Vec<ImageItem>, FetchFailure>,
    ) -> Completion {
        if id.0 != self.last_issued {
            tracing::debug!(
                request = id.0,
                latest = self.last_issued,
                "dropping superseded page response"
            );
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.error = None;
                tracing::info!(request = id.0, count, "image page loaded");
                Completion::Loaded { count }
            }
            Err(failure) => {
                tracing::warn!(request = id.0, error = %failure, "image page fetch failed");
                self.error = Some(failure.message().to_string());
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_items() -> Vec<ImageItem> {
        vec![ImageItem::new("1", "a"), ImageItem::new("2", "b")]
    }

    fn params(url: &str) -> FetchParams {
        FetchParams::new(url, 1, 5)
    }

    #[test]
    fn new_controller_is_idle_and_empty() {
        let ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        assert!(ctrl.is_empty());
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.error(), None);
    }

    #[test]
    fn first_params_issue_request_and_set_loading() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let request = ctrl
            .update_params(params("https://picsum.photos/v2/list"))
            .expect("request issued");
        assert_eq!(request.params.url, "https://picsum.photos/v2/list");
        assert_eq!(request.params.page, 1);
        assert_eq!(request.params.limit, 5);
        assert!(ctrl.is_loading());
    }

    #[test]
    fn successful_completion_replaces_items() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let request = ctrl.update_params(params("http://api")).expect("request");

        let outcome = ctrl.complete(request.id, Ok(two_items()));

        assert_eq!(outcome, Completion::Loaded { count: 2 });
        assert_eq!(ctrl.len(), 2);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.error(), None);
    }

    #[test]
    fn failed_completion_records_message_and_keeps_items() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let first = ctrl.update_params(params("http://one")).expect("request");
        ctrl.complete(first.id, Ok(two_items()));

        let second = ctrl.update_params(params("http://two")).expect("request");
        let outcome = ctrl.complete(second.id, Err(FetchFailure::new("timeout")));

        assert_eq!(outcome, Completion::Failed);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.error(), Some("timeout"));
        assert_eq!(ctrl.items(), two_items().as_slice());
    }

    #[test]
    fn blank_sentinel_never_fetches() {
        let mut ctrl = FetchController::new(RefetchPolicy::AnyParam);
        assert!(ctrl.update_params(params(BLANK_URL_SENTINEL)).is_none());
        assert!(ctrl.update_params(FetchParams::new(" ", 2, 9)).is_none());
        assert!(ctrl.reload().is_none());
        assert!(ctrl.is_empty());
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.error(), None);
    }

    #[test]
    fn empty_url_is_treated_as_blank() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        assert!(ctrl.update_params(params("")).is_none());
        assert!(!ctrl.is_loading());
    }

    #[test]
    fn leaving_blank_url_fetches() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        assert!(ctrl.update_params(params(" ")).is_none());
        assert!(ctrl.update_params(params("http://api")).is_some());
    }

    #[test]
    fn url_only_policy_ignores_page_and_limit_changes() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let request = ctrl.update_params(params("http://api")).expect("request");
        ctrl.complete(request.id, Ok(two_items()));

        assert!(ctrl.update_params(FetchParams::new("http://api", 2, 5)).is_none());
        assert!(ctrl.update_params(FetchParams::new("http://api", 2, 10)).is_none());
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.params().map(|p| p.page), Some(2));
    }

    #[test]
    fn url_only_policy_uses_latest_page_on_next_url_change() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        ctrl.update_params(params("http://api"));
        ctrl.update_params(FetchParams::new("http://api", 3, 8));

        let request = ctrl
            .update_params(FetchParams::new("http://other", 3, 8))
            .expect("request");
        assert_eq!(request.params, FetchParams::new("http://other", 3, 8));
    }

    #[test]
    fn any_param_policy_refetches_on_page_change() {
        let mut ctrl = FetchController::new(RefetchPolicy::AnyParam);
        ctrl.update_params(params("http://api"));
        let request = ctrl
            .update_params(FetchParams::new("http://api", 2, 5))
            .expect("request");
        assert_eq!(request.params.page, 2);
    }

    #[test]
    fn unchanged_params_do_not_refetch() {
        let mut ctrl = FetchController::new(RefetchPolicy::AnyParam);
        ctrl.update_params(params("http://api"));
        assert!(ctrl.update_params(params("http://api")).is_none());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let old = ctrl.update_params(params("http://old")).expect("request");
        let new = ctrl.update_params(params("http://new")).expect("request");
        assert!(new.id > old.id);

        // Newest resolves first, the superseded one arrives late.
        ctrl.complete(new.id, Ok(vec![ImageItem::new("n", "new")]));
        let late = ctrl.complete(old.id, Ok(two_items()));

        assert_eq!(late, Completion::Stale);
        assert_eq!(ctrl.items(), &[ImageItem::new("n", "new")]);
    }

    #[test]
    fn stale_response_keeps_loading_until_latest_resolves() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let old = ctrl.update_params(params("http://old")).expect("request");
        let new = ctrl.update_params(params("http://new")).expect("request");

        assert_eq!(
            ctrl.complete(old.id, Err(FetchFailure::new("boom"))),
            Completion::Stale
        );
        assert!(ctrl.is_loading());
        assert_eq!(ctrl.error(), None);

        ctrl.complete(new.id, Ok(two_items()));
        assert!(!ctrl.is_loading());
    }

    #[test]
    fn new_request_clears_previous_error() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let first = ctrl.update_params(params("http://one")).expect("request");
        ctrl.complete(first.id, Err(FetchFailure::new("timeout")));
        assert_eq!(ctrl.error(), Some("timeout"));

        let retry = ctrl.reload().expect("request");
        assert_eq!(ctrl.error(), None);
        assert!(ctrl.is_loading());
        ctrl.complete(retry.id, Ok(two_items()));
        assert_eq!(ctrl.len(), 2);
    }

    #[test]
    fn clearing_url_cancels_request_in_flight() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let old = ctrl.update_params(params("http://old")).expect("request");

        assert!(ctrl.update_params(params(BLANK_URL_SENTINEL)).is_none());
        assert!(!ctrl.is_loading());

        let late = ctrl.complete(old.id, Ok(two_items()));
        assert_eq!(late, Completion::Stale);
        assert!(ctrl.is_empty());
        assert!(!ctrl.is_loading());
    }

    #[test]
    fn whitespace_urls_are_blank() {
        assert!(is_blank_url(BLANK_URL_SENTINEL));
        assert!(is_blank_url(""));
        assert!(is_blank_url(" \t "));
        assert!(!is_blank_url("http://api"));
    }

    #[test]
    fn reload_ignores_policy() {
        let mut ctrl = FetchController::new(RefetchPolicy::UrlOnly);
        let first = ctrl.update_params(params("http://api")).expect("request");
        let again = ctrl.reload().expect("request");
        assert!(again.id > first.id);
        assert_eq!(again.params, first.params);
    }
}
