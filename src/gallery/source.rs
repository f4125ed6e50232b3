// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the image listing API and to the images themselves.

use super::fetch::FetchParams;
use super::item::ImageItem;
use crate::error::FetchFailure;
use std::time::Duration;

/// Default hard timeout applied to every request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for page listings and slide downloads.
///
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Debug, Clone)]
pub struct ImageSource {
    client: reqwest::Client,
}

impl ImageSource {
    /// Builds a client with a per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchFailure> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one page of the listing: `GET {url}?page={page}&limit={limit}`.
    pub async fn fetch_page(&self, params: FetchParams) -> Result<Vec<ImageItem>, FetchFailure> {
        let response = self
            .client
            .get(&params.url)
            .query(&[("page", params.page), ("limit", params.limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::new(format!("HTTP status: {status}")));
        }

        let items = response.json::<Vec<ImageItem>>().await?;
        Ok(items)
    }

    /// Downloads the encoded bytes of one slide.
    pub async fn fetch_image(&self, url: String) -> Result<Vec<u8>, FetchFailure> {
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::new(format!("HTTP status: {status}")));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn source() -> ImageSource {
        ImageSource::new(Duration::from_secs(5)).expect("client")
    }

    #[tokio::test]
    async fn fetch_page_sends_page_and_limit_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/list")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("limit".into(), "3".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"1","download_url":"a"},{"id":"2","download_url":"b"}]"#)
            .create_async()
            .await;

        let url = format!("{}/v2/list", server.url());
        let items = source()
            .fetch_page(FetchParams::new(url, 2, 3))
            .await
            .expect("page");

        assert_eq!(
            items,
            vec![ImageItem::new("1", "a"), ImageItem::new("2", "b")]
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_page_reports_http_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/list")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/v2/list", server.url());
        let failure = source()
            .fetch_page(FetchParams::new(url, 1, 5))
            .await
            .expect_err("status failure");

        assert!(failure.message().starts_with("HTTP status: 404"));
    }

    #[tokio::test]
    async fn fetch_page_rejects_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/list")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"not":"a list"}"#)
            .create_async()
            .await;

        let url = format!("{}/v2/list", server.url());
        let result = source().fetch_page(FetchParams::new(url, 1, 5)).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_page_reports_unreachable_host() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let result = source()
            .fetch_page(FetchParams::new("http://127.0.0.1:9/v2/list", 1, 5))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_image_returns_body_bytes() {
        let mut server = mockito::Server::new_async().await;
        let payload = vec![1_u8, 2, 3, 4, 5];
        let _mock = server
            .mock("GET", "/id/1/200/300")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(&payload)
            .create_async()
            .await;

        let bytes = source()
            .fetch_image(format!("{}/id/1/200/300", server.url()))
            .await
            .expect("image");

        assert_eq!(bytes, payload);
    }

    #[tokio::test]
    async fn fetch_image_reports_http_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing.jpg")
            .with_status(500)
            .create_async()
            .await;

        let failure = source()
            .fetch_image(format!("{}/missing.jpg", server.url()))
            .await
            .expect_err("status failure");

        assert!(failure.message().contains("500"));
    }
}
