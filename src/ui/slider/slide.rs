// SPDX-License-Identifier: MPL-2.0
//! Picture of the visible slide.
//!
//! Only the visible slide is kept in memory. A download result is accepted
//! only when it belongs to the slide that is still visible.

use crate::error::FetchFailure;
use iced::widget::image::Handle;

/// State of the visible slide's picture.
#[derive(Debug, Clone, Default)]
pub enum SlideImage {
    /// No slide is visible (empty list).
    #[default]
    Empty,
    /// Bytes for item `id` are being downloaded.
    Loading { id: String },
    /// Item `id` is decoded and ready to draw.
    Ready { id: String, handle: Handle },
    /// Item `id` could not be downloaded; its URL is shown instead.
    Failed { id: String },
}

impl SlideImage {
    /// Id of the item this picture belongs to.
    pub fn item_id(&self) -> Option<&str> {
        match self {
            SlideImage::Empty => None,
            SlideImage::Loading { id }
            | SlideImage::Ready { id, .. }
            | SlideImage::Failed { id } => Some(id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SlideImage::Loading { .. })
    }

    /// Returns `true` if the picture for item `id` is requested or settled.
    pub fn covers(&self, id: &str) -> bool {
        self.item_id() == Some(id)
    }

    /// Applies a finished download for item `id`.
    ///
    /// Returns `false` and leaves the state untouched when `id` is no longer
    /// the slide being loaded.
    pub fn resolve(&mut self, id: &str, result: Result<Vec<u8>, FetchFailure>) -> bool {
        if !matches!(self, SlideImage::Loading { id: pending } if pending == id) {
            return false;
        }
        *self = match result {
            Ok(bytes) => SlideImage::Ready {
                id: id.to_string(),
                handle: Handle::from_bytes(bytes),
            },
            Err(failure) => {
                tracing::warn!(item = id, error = %failure, "slide download failed");
                SlideImage::Failed { id: id.to_string() }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_matching_download() {
        let mut slide = SlideImage::Loading { id: "7".into() };
        assert!(slide.resolve("7", Ok(vec![0_u8; 4])));
        assert!(matches!(slide, SlideImage::Ready { ref id, .. } if id == "7"));
    }

    #[test]
    fn resolve_records_failure() {
        let mut slide = SlideImage::Loading { id: "7".into() };
        assert!(slide.resolve("7", Err(FetchFailure::new("timeout"))));
        assert!(matches!(slide, SlideImage::Failed { ref id } if id == "7"));
    }

    #[test]
    fn resolve_ignores_other_slide() {
        let mut slide = SlideImage::Loading { id: "8".into() };
        assert!(!slide.resolve("7", Ok(vec![1, 2, 3])));
        assert!(slide.is_loading());
        assert!(slide.covers("8"));
    }

    #[test]
    fn resolve_ignores_settled_slide() {
        let mut slide = SlideImage::Failed { id: "7".into() };
        assert!(!slide.resolve("7", Ok(vec![1])));
        assert!(matches!(slide, SlideImage::Failed { .. }));
    }

    #[test]
    fn empty_slide_covers_nothing() {
        assert_eq!(SlideImage::Empty.item_id(), None);
        assert!(!SlideImage::Empty.covers(""));
    }
}
