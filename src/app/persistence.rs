// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The last submitted source is written back to `settings.toml` so the next
//! launch opens the same listing.

use crate::config::{self, Config};
use crate::gallery::FetchParams;
use std::path::PathBuf;

/// Stores `params` in `[source]` and saves the config.
///
/// Returns the notice key to show when saving fails. `base_dir` overrides the
/// config directory.
pub fn persist_source(
    config: &mut Config,
    params: &FetchParams,
    base_dir: Option<PathBuf>,
) -> Option<String> {
    config.source.url = if params.is_blank() {
        None
    } else {
        Some(params.url.clone())
    };
    config.source.page = params.page;
    config.source.limit = params.limit;

    match config::save_with_override(config, base_dir) {
        Ok(()) => {
            tracing::debug!(url = %params.url, "source saved");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            Some("notification-config-save-error".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn submitted_source_is_written_to_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();

        let notice = persist_source(
            &mut config,
            &FetchParams::new("http://api/list", 2, 9),
            Some(temp_dir.path().to_path_buf()),
        );

        assert!(notice.is_none());
        let (loaded, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.source.url.as_deref(), Some("http://api/list"));
        assert_eq!(loaded.source.page, 2);
        assert_eq!(loaded.source.limit, 9);
    }

    #[test]
    fn blank_source_clears_saved_url() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.source.url = Some("http://old".into());

        persist_source(
            &mut config,
            &FetchParams::new(" ", 1, 5),
            Some(temp_dir.path().to_path_buf()),
        );

        assert_eq!(config.source.url, None);
    }

    #[test]
    fn unwritable_directory_reports_notice() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        // A regular file where the config directory should be.
        let blocker = temp_dir.path().join("blocked");
        std::fs::write(&blocker, "").expect("write");

        let notice = persist_source(
            &mut Config::default(),
            &FetchParams::new("http://api", 1, 5),
            Some(blocker),
        );

        assert_eq!(notice.as_deref(), Some("notification-config-save-error"));
    }
}
