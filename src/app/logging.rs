// SPDX-License-Identifier: MPL-2.0
//! Log subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "iced_carousel=info";
const DEBUG_FILTER: &str = "iced_carousel=debug";

/// Returns the filter directive used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins when set.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    if fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_switch_raises_crate_level() {
        assert_eq!(default_directive(false), "iced_carousel=info");
        assert_eq!(default_directive(true), "iced_carousel=debug");
    }

    #[test]
    fn repeated_init_is_harmless() {
        init(false);
        init(true);
    }
}
