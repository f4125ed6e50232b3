// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Source**: Listing page and page size
//! - **Fetch**: Request timeout bounds

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Page requested when none is configured.
pub const DEFAULT_PAGE: u32 = 1;

/// Number of images requested per page when none is configured.
pub const DEFAULT_LIMIT: u32 = 5;

/// Smallest page number accepted by the source bar.
pub const MIN_PAGE: u32 = 1;

/// Largest page size accepted by the source bar.
pub const MAX_LIMIT: u32 = 100;

// ==========================================================================
// Fetch Defaults
// ==========================================================================

/// Default hard timeout for one HTTP request (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::gallery::DEFAULT_TIMEOUT_SECS;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;
