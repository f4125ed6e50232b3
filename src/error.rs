// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchFailure),
}

/// Failure of a page or slide download.
///
/// Network errors, unexpected HTTP statuses and undecodable bodies all land
/// here; the carousel shows the message verbatim and does not distinguish them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure(String);

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the raw failure message shown to the user.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return FetchFailure::new("timeout");
        }
        if err.is_decode() {
            return FetchFailure::new(format!("invalid response body: {err}"));
        }
        FetchFailure::new(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl From<FetchFailure> for Error {
    fn from(err: FetchFailure) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn fetch_failure_displays_bare_message() {
        let failure = FetchFailure::new("timeout");
        assert_eq!(failure.to_string(), "timeout");
        assert_eq!(failure.message(), "timeout");
    }

    #[test]
    fn fetch_error_wraps_failure_with_prefix() {
        let err: Error = FetchFailure::new("HTTP status: 500").into();
        assert_eq!(format!("{}", err), "Fetch Error: HTTP status: 500");
    }
}
