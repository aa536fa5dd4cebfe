//! Clock error types

use thiserror::Error;

/// Errors surfaced by the clock widget and its hosts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The host refused or failed to enter fullscreen
    #[error("Error attempting to enable fullscreen: {0}")]
    FullscreenRequest(String),

    /// Configuration could not be parsed
    #[error("Invalid clock configuration: {0}")]
    Config(String),

    /// A required host global (window, document, container) is missing
    #[error("Host unavailable: {0}")]
    HostUnavailable(&'static str),
}

/// Result type for clock operations
pub type ClockResult<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClockError::FullscreenRequest("permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Error attempting to enable fullscreen: permission denied"
        );

        let err = ClockError::HostUnavailable("no window");
        assert_eq!(err.to_string(), "Host unavailable: no window");
    }
}
