//! Error types for host document operations.

use std::fmt;

/// Errors raised by a [`HostDocument`](crate::HostDocument) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The document is not reachable (e.g. running outside a browser).
    DomUnavailable,

    /// No element with the given id exists to act as a container.
    ContainerNotFound {
        /// The container id that was looked up.
        id: String,
    },

    /// Wrapper around an exception raised by the host.
    Js {
        /// Message extracted from the exception.
        message: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::DomUnavailable => write!(f, "DOM is not available"),
            HostError::ContainerNotFound { id } => {
                write!(f, "Failed to find container element with id `{}`", id)
            }
            HostError::Js { message } => write!(f, "JavaScript error: {}", message),
        }
    }
}

impl std::error::Error for HostError {}

/// Result type alias for host operations.
pub type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_container_not_found() {
        let err = HostError::ContainerNotFound { id: "app".into() };
        assert_eq!(err.to_string(), "Failed to find container element with id `app`");
    }
}
