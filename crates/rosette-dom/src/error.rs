//! Error types for mounting and rendering.

use crate::identity::ReactId;
use rosette_host::HostError;
use std::fmt;

/// Failure reported by a user lifecycle hook.
#[derive(Debug)]
pub struct HookError {
    message: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref()
    }
}

impl From<&str> for HookError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for HookError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Result returned by lifecycle hooks.
pub type HookResult = Result<(), HookError>;

/// A post-mount hook that failed while the mount-ready callbacks were flushed.
#[derive(Debug)]
pub struct PostMountFailure {
    /// Display name of the component class.
    pub component: String,
    /// Identity path the component was mounted at.
    pub id: ReactId,
    pub error: HookError,
}

/// Errors that can occur while mounting a tree.
#[derive(Debug)]
pub enum RenderError {
    /// The descriptor's type cannot be mounted.
    InvalidElementType {
        /// The offending type, as written by the caller.
        type_name: String,
    },

    /// A composite component's `render` produced nothing to mount.
    MissingRenderOutput {
        component: String,
        id: ReactId,
    },

    /// A pre-mount hook failed; the pass was aborted before the container write.
    WillMount {
        component: String,
        id: ReactId,
        source: HookError,
    },

    /// One or more post-mount hooks failed. The container has been written
    /// and every other hook has run.
    DidMount {
        root: ReactId,
        failures: Vec<PostMountFailure>,
    },

    /// The host document rejected an operation.
    Host(HostError),

    /// The thread-local renderer has not been installed.
    NotInstalled,

    /// The thread-local renderer was already installed.
    AlreadyInstalled,

    /// The thread-local renderer was used from inside one of its own callbacks.
    Reentrant,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidElementType { type_name } => {
                write!(f, "Invalid element type: `{}`", type_name)
            }
            RenderError::MissingRenderOutput { component, id } => {
                write!(f, "{} (at {}) rendered nothing to mount", component, id)
            }
            RenderError::WillMount { component, id, source } => {
                write!(f, "componentWillMount of {} (at {}) failed: {}", component, id, source)
            }
            RenderError::DidMount { root, failures } => {
                write!(
                    f,
                    "{} componentDidMount hook(s) failed after mounting root {}",
                    failures.len(),
                    root
                )
            }
            RenderError::Host(err) => write!(f, "Host error: {}", err),
            RenderError::NotInstalled => write!(f, "No renderer installed on this thread"),
            RenderError::AlreadyInstalled => {
                write!(f, "A renderer is already installed on this thread")
            }
            RenderError::Reentrant => {
                write!(f, "The renderer was re-entered from inside a render pass")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::WillMount { source, .. } => Some(source),
            RenderError::Host(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HostError> for RenderError {
    fn from(err: HostError) -> Self {
        RenderError::Host(err)
    }
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_will_mount_exposes_source() {
        let err = RenderError::WillMount {
            component: "Clock".into(),
            id: ReactId::root(0),
            source: HookError::new("no timer"),
        };
        assert_eq!(err.to_string(), "componentWillMount of Clock (at 0) failed: no timer");
        assert_eq!(err.source().unwrap().to_string(), "no timer");
    }

    #[test]
    fn test_hook_error_chains_source() {
        let io = std::io::Error::other("disk gone");
        let err = HookError::with_source("could not load", io);
        assert_eq!(err.source().unwrap().to_string(), "disk gone");
    }

    #[test]
    fn test_host_error_converts() {
        let err: RenderError = HostError::DomUnavailable.into();
        assert!(matches!(err, RenderError::Host(HostError::DomUnavailable)));
    }
}
