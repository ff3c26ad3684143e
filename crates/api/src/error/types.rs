//! Error type definitions for decoding and configuration

/// Primary error type for the workspace
///
/// Arithmetic on already-valid elements never fails; every variant here comes
/// from decoding untrusted bytes or from backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input has the wrong length for the encoding
    #[error("malformed encoding for {context}: expected {expected} bytes, got {actual}")]
    MalformedEncoding {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input has the right length but is not the canonical form
    #[error("non-canonical encoding for {context}: {reason}")]
    NonCanonicalEncoding {
        context: &'static str,
        reason: &'static str,
    },

    /// Decoded coordinates do not satisfy the curve equation
    #[error("point is not on the curve: {context}")]
    NotOnCurve { context: &'static str },

    /// Decoded point lies outside the prime-order subgroup
    #[error("point is not in the prime-order subgroup: {context}")]
    NotInSubgroup { context: &'static str },

    /// Decoded target-group element fails the subgroup check
    #[error("invalid element: {context}")]
    InvalidElement { context: &'static str },

    /// The requested multiplication backend cannot run on this CPU
    #[error("backend {backend} is not available on this CPU")]
    BackendUnavailable { backend: &'static str },

    /// A different backend was already fixed for this process
    #[error("backend already selected as {selected}, cannot switch to {requested}")]
    BackendConflict {
        selected: &'static str,
        requested: &'static str,
    },

    /// A configuration value could not be parsed
    #[error("invalid configuration value for {name}: expected {expected}")]
    InvalidConfig {
        name: &'static str,
        expected: &'static str,
    },
}

/// Result type for fallible operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of a decoding error, leaving other variants intact
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::MalformedEncoding { expected, actual, .. } => Self::MalformedEncoding {
                context,
                expected,
                actual,
            },
            Self::NonCanonicalEncoding { reason, .. } => {
                Self::NonCanonicalEncoding { context, reason }
            }
            Self::NotOnCurve { .. } => Self::NotOnCurve { context },
            Self::NotInSubgroup { .. } => Self::NotInSubgroup { context },
            Self::InvalidElement { .. } => Self::InvalidElement { context },
            other => other,
        }
    }

    /// True for errors raised while decoding untrusted input
    pub fn is_decoding_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedEncoding { .. }
                | Self::NonCanonicalEncoding { .. }
                | Self::NotOnCurve { .. }
                | Self::NotInSubgroup { .. }
                | Self::InvalidElement { .. }
        )
    }
}
