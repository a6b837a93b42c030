//! Error types for mibcore.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//! Facade layers (HTTP, CLI) should branch on [`Error::kind`] rather than on variants.

use std::time::Duration;

use crate::oid::Oid;
use crate::value::Kind;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID grammar error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Empty segment between dots (e.g. `"1..2"`).
    EmptySegment,
    /// Segment contains a non-digit character.
    InvalidDigit,
    /// Arc value does not fit in `u32`.
    ArcOverflow,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::EmptySegment => write!(f, "empty segment"),
            Self::InvalidDigit => write!(f, "non-digit character in segment"),
            Self::ArcOverflow => write!(f, "arc value out of range"),
        }
    }
}

/// Stable, enumerable error tags.
///
/// This is the contract boundary for out-of-scope facade layers: every
/// [`Error`] maps to exactly one kind, and the set of kinds is the full
/// error taxonomy of the core. A facade maps kinds to status codes and
/// uses the `Display` form of the error as the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input fails the OID grammar; local rejection, never retried.
    MalformedOid,
    /// The queried OID is absent from the MIB.
    NotFound,
    /// No OID strictly greater than the queried one (end of MIB view).
    NoSuccessor,
    /// Write attempted on a read-only object.
    NotWritable,
    /// SET value kind disagrees with the object's declared kind.
    TypeMismatch,
    /// Live-mode operation exceeded its deadline after exhausting retries.
    Timeout,
    /// Connection or protocol failure not otherwise classified.
    Transport,
    /// A value producer or host introspection call failed.
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedOid => write!(f, "malformedOid"),
            Self::NotFound => write!(f, "notFound"),
            Self::NoSuccessor => write!(f, "noSuccessor"),
            Self::NotWritable => write!(f, "notWritable"),
            Self::TypeMismatch => write!(f, "typeMismatch"),
            Self::Timeout => write!(f, "timeout"),
            Self::Transport => write!(f, "transportError"),
            Self::Internal => write!(f, "internalError"),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid OID format.
    #[error("invalid OID{}: {kind}", input.as_deref().map(|i| format!(" {i:?}")).unwrap_or_default())]
    MalformedOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },

    /// The OID does not exist in the MIB.
    #[error("no such object: {oid}")]
    NotFound { oid: Oid },

    /// No OID lexicographically after the queried one.
    #[error("end of MIB view: nothing after {oid}")]
    NoSuccessor { oid: Oid },

    /// The object is read-only.
    #[error("not writable: {oid}")]
    NotWritable { oid: Oid },

    /// SET value kind does not match the object's declared kind.
    #[error("wrong type for {oid}: declared {expected}, got {actual}")]
    TypeMismatch {
        oid: Oid,
        expected: Kind,
        actual: Kind,
    },

    /// Request timed out (after retries if configured).
    #[error("timeout after {elapsed:?} waiting for {target} (retries={retries})")]
    Timeout {
        target: String,
        elapsed: Duration,
        retries: u32,
    },

    /// Transport-level failure.
    #[error("transport error{}: {message}", target.as_deref().map(|t| format!(" ({t})")).unwrap_or_default())]
    Transport {
        target: Option<String>,
        message: String,
    },

    /// A value producer or host read failed. The message is kept generic;
    /// details go to the log, not to external callers.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a malformed-OID error from a kind (no input string).
    pub fn malformed_oid(kind: OidErrorKind) -> Self {
        Self::MalformedOid { kind, input: None }
    }

    /// Create a malformed-OID error with the input string that failed.
    pub fn malformed_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::MalformedOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create a not-found error.
    pub fn not_found(oid: Oid) -> Self {
        Self::NotFound { oid }
    }

    /// Create an end-of-MIB-view error.
    pub fn no_successor(oid: Oid) -> Self {
        Self::NoSuccessor { oid }
    }

    /// Create a transport error.
    pub fn transport(target: Option<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            target,
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the stable tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedOid { .. } => ErrorKind::MalformedOid,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NoSuccessor { .. } => ErrorKind::NoSuccessor,
            Self::NotWritable { .. } => ErrorKind::NotWritable,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the OID this error is about, if it has one.
    pub fn oid(&self) -> Option<&Oid> {
        match self {
            Self::NotFound { oid }
            | Self::NoSuccessor { oid }
            | Self::NotWritable { oid }
            | Self::TypeMismatch { oid, .. } => Some(oid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            Error::malformed_oid(OidErrorKind::Empty).kind(),
            ErrorKind::MalformedOid
        );
        assert_eq!(
            Error::not_found(oid!(1, 3, 6, 1)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            Error::no_successor(oid!(1, 3, 6, 1)).kind(),
            ErrorKind::NoSuccessor
        );
        assert_eq!(Error::transport(None, "boom").kind(), ErrorKind::Transport);
        assert_eq!(Error::internal("oops").kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_display_includes_input() {
        let err = Error::malformed_oid_with_input(OidErrorKind::InvalidDigit, "1.-3");
        let msg = err.to_string();
        assert!(msg.contains("1.-3"));
        assert!(msg.contains("non-digit"));
    }

    #[test]
    fn test_error_oid_accessor() {
        let err = Error::not_found(oid!(1, 3, 6, 1, 2));
        assert_eq!(err.oid(), Some(&oid!(1, 3, 6, 1, 2)));
        assert!(Error::internal("x").oid().is_none());
    }
}
