//! Operation request and result types.
//!
//! These are the decoded shapes exchanged with the out-of-scope transports:
//! a [`Request`] carries `{operation, oid, [value, kind]}` toward an agent,
//! and an [`OpResult`] carries `{oid, kind, value}` back.

use crate::oid::Oid;
use crate::value::{Kind, Value};

/// The three core management operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read a value.
    Get,
    /// Read the lexicographically next object.
    GetNext,
    /// Write a value.
    Set,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::GetNext => write!(f, "GETNEXT"),
            Self::Set => write!(f, "SET"),
        }
    }
}

/// A decoded operation request.
///
/// `value` and `kind` are present only for SET.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Which operation to perform.
    pub operation: Operation,
    /// Target OID.
    pub oid: Oid,
    /// Value to write (SET only).
    pub value: Option<Value>,
    /// Declared kind of the value (SET only).
    pub kind: Option<Kind>,
}

impl Request {
    /// Build a GET request.
    pub fn get(oid: Oid) -> Self {
        Self {
            operation: Operation::Get,
            oid,
            value: None,
            kind: None,
        }
    }

    /// Build a GETNEXT request.
    pub fn get_next(oid: Oid) -> Self {
        Self {
            operation: Operation::GetNext,
            oid,
            value: None,
            kind: None,
        }
    }

    /// Build a SET request.
    pub fn set(oid: Oid, value: Value, kind: Kind) -> Self {
        Self {
            operation: Operation::Set,
            oid,
            value: Some(value),
            kind: Some(kind),
        }
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.operation, self.oid)?;
        if let Some(ref value) = self.value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// The result of a successful operation.
///
/// GET and GETNEXT return the resolved object; SET acknowledgements reuse
/// the same shape with the object's declared kind and the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The OID the result is about (for GETNEXT, the successor's OID).
    pub oid: Oid,
    /// Declared kind of the object, or [`Kind::Unknown`] when the wire type
    /// code was unrecognized.
    pub kind: Kind,
    /// The resolved value.
    pub value: Value,
}

impl OpResult {
    /// Create a result with an explicit kind.
    pub fn new(oid: Oid, kind: Kind, value: Value) -> Self {
        Self { oid, kind, value }
    }

    /// Create a result whose kind is derived from the value itself.
    pub fn from_value(oid: Oid, value: Value) -> Self {
        let kind = value.kind();
        Self { oid, kind, value }
    }
}

impl std::fmt::Display for OpResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}: {}", self.oid, self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_request_constructors() {
        let get = Request::get(oid!(1, 3, 6, 1));
        assert_eq!(get.operation, Operation::Get);
        assert!(get.value.is_none());

        let set = Request::set(oid!(1, 3, 6, 1), Value::Integer(5), Kind::Integer);
        assert_eq!(set.operation, Operation::Set);
        assert_eq!(set.value, Some(Value::Integer(5)));
        assert_eq!(set.kind, Some(Kind::Integer));
    }

    #[test]
    fn test_result_from_value_derives_kind() {
        let result = OpResult::from_value(oid!(1, 3, 6, 1), Value::Counter32(7));
        assert_eq!(result.kind, Kind::Counter32);
    }

    #[test]
    fn test_display() {
        let result = OpResult::new(oid!(1, 3, 6, 1, 2, 1, 1, 7, 0), Kind::Integer, Value::Integer(72));
        assert_eq!(result.to_string(), "1.3.6.1.2.1.1.7.0 = Integer: 72");

        let req = Request::set(oid!(1, 3, 6, 1), Value::text("x"), Kind::OctetString);
        assert_eq!(req.to_string(), "SET 1.3.6.1 = x");
    }
}
