//! Managed-object value types.
//!
//! [`Value`] carries a decoded scalar; [`Kind`] is the declared type tag of a
//! managed object. The two name/wire mappings are intentionally asymmetric:
//! unknown type *names* coming in from callers default to `OctetString`
//! (permissive), while unknown wire *codes* coming back from a transport map
//! to the explicit [`Kind::Unknown`] tag so callers can detect them.

use bytes::Bytes;

use crate::oid::Oid;

/// Declared type tag of a managed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// INTEGER (signed 32-bit)
    Integer,
    /// OCTET STRING (arbitrary bytes)
    OctetString,
    /// NULL
    Null,
    /// OBJECT IDENTIFIER
    ObjectIdentifier,
    /// IpAddress (4 bytes, big-endian)
    IpAddress,
    /// Counter32 (unsigned 32-bit, wrapping)
    Counter32,
    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge32,
    /// TimeTicks (hundredths of seconds)
    TimeTicks,
    /// Opaque (legacy, arbitrary bytes)
    Opaque,
    /// Counter64 (unsigned 64-bit, wrapping)
    Counter64,
    /// Unrecognized wire type code (outbound only; never declared in a store)
    Unknown,
}

impl Kind {
    /// Map a type name to a kind. Total: unrecognized names fall back to
    /// `OctetString` for caller convenience. Accepts both `"OID"` and
    /// `"ObjectIdentifier"` for the identifier kind.
    pub fn from_name(name: &str) -> Kind {
        match name {
            "Integer" => Kind::Integer,
            "OctetString" => Kind::OctetString,
            "Null" => Kind::Null,
            "OID" | "ObjectIdentifier" => Kind::ObjectIdentifier,
            "IpAddress" => Kind::IpAddress,
            "Counter32" => Kind::Counter32,
            "Gauge32" => Kind::Gauge32,
            "TimeTicks" => Kind::TimeTicks,
            "Opaque" => Kind::Opaque,
            "Counter64" => Kind::Counter64,
            _ => Kind::OctetString,
        }
    }

    /// The canonical type name.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Integer => "Integer",
            Kind::OctetString => "OctetString",
            Kind::Null => "Null",
            Kind::ObjectIdentifier => "OID",
            Kind::IpAddress => "IpAddress",
            Kind::Counter32 => "Counter32",
            Kind::Gauge32 => "Gauge32",
            Kind::TimeTicks => "TimeTicks",
            Kind::Opaque => "Opaque",
            Kind::Counter64 => "Counter64",
            Kind::Unknown => "Unknown",
        }
    }

    /// Map a wire type code to a kind. Unrecognized codes yield
    /// [`Kind::Unknown`] so downstream consumers can tell that the agent
    /// sent something this build does not model.
    pub fn from_wire(code: i32) -> Kind {
        match code {
            2 => Kind::Integer,
            4 => Kind::OctetString,
            5 => Kind::Null,
            6 => Kind::ObjectIdentifier,
            64 => Kind::IpAddress,
            65 => Kind::Counter32,
            66 => Kind::Gauge32,
            67 => Kind::TimeTicks,
            68 => Kind::Opaque,
            70 => Kind::Counter64,
            _ => Kind::Unknown,
        }
    }

    /// The wire type code, `None` for [`Kind::Unknown`].
    pub fn wire_code(&self) -> Option<i32> {
        match self {
            Kind::Integer => Some(2),
            Kind::OctetString => Some(4),
            Kind::Null => Some(5),
            Kind::ObjectIdentifier => Some(6),
            Kind::IpAddress => Some(64),
            Kind::Counter32 => Some(65),
            Kind::Gauge32 => Some(66),
            Kind::TimeTicks => Some(67),
            Kind::Opaque => Some(68),
            Kind::Counter64 => Some(70),
            Kind::Unknown => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded scalar value.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// INTEGER
    Integer(i32),
    /// OCTET STRING
    OctetString(Bytes),
    /// NULL
    Null,
    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),
    /// IpAddress (4 bytes, big-endian)
    IpAddress([u8; 4]),
    /// Counter32
    Counter32(u32),
    /// Gauge32
    Gauge32(u32),
    /// TimeTicks
    TimeTicks(u32),
    /// Opaque
    Opaque(Bytes),
    /// Counter64
    Counter64(u64),
}

impl Value {
    /// Build an `OctetString` from UTF-8 text.
    pub fn text(s: impl Into<String>) -> Value {
        Value::OctetString(Bytes::from(s.into()))
    }

    /// The kind this value inhabits.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::OctetString(_) => Kind::OctetString,
            Value::Null => Kind::Null,
            Value::ObjectIdentifier(_) => Kind::ObjectIdentifier,
            Value::IpAddress(_) => Kind::IpAddress,
            Value::Counter32(_) => Kind::Counter32,
            Value::Gauge32(_) => Kind::Gauge32,
            Value::TimeTicks(_) => Kind::TimeTicks,
            Value::Opaque(_) => Kind::Opaque,
            Value::Counter64(_) => Kind::Counter64,
        }
    }

    /// Parse caller-supplied text into a value of the given kind.
    ///
    /// This is the manager's inbound conversion: numeric kinds parse their
    /// decimal form, `ObjectIdentifier` parses dotted notation, `IpAddress`
    /// parses dotted quads, and the byte kinds take the text as-is. Returns
    /// `None` when the text does not fit the kind (the caller decides the
    /// error; the store itself never coerces).
    pub fn parse_as(kind: Kind, text: &str) -> Option<Value> {
        match kind {
            Kind::Integer => text.parse().ok().map(Value::Integer),
            Kind::OctetString => Some(Value::text(text)),
            Kind::Null => Some(Value::Null),
            Kind::ObjectIdentifier => Oid::parse(text).ok().map(Value::ObjectIdentifier),
            Kind::IpAddress => {
                let addr: std::net::Ipv4Addr = text.parse().ok()?;
                Some(Value::IpAddress(addr.octets()))
            }
            Kind::Counter32 => text.parse().ok().map(Value::Counter32),
            Kind::Gauge32 => text.parse().ok().map(Value::Gauge32),
            Kind::TimeTicks => text.parse().ok().map(Value::TimeTicks),
            Kind::Opaque => Some(Value::Opaque(Bytes::from(text.to_owned()))),
            Kind::Counter64 => text.parse().ok().map(Value::Counter64),
            Kind::Unknown => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32 (Counter32, Gauge32, TimeTicks, or non-negative Integer).
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => Some(*v),
            Value::Integer(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    /// Try to get as u64 (any unsigned type or non-negative Integer).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => Some(*v as u64),
            Value::Integer(v) if *v >= 0 => Some(*v as u64),
            _ => None,
        }
    }

    /// Try to get as bytes (OctetString or Opaque).
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(b) | Value::Opaque(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as UTF-8 text (OctetString or Opaque holding valid UTF-8).
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::OctetString(b) | Value::Opaque(b) => {
                write!(f, "{}", String::from_utf8_lossy(b))
            }
            Value::Null => write!(f, "null"),
            Value::ObjectIdentifier(oid) => write!(f, "{oid}"),
            Value::IpAddress(octets) => write!(
                f,
                "{}.{}.{}.{}",
                octets[0], octets[1], octets[2], octets[3]
            ),
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => write!(f, "{v}"),
            Value::Counter64(v) => write!(f, "{v}"),
        }
    }
}
