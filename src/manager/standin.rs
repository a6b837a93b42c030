//! Deterministic stand-in agent.
//!
//! When the target address is one of the local/demo identifiers, the
//! dispatcher answers from a fixed table of well-known OIDs instead of
//! touching the network. This keeps the surrounding system exercisable
//! without a live remote agent; a real remote address never lands here.

use crate::oid;
use crate::oid::Oid;
use crate::op::OpResult;
use crate::value::{Kind, Value};

/// Addresses that route to the stand-in agent.
const STANDIN_ADDRESSES: [&str; 3] = ["snmp-agent", "localhost", "127.0.0.1"];

/// Whether `address` identifies the stand-in agent.
pub(crate) fn is_standin(address: &str) -> bool {
    STANDIN_ADDRESSES.contains(&address)
}

/// The fixed table of well-known OIDs with their demo values.
fn table() -> [(Oid, Kind, Value); 9] {
    [
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
            Kind::OctetString,
            Value::text("mibcore demo agent - SNMP management system"),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 2, 0),
            Kind::ObjectIdentifier,
            Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 99999)),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 3, 0),
            Kind::TimeTicks,
            Value::TimeTicks(123_456),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 4, 0),
            Kind::OctetString,
            Value::text("admin@example.com"),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
            Kind::OctetString,
            Value::text("demo-hostname"),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 6, 0),
            Kind::OctetString,
            Value::text("Server Room A, Rack 5"),
        ),
        (
            oid!(1, 3, 6, 1, 2, 1, 1, 7, 0),
            Kind::Integer,
            Value::Integer(72),
        ),
        (
            oid!(1, 3, 6, 1, 4, 1, 99999, 1, 1, 0),
            Kind::OctetString,
            Value::text("Custom MIB Demo Value"),
        ),
        (
            oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0),
            Kind::Integer,
            Value::Integer(42),
        ),
    ]
}

/// How many of the table's leading entries the GETNEXT walk covers
/// (the system group; the enterprise scalars are reachable by GET only,
/// matching the reference demo).
const WALK_LEN: usize = 7;

/// GET: the table value, or a synthesized placeholder for unknown OIDs.
pub(crate) fn get(oid: &Oid) -> OpResult {
    for (known, kind, value) in table() {
        if known == *oid {
            return OpResult::new(known, kind, value);
        }
    }
    OpResult::new(
        oid.clone(),
        Kind::OctetString,
        Value::text(format!("Demo value for OID {oid}")),
    )
}

/// GETNEXT: walk the system-group entries in declared order, wrapping to
/// the first entry past the last (and for any OID outside the walk list).
pub(crate) fn get_next(oid: &Oid) -> OpResult {
    let entries = table();
    let walk = &entries[..WALK_LEN];

    let successor = walk
        .iter()
        .position(|(known, _, _)| known == oid)
        .filter(|&idx| idx + 1 < WALK_LEN)
        .map_or(0, |idx| idx + 1);

    let (next, kind, value) = walk[successor].clone();
    OpResult::new(next, kind, value)
}

/// SET: acknowledge without storing anything; the stand-in is stateless
/// by design so repeated demo runs stay deterministic.
pub(crate) fn set(oid: &Oid, value: Value) -> OpResult {
    OpResult::from_value(oid.clone(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_standin() {
        assert!(is_standin("localhost"));
        assert!(is_standin("127.0.0.1"));
        assert!(is_standin("snmp-agent"));
        assert!(!is_standin("192.0.2.1"));
        assert!(!is_standin("localhost:161"));
    }

    #[test]
    fn test_get_known_oid() {
        let result = get(&oid!(1, 3, 6, 1, 2, 1, 1, 7, 0));
        assert_eq!(result.kind, Kind::Integer);
        assert_eq!(result.value, Value::Integer(72));
    }

    #[test]
    fn test_get_unknown_oid_synthesizes_placeholder() {
        let result = get(&oid!(1, 3, 6, 1, 9, 9, 9));
        assert_eq!(result.kind, Kind::OctetString);
        assert_eq!(result.value, Value::text("Demo value for OID 1.3.6.1.9.9.9"));
    }

    #[test]
    fn test_get_next_walks_in_declared_order() {
        let mut cursor = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
        let mut seen = vec![cursor.clone()];
        for _ in 0..WALK_LEN - 1 {
            cursor = get_next(&cursor).oid;
            seen.push(cursor.clone());
        }
        let texts: Vec<String> = seen.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            texts,
            [
                "1.3.6.1.2.1.1.1.0",
                "1.3.6.1.2.1.1.2.0",
                "1.3.6.1.2.1.1.3.0",
                "1.3.6.1.2.1.1.4.0",
                "1.3.6.1.2.1.1.5.0",
                "1.3.6.1.2.1.1.6.0",
                "1.3.6.1.2.1.1.7.0",
            ]
        );
    }

    #[test]
    fn test_get_next_wraps_past_last() {
        let next = get_next(&oid!(1, 3, 6, 1, 2, 1, 1, 7, 0));
        assert_eq!(next.oid, oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));
    }

    #[test]
    fn test_get_next_unknown_oid_starts_at_first() {
        let next = get_next(&oid!(1, 3, 6, 1, 9));
        assert_eq!(next.oid, oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));
    }

    #[test]
    fn test_set_echoes() {
        let ack = set(&oid!(1, 3, 6, 1, 2, 1, 1, 4, 0), Value::text("x@example.org"));
        assert_eq!(ack.value, Value::text("x@example.org"));
    }
}
