//! Manager-side operation surface.
//!
//! [`Dispatcher`] routes GET, SET, and GETNEXT to the right place: a
//! deterministic stand-in for local/demo addresses, or a pooled
//! [`Session`] for real agents. Both routes return the same [`OpResult`]
//! shape and the same error taxonomy, so callers never branch on the mode.

mod registry;
mod session;
mod standin;

pub use registry::{Connector, NullConnector, SessionRegistry};
pub use session::{BoxFuture, Session, SessionKey, SessionTransport};

use bytes::Bytes;

use crate::config::ManagerConfig;
use crate::error::Result;
use crate::oid::Oid;
use crate::op::{OpResult, Request};
use crate::value::{Kind, Value};

/// Which path an operation takes, decided once per call from the target
/// address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Canned local results; no registry, no network.
    Standin,
    /// A real agent through the session registry.
    Live,
}

impl Route {
    /// Classify a target address. Only the exact demo identifiers
    /// (`snmp-agent`, `localhost`, `127.0.0.1`) go to the stand-in; any
    /// other address — including ones that merely resolve to loopback —
    /// is live.
    pub fn classify(address: &str) -> Route {
        if standin::is_standin(address) {
            Route::Standin
        } else {
            Route::Live
        }
    }
}

/// Routes management operations to per-agent sessions.
///
/// # Example
///
/// ```
/// use mibcore::{Dispatcher, ManagerConfig, NullConnector, Value};
///
/// # async fn example() -> mibcore::Result<()> {
/// let dispatcher = Dispatcher::new(ManagerConfig::default(), NullConnector);
///
/// // Demo address: answered locally, deterministically
/// let result = dispatcher
///     .get("1.3.6.1.2.1.1.7.0", "127.0.0.1", "public")
///     .await?;
/// assert_eq!(result.value, Value::Integer(72));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    registry: SessionRegistry,
}

impl Dispatcher {
    /// Create a dispatcher with the given defaults and transport factory.
    pub fn new(config: ManagerConfig, connector: impl Connector) -> Self {
        Self {
            registry: SessionRegistry::new(config, connector),
        }
    }

    /// The underlying session registry (for shutdown and diagnostics).
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// GET `oid` from `agent`.
    pub async fn get(&self, oid: &str, agent: &str, community: &str) -> Result<OpResult> {
        let oid = Oid::parse(oid)?;
        tracing::debug!(snmp.oid = %oid, snmp.target = agent, "manager GET");

        match Route::classify(agent) {
            Route::Standin => Ok(standin::get(&oid)),
            Route::Live => {
                let session = self.registry.acquire(agent, community);
                let result = session.request(&Request::get(oid)).await?;
                Ok(normalize(result))
            }
        }
    }

    /// GETNEXT after `oid` on `agent`.
    pub async fn get_next(&self, oid: &str, agent: &str, community: &str) -> Result<OpResult> {
        let oid = Oid::parse(oid)?;
        tracing::debug!(snmp.oid = %oid, snmp.target = agent, "manager GETNEXT");

        match Route::classify(agent) {
            Route::Standin => Ok(standin::get_next(&oid)),
            Route::Live => {
                let session = self.registry.acquire(agent, community);
                let result = session.request(&Request::get_next(oid)).await?;
                Ok(normalize(result))
            }
        }
    }

    /// SET `oid` on `agent` to `value`, declared as type `kind_name`.
    ///
    /// The kind name is mapped permissively (unknown names become
    /// `OctetString`); the value text must then parse as that kind, or the
    /// call fails with `TypeMismatch` before anything is sent.
    pub async fn set(
        &self,
        oid: &str,
        value: &str,
        kind_name: &str,
        agent: &str,
        community: &str,
    ) -> Result<OpResult> {
        let oid = Oid::parse(oid)?;
        let kind = Kind::from_name(kind_name);
        let value = Value::parse_as(kind, value).ok_or_else(|| crate::error::Error::TypeMismatch {
            oid: oid.clone(),
            expected: kind,
            actual: Kind::OctetString,
        })?;
        tracing::debug!(snmp.oid = %oid, snmp.target = agent, snmp.kind = %kind, "manager SET");

        match Route::classify(agent) {
            Route::Standin => Ok(standin::set(&oid, value)),
            Route::Live => {
                let session = self.registry.acquire(agent, community);
                let result = session.request(&Request::set(oid, value, kind)).await?;
                Ok(normalize(result))
            }
        }
    }
}

/// Normalize a live-mode result: byte payloads become UTF-8 text (lossy)
/// so facade layers always see printable strings. Everything else,
/// including the explicit `Unknown` kind, passes through untouched.
fn normalize(mut result: OpResult) -> OpResult {
    result.value = match result.value {
        Value::OctetString(bytes) => {
            Value::OctetString(utf8_lossy(bytes))
        }
        Value::Opaque(bytes) => Value::Opaque(utf8_lossy(bytes)),
        other => other,
    };
    result
}

fn utf8_lossy(bytes: Bytes) -> Bytes {
    match String::from_utf8_lossy(&bytes) {
        std::borrow::Cow::Borrowed(_) => bytes,
        std::borrow::Cow::Owned(replaced) => Bytes::from(replaced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_route_classification() {
        assert_eq!(Route::classify("localhost"), Route::Standin);
        assert_eq!(Route::classify("127.0.0.1"), Route::Standin);
        assert_eq!(Route::classify("snmp-agent"), Route::Standin);
        assert_eq!(Route::classify("192.0.2.1:161"), Route::Live);
        assert_eq!(Route::classify("router.example.net"), Route::Live);
    }

    #[test]
    fn test_normalize_replaces_invalid_utf8() {
        let raw = OpResult::new(
            oid!(1, 3, 6, 1),
            Kind::OctetString,
            Value::OctetString(Bytes::from_static(b"cafe\xff")),
        );
        let normalized = normalize(raw);
        assert_eq!(normalized.value.as_str(), Some("cafe\u{fffd}"));
    }

    #[test]
    fn test_normalize_keeps_valid_utf8_and_numbers() {
        let text = OpResult::new(oid!(1, 3), Kind::OctetString, Value::text("plain"));
        assert_eq!(normalize(text).value, Value::text("plain"));

        let number = OpResult::new(oid!(1, 3), Kind::Counter32, Value::Counter32(9));
        assert_eq!(normalize(number).value, Value::Counter32(9));
    }

    #[tokio::test]
    async fn test_malformed_oid_rejected_before_routing() {
        let dispatcher = Dispatcher::new(ManagerConfig::default(), NullConnector);
        let err = dispatcher
            .get("1..2", "localhost", "public")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MalformedOid);
    }

    #[tokio::test]
    async fn test_set_value_must_parse_as_kind() {
        let dispatcher = Dispatcher::new(ManagerConfig::default(), NullConnector);
        let err = dispatcher
            .set(
                "1.3.6.1.4.1.99999.1.2.0",
                "not-a-number",
                "Integer",
                "localhost",
                "public",
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::TypeMismatch);
    }

    #[tokio::test]
    async fn test_set_unknown_kind_name_defaults_to_octet_string() {
        let dispatcher = Dispatcher::new(ManagerConfig::default(), NullConnector);
        let ack = dispatcher
            .set(
                "1.3.6.1.4.1.99999.1.1.0",
                "hello",
                "SomeFutureType",
                "localhost",
                "public",
            )
            .await
            .unwrap();
        assert_eq!(ack.kind, Kind::OctetString);
        assert_eq!(ack.value, Value::text("hello"));
    }
}
