//! Agent-side operation surface.
//!
//! [`AgentHandler`] executes GET, GETNEXT, and SET against a [`MibStore`],
//! enforcing writability and not-found semantics. It holds no state of its
//! own beyond the store it wraps; the agent-facing transport (out of scope
//! here) decodes requests into [`Request`] values and hands them to
//! [`AgentHandler::handle`].
//!
//! # SET type policy
//!
//! SET validates that the submitted kind — and the value's own kind —
//! match the object's declared kind, and rejects mismatches with
//! `TypeMismatch`. There is no coercion; a caller that wants `"42"`
//! stored in an Integer object must convert before calling.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::mib::MibStore;
use crate::oid::Oid;
use crate::op::{OpResult, Operation, Request};
use crate::value::{Kind, Value};

/// Executes management operations against a MIB store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mibcore::{AgentHandler, Value, mib, oid};
///
/// let store = Arc::new(mib::builtin::default_store());
/// let agent = AgentHandler::new(store);
///
/// let result = agent.get(&oid!(1, 3, 6, 1, 2, 1, 1, 7, 0)).unwrap();
/// assert_eq!(result.value, Value::Integer(72));
/// ```
#[derive(Debug, Clone)]
pub struct AgentHandler {
    store: Arc<MibStore>,
}

impl AgentHandler {
    /// Wrap a store.
    pub fn new(store: Arc<MibStore>) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &Arc<MibStore> {
        &self.store
    }

    /// GET: resolve the object at `oid`.
    pub fn get(&self, oid: &Oid) -> Result<OpResult> {
        let result = self.store.get(oid)?;
        tracing::trace!(snmp.oid = %oid, snmp.kind = %result.kind, "agent GET");
        Ok(result)
    }

    /// GETNEXT: resolve the object at the smallest OID strictly greater
    /// than `oid`.
    pub fn get_next(&self, oid: &Oid) -> Result<OpResult> {
        let result = self.store.successor(oid)?;
        tracing::trace!(snmp.oid = %oid, snmp.next = %result.oid, "agent GETNEXT");
        Ok(result)
    }

    /// SET: write `value` to the object at `oid`.
    ///
    /// Fails with `NotFound`, `TypeMismatch` (declared kind differs from
    /// the submitted kind or the value's own kind), or `NotWritable`.
    pub fn set(&self, oid: &Oid, value: Value, kind: Kind) -> Result<OpResult> {
        let (declared, _) = self.store.describe(oid)?;

        if kind != declared {
            return Err(Error::TypeMismatch {
                oid: oid.clone(),
                expected: declared,
                actual: kind,
            });
        }
        if value.kind() != declared {
            return Err(Error::TypeMismatch {
                oid: oid.clone(),
                expected: declared,
                actual: value.kind(),
            });
        }

        self.store.update(oid, value.clone())?;
        tracing::debug!(snmp.oid = %oid, snmp.kind = %declared, "agent SET applied");
        Ok(OpResult::new(oid.clone(), declared, value))
    }

    /// Dispatch a decoded transport request to the matching operation.
    ///
    /// A SET request missing its value or kind is a contract violation by
    /// the transport and is reported as a transport error.
    pub fn handle(&self, request: &Request) -> Result<OpResult> {
        match request.operation {
            Operation::Get => self.get(&request.oid),
            Operation::GetNext => self.get_next(&request.oid),
            Operation::Set => {
                let (value, kind) = match (&request.value, &request.kind) {
                    (Some(value), Some(kind)) => (value.clone(), *kind),
                    _ => {
                        return Err(Error::transport(
                            None,
                            "SET request without value and kind",
                        ));
                    }
                };
                self.set(&request.oid, value, kind)
            }
        }
    }
}
