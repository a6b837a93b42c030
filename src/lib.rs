// Allow large error types - the Error enum includes OIDs inline for debugging convenience.
// Boxing them would add complexity and allocations for a marginal size reduction.
#![allow(clippy::result_large_err)]

//! # mibcore
//!
//! The core of a minimal SNMP-style network-management stack: the MIB
//! object store and OID-resolution engine shared by agent and manager,
//! plus the manager-side session and dispatch layer.
//!
//! Wire encoding, the HTTP facade, and process bootstrap live outside this
//! crate; it consumes and produces decoded `(oid, kind, value)` triples
//! through the [`SessionTransport`] and [`AgentHandler::handle`]
//! contracts.
//!
//! ## Agent side
//!
//! ```rust
//! use std::sync::Arc;
//! use mibcore::{AgentHandler, Kind, Value, mib, oid};
//!
//! let store = Arc::new(mib::builtin::default_store());
//! let agent = AgentHandler::new(store);
//!
//! // GET sysServices.0
//! let result = agent.get(&oid!(1, 3, 6, 1, 2, 1, 1, 7, 0)).unwrap();
//! assert_eq!(result.value, Value::Integer(72));
//!
//! // SET sysContact.0, then read it back
//! let contact = oid!(1, 3, 6, 1, 2, 1, 1, 4, 0);
//! agent.set(&contact, Value::text("ops@example.org"), Kind::OctetString).unwrap();
//! assert_eq!(agent.get(&contact).unwrap().value, Value::text("ops@example.org"));
//! ```
//!
//! ## Manager side
//!
//! ```rust
//! use mibcore::{Dispatcher, ManagerConfig, NullConnector};
//!
//! # async fn example() -> mibcore::Result<()> {
//! let dispatcher = Dispatcher::new(ManagerConfig::from_env(), NullConnector);
//!
//! // Demo addresses are answered locally; real addresses go through the
//! // session registry and whatever Connector the embedder wires in.
//! let result = dispatcher.get("1.3.6.1.2.1.1.1.0", "localhost", "public").await?;
//! println!("sysDescr: {}", result.value);
//!
//! dispatcher.registry().close_all().await;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod manager;
pub mod mib;
pub mod oid;
pub mod op;
pub mod trap;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use agent::AgentHandler;
pub use config::{DEFAULT_RETRIES, DEFAULT_TIMEOUT, ManagerConfig};
pub use error::{Error, ErrorKind, OidErrorKind, Result};
pub use manager::{
    BoxFuture, Connector, Dispatcher, NullConnector, Route, Session, SessionKey, SessionRegistry,
    SessionTransport,
};
pub use mib::{HostFacts, ManagedObject, MibStore, Producer, ValueSource};
pub use oid::Oid;
pub use op::{OpResult, Operation, Request};
pub use trap::{TRAP_CAPACITY, Trap, TrapBuffer};
pub use value::{Kind, Value};
