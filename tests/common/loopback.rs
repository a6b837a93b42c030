//! In-process transport plumbing for manager tests.
//!
//! `LoopbackConnector` wires each new session straight into an
//! `AgentHandler` over a shared store, so live-mode dispatch can be
//! exercised end to end without sockets. It also counts `connect` calls,
//! which doubles as the registry spy for stand-in assertions.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use mibcore::manager::BoxFuture;
use mibcore::{
    AgentHandler, Connector, ManagerConfig, MibStore, OpResult, Request, Result, SessionKey,
    SessionTransport,
};

/// Transport that answers requests from an in-process agent.
pub struct LoopbackTransport {
    agent: AgentHandler,
}

impl SessionTransport for LoopbackTransport {
    fn request<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<OpResult>> {
        Box::pin(async move { self.agent.handle(request) })
    }
}

/// Connector that builds [`LoopbackTransport`]s over one shared store and
/// counts how many transports it has built.
pub struct LoopbackConnector {
    store: Arc<MibStore>,
    connects: Arc<AtomicU32>,
}

impl LoopbackConnector {
    pub fn new(store: Arc<MibStore>) -> Self {
        Self {
            store,
            connects: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Handle on the connect counter, for spying from tests.
    pub fn connect_counter(&self) -> Arc<AtomicU32> {
        self.connects.clone()
    }
}

impl Connector for LoopbackConnector {
    fn connect(&self, _key: &SessionKey, _config: &ManagerConfig) -> Arc<dyn SessionTransport> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Arc::new(LoopbackTransport {
            agent: AgentHandler::new(self.store.clone()),
        })
    }
}

/// Transport that never responds; used for timeout tests.
pub struct StuckTransport;

impl SessionTransport for StuckTransport {
    fn request<'a>(&'a self, _request: &'a Request) -> BoxFuture<'a, Result<OpResult>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        })
    }
}

/// Connector that hands out [`StuckTransport`]s.
pub struct StuckConnector;

impl Connector for StuckConnector {
    fn connect(&self, _key: &SessionKey, _config: &ManagerConfig) -> Arc<dyn SessionTransport> {
        Arc::new(StuckTransport)
    }
}
