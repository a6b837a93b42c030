//! Long-lived per-agent sessions.
//!
//! A [`Session`] owns one transport handle for one `(address, community)`
//! pair and serializes the timeout/retry discipline around it. The wire
//! protocol itself lives behind [`SessionTransport`]: implementations
//! receive decoded [`Request`] values and return decoded results.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::ManagerConfig;
use crate::error::{Error, Result};
use crate::op::{OpResult, Request};

/// Type alias for boxed async return type (dyn-compatible).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Transport contract for live-mode operations.
///
/// Implementations encode `request`, perform one round-trip, and decode the
/// response; they do not retry or time out — the owning [`Session`] does
/// both. Construction must not perform I/O (sessions are created lazily);
/// connect on first use if the underlying socket needs it.
pub trait SessionTransport: Send + Sync + 'static {
    /// Issue one request and await its decoded result.
    fn request<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<OpResult>>;

    /// Release underlying resources. Default: nothing to release.
    fn close<'a>(&'a self) -> BoxFuture<'a, Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

/// Composite session key: agent address plus community secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    /// Agent address (host, host:port, or a demo identifier).
    pub address: String,
    /// Community secret.
    pub community: String,
}

impl SessionKey {
    /// Build a key.
    pub fn new(address: impl Into<String>, community: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            community: community.into(),
        }
    }
}

impl std::fmt::Display for SessionKey {
    // The community is a shared secret; only the address is printable.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address)
    }
}

/// One live session to one agent.
///
/// Callers are expected to keep at most one request outstanding per
/// session; the session does not queue. A timeout leaves the session
/// usable — the transport is not discarded.
pub struct Session {
    key: SessionKey,
    transport: Arc<dyn SessionTransport>,
    timeout: Duration,
    retries: u32,
    last_error: Mutex<Option<String>>,
}

impl Session {
    pub(crate) fn new(
        key: SessionKey,
        transport: Arc<dyn SessionTransport>,
        config: &ManagerConfig,
    ) -> Self {
        Self {
            key,
            transport,
            timeout: config.timeout,
            retries: config.retries,
            last_error: Mutex::new(None),
        }
    }

    /// The session's composite key.
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    /// The most recent error on this session, if any.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().unwrap().clone()
    }

    fn record_error(&self, err: &Error) {
        *self.last_error.lock().unwrap() = Some(err.to_string());
    }

    /// Issue `request`, re-sending on timeout up to the configured retry
    /// count. Transport errors are terminal (no retry); a final timeout is
    /// reported as [`Error::Timeout`] with the total elapsed time.
    pub async fn request(&self, request: &Request) -> Result<OpResult> {
        let attempts = self.retries + 1;
        let started = Instant::now();

        for attempt in 1..=attempts {
            match tokio::time::timeout(self.timeout, self.transport.request(request)).await {
                Ok(Ok(result)) => {
                    *self.last_error.lock().unwrap() = None;
                    return Ok(result);
                }
                Ok(Err(err)) => {
                    self.record_error(&err);
                    return Err(err);
                }
                Err(_) => {
                    tracing::debug!(
                        snmp.target = %self.key,
                        snmp.attempt = attempt,
                        snmp.attempts = attempts,
                        "request attempt timed out"
                    );
                }
            }
        }

        let err = Error::Timeout {
            target: self.key.address.clone(),
            elapsed: started.elapsed(),
            retries: self.retries,
        };
        self.record_error(&err);
        Err(err)
    }

    /// Close the underlying transport.
    pub async fn close(&self) -> Result<()> {
        self.transport.close().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}
