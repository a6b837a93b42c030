//! Managed-object descriptors and value resolution.

use crate::error::{Error, Result};
use crate::value::{Kind, Value};

/// A zero-argument value producer, invoked freshly on every read.
///
/// Producers typically sample live host state (elapsed time, memory,
/// interface counters). They may fail; the failure surfaces to callers as
/// a generic internal error.
pub type Producer = Box<dyn Fn() -> Result<Value> + Send + Sync>;

/// Where a managed object's value comes from.
pub enum ValueSource {
    /// A stored value, returned as-is.
    Literal(Value),
    /// A producer evaluated at read time. Results are never cached.
    Computed(Producer),
}

impl ValueSource {
    /// Produce the current externally-visible value.
    pub fn resolve(&self) -> Result<Value> {
        match self {
            ValueSource::Literal(value) => Ok(value.clone()),
            ValueSource::Computed(producer) => producer().map_err(|err| {
                tracing::debug!(error = %err, "value producer failed");
                Error::internal("value producer failed")
            }),
        }
    }
}

impl std::fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ValueSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single addressable object in the MIB.
///
/// Kind and writability are fixed at registration; only the value of a
/// writable object changes afterward, and a write always pins a literal
/// (a computed source does not survive a SET).
#[derive(Debug)]
pub struct ManagedObject {
    kind: Kind,
    writable: bool,
    source: ValueSource,
}

impl ManagedObject {
    /// A read-only object with a stored value.
    pub fn read_only(kind: Kind, value: Value) -> Self {
        Self {
            kind,
            writable: false,
            source: ValueSource::Literal(value),
        }
    }

    /// A writable object with a stored value.
    pub fn read_write(kind: Kind, value: Value) -> Self {
        Self {
            kind,
            writable: true,
            source: ValueSource::Literal(value),
        }
    }

    /// A read-only object whose value is computed on every read.
    pub fn computed(
        kind: Kind,
        producer: impl Fn() -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            writable: false,
            source: ValueSource::Computed(Box::new(producer)),
        }
    }

    /// Declared kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether SET is allowed.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Produce the current value.
    pub fn resolve(&self) -> Result<Value> {
        self.source.resolve()
    }

    /// Replace the source with a literal. Only the store calls this, after
    /// its writability check.
    pub(crate) fn pin(&mut self, value: Value) {
        self.source = ValueSource::Literal(value);
    }
}
