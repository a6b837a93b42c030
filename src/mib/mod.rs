//! MIB object store and value resolution.
//!
//! - [`MibStore`] — OID-keyed store with point lookup, lexicographic
//!   successor lookup, and guarded mutation
//! - [`ManagedObject`] / [`ValueSource`] — descriptors whose values are
//!   either stored literals or computed on every read
//! - [`builtin`] — the built-in object set (system group, host resources,
//!   interfaces, enterprise subtree)
//!
//! The store is an explicitly constructed, explicitly owned instance;
//! handler components receive it (usually behind an `Arc`) rather than
//! reaching for process-wide state, so multiple stores can coexist in one
//! process — the test suites rely on that.

pub mod builtin;
mod object;
mod store;

pub use builtin::HostFacts;
pub use object::{ManagedObject, Producer, ValueSource};
pub use store::MibStore;
