//! The MIB object store.
//!
//! Entries are kept sorted by OID in a flat vector, so point lookup and
//! successor lookup are both a binary search. The set of OIDs is fixed
//! after seeding; only values of writable objects change at runtime.

use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::mib::object::ManagedObject;
use crate::oid::Oid;
use crate::op::OpResult;
use crate::value::{Kind, Value};

/// OID-keyed store of managed objects.
///
/// The store exclusively owns its descriptors; callers interact through
/// OID-keyed operations that resolve values under the lock. Reads
/// (including producer invocation) take the read lock; [`update`]
/// replaces the source atomically under the write lock, so a concurrent
/// read never observes a half-written value.
///
/// [`update`]: MibStore::update
///
/// # Example
///
/// ```
/// use mibcore::{Kind, ManagedObject, MibStore, Value, oid};
///
/// let store = MibStore::new();
/// store.insert(
///     oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0),
///     ManagedObject::read_write(Kind::Integer, Value::Integer(42)),
/// );
///
/// let result = store.get(&oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0)).unwrap();
/// assert_eq!(result.value, Value::Integer(42));
/// ```
#[derive(Debug)]
pub struct MibStore {
    /// Entries sorted by the canonical OID ordering.
    entries: RwLock<Vec<(Oid, ManagedObject)>>,
}

impl MibStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register an object, replacing any existing descriptor at the same
    /// ordering key. Idempotent re-registration is allowed; this is a
    /// seeding-time operation, not meant for live traffic.
    pub fn insert(&self, oid: Oid, object: ManagedObject) {
        let mut entries = self.entries.write().unwrap();
        match entries.binary_search_by(|(o, _)| o.cmp(&oid)) {
            Ok(idx) => entries[idx] = (oid, object),
            Err(idx) => entries.insert(idx, (oid, object)),
        }
    }

    /// Point lookup, resolving the current value.
    pub fn get(&self, oid: &Oid) -> Result<OpResult> {
        let entries = self.entries.read().unwrap();
        match entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => {
                let (stored_oid, object) = &entries[idx];
                let value = object.resolve()?;
                Ok(OpResult::new(stored_oid.clone(), object.kind(), value))
            }
            Err(_) => Err(Error::not_found(oid.clone())),
        }
    }

    /// Resolve the object at the smallest OID strictly greater than the
    /// input. The input itself need not exist. Fails with `NoSuccessor`
    /// at the end of the MIB view, never with `NotFound`.
    pub fn successor(&self, oid: &Oid) -> Result<OpResult> {
        let entries = self.entries.read().unwrap();
        let idx = match entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => idx + 1, // exact match: step past it
            Err(idx) => idx,    // insertion point is already strictly greater
        };
        match entries.get(idx) {
            Some((stored_oid, object)) => {
                let value = object.resolve()?;
                Ok(OpResult::new(stored_oid.clone(), object.kind(), value))
            }
            None => Err(Error::no_successor(oid.clone())),
        }
    }

    /// Declared kind and writability of the object at `oid`.
    pub fn describe(&self, oid: &Oid) -> Result<(Kind, bool)> {
        let entries = self.entries.read().unwrap();
        match entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => {
                let object = &entries[idx].1;
                Ok((object.kind(), object.is_writable()))
            }
            Err(_) => Err(Error::not_found(oid.clone())),
        }
    }

    /// Replace the value of a writable object, pinning a literal. A
    /// previously computed source becomes static once written.
    pub fn update(&self, oid: &Oid, value: Value) -> Result<()> {
        let mut entries = self.entries.write().unwrap();
        match entries.binary_search_by(|(o, _)| o.cmp(oid)) {
            Ok(idx) => {
                let object = &mut entries[idx].1;
                if !object.is_writable() {
                    return Err(Error::NotWritable { oid: oid.clone() });
                }
                object.pin(value);
                Ok(())
            }
            Err(_) => Err(Error::not_found(oid.clone())),
        }
    }

    /// All registered OIDs in ascending canonical order.
    pub fn all_oids(&self) -> Vec<Oid> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .map(|(oid, _)| oid.clone())
            .collect()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl Default for MibStore {
    fn default() -> Self {
        Self::new()
    }
}
