//! Built-in MIB contents.
//!
//! Seeds a store with the system group, a few host-resources scalars, a
//! simulated interface table, and the enterprise subtree under
//! `1.3.6.1.4.1.99999`. Identity strings come from [`HostFacts`] so the
//! store itself performs no host probing; dynamic objects capture their
//! producers at seeding time.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::mib::object::ManagedObject;
use crate::mib::store::MibStore;
use crate::oid;
use crate::oid::Oid;
use crate::value::{Kind, Value};

/// The enterprise subtree root used by the built-in MIB.
pub fn enterprise_oid() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 99999)
}

/// Host identity facts injected into the built-in MIB.
///
/// Host introspection is a collaborator concern; gather these however the
/// surrounding process likes and hand them in. [`HostFacts::default`]
/// produces demo values suitable for tests and the CLI tools.
#[derive(Debug, Clone)]
pub struct HostFacts {
    /// sysDescr text.
    pub descr: String,
    /// sysName (writable after seeding).
    pub hostname: String,
    /// sysContact (writable after seeding).
    pub contact: String,
    /// sysLocation (writable after seeding).
    pub location: String,
    /// hrDeviceDescr for the processor row.
    pub cpu_model: String,
    /// hrMemorySize in KiB.
    pub memory_kb: i32,
    /// Interface names, registered in order starting at ifIndex 1.
    pub interfaces: Vec<String>,
}

impl Default for HostFacts {
    fn default() -> Self {
        Self {
            descr: format!(
                "{} {} - SNMP agent simulator",
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
            hostname: std::env::var("HOSTNAME").unwrap_or_else(|_| "mibcore-agent".into()),
            contact: "admin@example.com".into(),
            location: "Server Room A, Rack 5".into(),
            cpu_model: "Generic CPU".into(),
            memory_kb: 8_388_608,
            interfaces: vec!["lo".into(), "eth0".into()],
        }
    }
}

/// Seed `store` with the built-in objects.
///
/// Called once at initialization; after this the set of OIDs, their kinds,
/// and their writability never change for the life of the store.
pub fn seed(store: &MibStore, facts: &HostFacts) {
    let started = Instant::now();
    let ticks = move || Ok(Value::TimeTicks((started.elapsed().as_millis() / 10) as u32));

    // System group (1.3.6.1.2.1.1)
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
        ManagedObject::read_only(Kind::OctetString, Value::text(facts.descr.clone())),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 2, 0),
        ManagedObject::read_only(Kind::ObjectIdentifier, Value::ObjectIdentifier(enterprise_oid())),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 3, 0),
        ManagedObject::computed(Kind::TimeTicks, ticks),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 4, 0),
        ManagedObject::read_write(Kind::OctetString, Value::text(facts.contact.clone())),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
        ManagedObject::read_write(Kind::OctetString, Value::text(facts.hostname.clone())),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 6, 0),
        ManagedObject::read_write(Kind::OctetString, Value::text(facts.location.clone())),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 1, 7, 0),
        ManagedObject::read_only(Kind::Integer, Value::Integer(72)),
    );

    // Host resources (1.3.6.1.2.1.25)
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 25, 1, 1, 0),
        ManagedObject::computed(Kind::TimeTicks, ticks),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 25, 2, 2, 0),
        ManagedObject::read_only(Kind::Integer, Value::Integer(facts.memory_kb)),
    );
    store.insert(
        oid!(1, 3, 6, 1, 2, 1, 25, 3, 3, 1, 2, 1),
        ManagedObject::read_only(Kind::OctetString, Value::text(facts.cpu_model.clone())),
    );

    // Interface table (1.3.6.1.2.1.2.2.1), one row per interface name
    for (i, name) in facts.interfaces.iter().enumerate() {
        let if_index = (i + 1) as u32;
        let column = |col: u32| oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, col, if_index);

        store.insert(
            column(2),
            ManagedObject::read_only(Kind::OctetString, Value::text(name.clone())),
        );
        // ifType 6 = ethernetCsmacd
        store.insert(
            column(3),
            ManagedObject::read_only(Kind::Integer, Value::Integer(6)),
        );
        // Simulated 1 Gb/s link
        store.insert(
            column(5),
            ManagedObject::read_only(Kind::Gauge32, Value::Gauge32(1_000_000_000)),
        );
        store.insert(
            column(7),
            ManagedObject::read_write(Kind::Integer, Value::Integer(1)),
        );
        store.insert(
            column(8),
            ManagedObject::read_only(Kind::Integer, Value::Integer(1)),
        );
        // Simulated octet counters, scaled per interface so rows differ
        let scale_in = 1_000 + if_index as u128;
        store.insert(
            column(10),
            ManagedObject::computed(Kind::Counter32, move || {
                Ok(Value::Counter32(
                    (started.elapsed().as_micros() * scale_in) as u32,
                ))
            }),
        );
        let scale_out = 500 + if_index as u128;
        store.insert(
            column(16),
            ManagedObject::computed(Kind::Counter32, move || {
                Ok(Value::Counter32(
                    (started.elapsed().as_micros() * scale_out) as u32,
                ))
            }),
        );
    }

    // Enterprise scalars (1.3.6.1.4.1.99999.1)
    store.insert(
        oid!(1, 3, 6, 1, 4, 1, 99999, 1, 1, 0),
        ManagedObject::read_write(Kind::OctetString, Value::text("Custom MIB Value 1")),
    );
    store.insert(
        oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0),
        ManagedObject::read_write(Kind::Integer, Value::Integer(42)),
    );
    store.insert(
        oid!(1, 3, 6, 1, 4, 1, 99999, 1, 3, 0),
        ManagedObject::computed(Kind::Counter32, || {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_err(|_| crate::error::Error::internal("system clock before epoch"))?
                .as_secs();
            Ok(Value::Counter32(secs as u32))
        }),
    );

    tracing::debug!(mib.objects = store.len(), "built-in MIB seeded");
}

/// Convenience constructor: a new store seeded with [`HostFacts::default`].
pub fn default_store() -> MibStore {
    let store = MibStore::new();
    seed(&store, &HostFacts::default());
    store
}
