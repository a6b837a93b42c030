//! Common test fixtures and constants.

use mibcore::{Oid, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_contact() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 4, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}
pub fn sys_location() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 6, 0)
}
pub fn sys_services() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 7, 0)
}

// =============================================================================
// Enterprise OIDs (1.3.6.1.4.1.99999.*)
// =============================================================================

pub fn enterprise_string() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 99999, 1, 1, 0)
}
pub fn enterprise_integer() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 99999, 1, 2, 0)
}

// =============================================================================
// Test OIDs and credentials
// =============================================================================

/// Nonexistent OID for NotFound cases.
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

/// Read-only community.
pub const COMMUNITY_RO: &str = "public";
/// Read-write community.
pub const COMMUNITY_RW: &str = "private";

/// A live-mode (non-demo) agent address.
pub const LIVE_AGENT: &str = "192.0.2.10:161";
