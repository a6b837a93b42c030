//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//!
//! # Ordering
//!
//! All comparisons use zero-padded lexicographic ordering: the shorter OID is
//! treated as if extended with trailing `0` arcs. Under this ordering
//! `1.3.6.1` and `1.3.6.1.0` compare equal, and `1.3.6.1` sorts before
//! `1.3.6.1.1`. This is the canonical MIB ordering used by the store and by
//! GETNEXT; `Eq` and `Hash` are consistent with it, so the two spellings are
//! interchangeable as map keys.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{Error, OidErrorKind, Result};

/// Object Identifier.
///
/// A sequence of non-negative integer arcs, rendered as dot-joined decimal
/// with no leading zeros.
///
/// # Examples
///
/// ```
/// use mibcore::Oid;
///
/// let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
/// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.1.0");
/// assert_eq!(oid.len(), 9);
/// ```
#[derive(Clone)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an OID from arc values.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// Rejects empty input, empty segments (`"1..2"`), segments with any
    /// non-digit character (`"1.-3"`, `"a.b.c"`), and arcs that overflow
    /// `u32`. At least one segment is required. Leading zeros are accepted
    /// on input and dropped on output, so [`canonical`](Self::canonical)
    /// collapses equivalent spellings.
    ///
    /// # Examples
    ///
    /// ```
    /// use mibcore::Oid;
    ///
    /// assert!(Oid::parse("1.3.6.1").is_ok());
    /// assert!(Oid::parse("").is_err());
    /// assert!(Oid::parse("1..2").is_err());
    /// assert!(Oid::parse("1.-3").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::malformed_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs = SmallVec::new();

        for part in s.split('.') {
            if part.is_empty() {
                return Err(Error::malformed_oid_with_input(
                    OidErrorKind::EmptySegment,
                    s,
                ));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::malformed_oid_with_input(
                    OidErrorKind::InvalidDigit,
                    s,
                ));
            }
            let arc: u32 = part
                .parse()
                .map_err(|_| Error::malformed_oid_with_input(OidErrorKind::ArcOverflow, s))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Canonicalize an OID string: parse, then re-render with single dots
    /// and no leading zeros.
    ///
    /// ```
    /// use mibcore::Oid;
    ///
    /// assert_eq!(Oid::canonical("1.03.006.1").unwrap(), "1.3.6.1");
    /// ```
    pub fn canonical(s: &str) -> Result<String> {
        Ok(Self::parse(s)?.to_string())
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID's arcs.
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Create a child OID by appending an arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Arcs with trailing zeros stripped; the representative sequence for
    /// the zero-padded ordering.
    fn trimmed(&self) -> &[u32] {
        let end = self
            .arcs
            .iter()
            .rposition(|&a| a != 0)
            .map_or(0, |i| i + 1);
        &self.arcs[..end]
    }
}

impl PartialEq for Oid {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for Oid {}

impl Hash for Oid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    /// Zero-padded lexicographic comparison: missing trailing arcs of the
    /// shorter OID compare as `0`.
    fn cmp(&self, other: &Self) -> Ordering {
        let n = self.arcs.len().max(other.arcs.len());
        for i in 0..n {
            let a = self.arcs.get(i).copied().unwrap_or(0);
            let b = other.arcs.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{arc}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Oid({self})")
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Construct an [`Oid`] from arc literals.
///
/// ```
/// use mibcore::{Oid, oid};
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr, Oid::parse("1.3.6.1.2.1.1.1.0").unwrap());
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),+ $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
    }

    #[test]
    fn test_parse_single_segment() {
        let oid = Oid::parse("1").unwrap();
        assert_eq!(oid.arcs(), &[1]);
    }

    #[test]
    fn test_parse_rejects_bad_grammar() {
        assert!(Oid::parse("").is_err());
        assert!(Oid::parse("1..2").is_err());
        assert!(Oid::parse("1.-3").is_err());
        assert!(Oid::parse("a.b.c").is_err());
        assert!(Oid::parse(".1.2").is_err());
        assert!(Oid::parse("1.2.").is_err());
        assert!(Oid::parse("1.+3").is_err());
        assert!(Oid::parse("1. 2").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        // u32::MAX is 4294967295
        assert!(Oid::parse("1.4294967295").is_ok());
        assert!(Oid::parse("1.4294967296").is_err());
    }

    #[test]
    fn test_canonical_drops_leading_zeros() {
        assert_eq!(Oid::canonical("01.003.6.1").unwrap(), "1.3.6.1");
        assert_eq!(Oid::canonical("1.3.6.1.0").unwrap(), "1.3.6.1.0");
    }

    #[test]
    fn test_ordering_basic() {
        let a = Oid::parse("1.3.6.1.2").unwrap();
        let b = Oid::parse("1.3.6.1.2.1").unwrap();
        let c = Oid::parse("1.3.6.1.3").unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_ordering_zero_padding() {
        let short = Oid::parse("1.3.6.1").unwrap();
        let padded = Oid::parse("1.3.6.1.0").unwrap();
        assert_eq!(short.cmp(&padded), Ordering::Equal);
        assert_eq!(short, padded);

        // ...but a trailing 1 sorts strictly after
        let next = Oid::parse("1.3.6.1.0.1").unwrap();
        assert!(short < next);
    }

    #[test]
    fn test_ordering_antisymmetry() {
        let a = Oid::parse("1.3.6.1").unwrap();
        let b = Oid::parse("1.3.6.1.0").unwrap();
        let c = Oid::parse("1.3.6.2").unwrap();
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        assert_eq!(a.cmp(&c), c.cmp(&a).reverse());
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Oid::parse("1.3.6.1").unwrap());
        assert!(set.contains(&Oid::parse("1.3.6.1.0").unwrap()));
        assert!(!set.contains(&Oid::parse("1.3.6.1.1").unwrap()));
    }

    #[test]
    fn test_starts_with_and_child() {
        let system = oid!(1, 3, 6, 1, 2, 1, 1);
        let sys_descr = system.child(1).child(0);
        assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
        assert!(sys_descr.starts_with(&system));
        assert!(!system.starts_with(&sys_descr));
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "1.3.6.1.4.1.99999.1.2.0";
        assert_eq!(Oid::parse(text).unwrap().to_string(), text);
    }
}
