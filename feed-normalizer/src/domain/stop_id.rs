//! Stop identifier type and bucket constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base offset for stop codes with an `a` suffix.
pub const BUCKET_A: u32 = 100_000;
/// Base offset for stop codes with a `b` suffix.
pub const BUCKET_B: u32 = 200_000;
/// Base offset for stop codes with a `c` suffix.
pub const BUCKET_C: u32 = 300_000;
/// Base offset for stop codes with an `in` suffix.
pub const BUCKET_IN: u32 = 5_000_000;
/// Base offset for stop codes with an `out` suffix.
pub const BUCKET_OUT: u32 = 5_100_000;
/// Base offset for stop codes with a `temp10` suffix.
pub const BUCKET_TEMP10: u32 = 6_100_000;

/// A derived stop identifier.
///
/// Stop IDs live in disjoint integer ranges: all-digit stop codes map
/// to their literal value, and each suffix family is re-encoded into
/// its own reserved bucket (see the `BUCKET_*` constants). The ranges
/// are spaced widely enough that no two suffix families can collide
/// for digit values seen in practice, which is what lets the ID be a
/// pure function of the raw code with no stored mapping table.
///
/// Values are only produced by [`crate::stops::derive_stop_id`] and
/// the exception table; they are computed once per stop record and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(u32);

impl StopId {
    /// Wrap a raw derived value.
    pub(crate) const fn new(id: u32) -> Self {
        StopId(id)
    }

    /// Returns the ID as a plain integer.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_roundtrip() {
        assert_eq!(StopId::new(1234).get(), 1234);
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(format!("{}", StopId::new(5_000_045)), "5000045");
    }

    #[test]
    fn ordering_follows_value() {
        assert!(StopId::new(100_012) < StopId::new(200_012));
    }

    #[test]
    fn buckets_are_strictly_increasing() {
        let buckets = [BUCKET_A, BUCKET_B, BUCKET_C, BUCKET_IN, BUCKET_OUT, BUCKET_TEMP10];
        for pair in buckets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&StopId::new(100_012)).unwrap();
        assert_eq!(json, "100012");
    }
}
