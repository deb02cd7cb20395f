//! Raw field classification.

use serde::{Deserialize, Serialize};

/// The kind of raw feed field a string came from.
///
/// Each kind selects a different normalization pipeline: stop names
/// get the full label cleanup, headsigns additionally lose their
/// structural noise (leading route numbers, arrow artifacts), route
/// long names only lose their "Rte NN" prefix, and stop codes only
/// lose the agency-internal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    RouteLongName,
    TripHeadsign,
    StopName,
    StopCode,
}
