//! Exception table for historically irregular stop codes.

use crate::domain::StopId;

/// Irregular literal codes and their pre-assigned IDs. These few stops
/// predate the agency's numeric code scheme; their IDs are fixed
/// configuration, not derived, and must never change.
const ENTRIES: &[(&str, u32)] = &[
    ("Por&Burn", 1_000_001),
    ("Por&Mlnd", 1_000_002),
    ("Temp", 6_200_000),
];

/// Exact-match lookup, consulted before the general derivation
/// algorithm. `None` means the general algorithm applies.
pub fn lookup(code: &str) -> Option<StopId> {
    ENTRIES
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, id)| StopId::new(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_found() {
        assert_eq!(lookup("Por&Burn").map(|id| id.get()), Some(1_000_001));
        assert_eq!(lookup("Por&Mlnd").map(|id| id.get()), Some(1_000_002));
        assert_eq!(lookup("Temp").map(|id| id.get()), Some(6_200_000));
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        assert_eq!(lookup("por&burn"), None);
        assert_eq!(lookup("Por&Burn "), None);
        assert_eq!(lookup("temp"), None);
        assert_eq!(lookup(""), None);
    }
}
