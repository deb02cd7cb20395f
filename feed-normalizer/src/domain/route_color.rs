//! Route color type.

use std::fmt;

/// Error returned when parsing an invalid route color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route color: {reason}")]
pub struct InvalidRouteColor {
    reason: &'static str,
}

/// A valid 6-digit hex route color, without a leading `#`.
///
/// GTFS route colors are six hex digits (e.g. `"F57215"`). This type
/// guarantees that any `RouteColor` value is valid by construction,
/// and stores digits in their canonical uppercase form.
///
/// # Examples
///
/// ```
/// use feed_normalizer::domain::RouteColor;
///
/// let orange = RouteColor::parse("F57215").unwrap();
/// assert_eq!(orange.as_str(), "F57215");
///
/// // Lowercase digits are rejected
/// assert!(RouteColor::parse("f57215").is_err());
///
/// // Wrong length is rejected
/// assert!(RouteColor::parse("F57").is_err());
/// assert!(RouteColor::parse("F5721500").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteColor([u8; 6]);

impl RouteColor {
    /// Parse a route color from a string.
    ///
    /// The input must be exactly 6 uppercase hex digits (0-9, A-F).
    pub fn parse(s: &str) -> Result<Self, InvalidRouteColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidRouteColor {
                reason: "must be exactly 6 hex digits",
            });
        }

        let mut color = [0u8; 6];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_digit() && !(b'A'..=b'F').contains(&b) {
                return Err(InvalidRouteColor {
                    reason: "must be uppercase hex digits 0-9, A-F",
                });
            }
            color[i] = b;
        }

        Ok(RouteColor(color))
    }

    /// Construct from a known-valid byte literal.
    ///
    /// Only used by the static color tables, whose entries are
    /// checked by tests against `parse`.
    pub(crate) const fn from_bytes(bytes: [u8; 6]) -> Self {
        RouteColor(bytes)
    }

    /// Returns the color as a hex string slice, without a `#`.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteColor({})", self.as_str())
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid color strings: 6 uppercase hex digits
    fn valid_color_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9A-F]{6}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_color_string()) {
            let color = RouteColor::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.as_str());
        }

        /// Any valid color can be parsed
        #[test]
        fn valid_always_parses(s in valid_color_string()) {
            prop_assert!(RouteColor::parse(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9A-F]{0,5}|[0-9A-F]{7,12}") {
            prop_assert!(RouteColor::parse(&s).is_err());
        }

        /// Strings with lowercase hex are rejected
        #[test]
        fn lowercase_rejected(s in "[0-9a-f]{6}".prop_filter("has lowercase", |s| {
            s.chars().any(|c| c.is_ascii_lowercase())
        })) {
            prop_assert!(RouteColor::parse(&s).is_err());
        }
    }
}
