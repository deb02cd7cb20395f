//! Route color lookup.
//!
//! Every route in this feed has a pre-assigned brand color; the feed
//! itself does not carry them. A lookup miss means the table is out of
//! date and is an error, never a silent default.

use crate::domain::RouteColor;

/// The agency's default color (green, from the published service
/// schedule), used where no per-route color applies.
pub const AGENCY_COLOR: RouteColor = RouteColor::from_bytes(*b"B2DA18");

/// Error returned when a route has no assigned color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no color assigned for route {short_name}")]
pub struct UnknownRouteColor {
    pub short_name: u16,
}

/// Pre-assigned colors by numeric route short name. The 100-series
/// routes are the regular network; the 200-series are their school-day
/// counterparts and reuse the matching route's color.
const COLORS: &[(u16, RouteColor)] = &[
    (101, RouteColor::from_bytes(*b"F57215")),
    (102, RouteColor::from_bytes(*b"2E3192")),
    (103, RouteColor::from_bytes(*b"EC008C")),
    (104, RouteColor::from_bytes(*b"19B5F1")),
    (105, RouteColor::from_bytes(*b"ED1C24")),
    (106, RouteColor::from_bytes(*b"BAA202")),
    (107, RouteColor::from_bytes(*b"A05843")),
    (108, RouteColor::from_bytes(*b"008940")),
    (109, RouteColor::from_bytes(*b"66E530")),
    (110, RouteColor::from_bytes(*b"4372C2")),
    (111, RouteColor::from_bytes(*b"F24D3E")),
    (112, RouteColor::from_bytes(*b"9E50AE")),
    (113, RouteColor::from_bytes(*b"724A36")),
    (114, RouteColor::from_bytes(*b"B30E8E")),
    (203, RouteColor::from_bytes(*b"EC008C")),
    (204, RouteColor::from_bytes(*b"19B5F1")),
    (205, RouteColor::from_bytes(*b"ED1C24")),
    (206, RouteColor::from_bytes(*b"BAA202")),
    (209, RouteColor::from_bytes(*b"66C530")),
    (210, RouteColor::from_bytes(*b"4372C2")),
    (211, RouteColor::from_bytes(*b"F24D3E")),
    (213, RouteColor::from_bytes(*b"724A36")),
    (214, RouteColor::from_bytes(*b"B30E8E")),
];

/// Look up the pre-assigned color for a route short name.
///
/// # Examples
///
/// ```
/// use feed_normalizer::routes::route_color;
///
/// assert_eq!(route_color(101).unwrap().as_str(), "F57215");
/// assert!(route_color(999).is_err());
/// ```
pub fn route_color(short_name: u16) -> Result<RouteColor, UnknownRouteColor> {
    COLORS
        .iter()
        .find(|(rsn, _)| *rsn == short_name)
        .map(|(_, color)| *color)
        .ok_or(UnknownRouteColor { short_name })
}
