//! Raw feed records and the per-record normalization facade.
//!
//! The surrounding feed loader parses GTFS tables and hands each
//! record here; the `process_*` functions apply the appropriate
//! pipelines and derivations and return the normalized form for the
//! output sink. Stop-ID and color failures propagate as errors so the
//! driver can abort the run on bad data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{FieldKind, RouteColor, StopId};
use crate::normalize::normalize;
use crate::routes::{UnknownRouteColor, route_color};
use crate::stops::{StopIdError, derive_stop_id};

/// A raw route record as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoute {
    pub short_name: String,
    pub long_name: String,
    pub agency_id: String,
}

/// A raw trip record as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrip {
    pub headsign: String,
}

/// A raw stop record as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStop {
    pub code: String,
    pub id: String,
    pub name: String,
}

/// A stop record ready for the output sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStop {
    pub id: StopId,
    /// The public stop code; empty when the feed carries the
    /// placeholder `"0"`.
    pub code: String,
    pub name: String,
}

/// A route record ready for the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRoute {
    pub long_name: String,
    pub color: RouteColor,
}

/// Error produced while normalizing a route record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The route short name is not a plain integer, so no color can
    /// be assigned.
    #[error("route short name {value:?} is not numeric")]
    NonNumericShortName { value: String },

    #[error(transparent)]
    UnknownColor(#[from] UnknownRouteColor),
}

/// Normalize a stop record: derive its ID and clean its name.
pub fn process_stop(stop: &RawStop) -> Result<NormalizedStop, StopIdError> {
    let id = derive_stop_id(&stop.code, &stop.id)?;
    let name = normalize(FieldKind::StopName, &stop.name);
    let code = if stop.code == "0" {
        String::new()
    } else {
        stop.code.clone()
    };
    debug!(stop = %id, name = %name, "normalized stop");
    Ok(NormalizedStop { id, code, name })
}

/// Normalize a route record: clean its long name and look up its color.
pub fn process_route(route: &RawRoute) -> Result<NormalizedRoute, RouteError> {
    let short_name =
        route
            .short_name
            .parse::<u16>()
            .map_err(|_| RouteError::NonNumericShortName {
                value: route.short_name.clone(),
            })?;
    let color = route_color(short_name)?;
    let long_name = normalize(FieldKind::RouteLongName, &route.long_name);
    debug!(route = short_name, color = %color, "normalized route");
    Ok(NormalizedRoute { long_name, color })
}

/// Normalize a trip's headsign. Total, like all text normalization.
pub fn process_trip(trip: &RawTrip) -> String {
    normalize(FieldKind::TripHeadsign, &trip.headsign)
}
