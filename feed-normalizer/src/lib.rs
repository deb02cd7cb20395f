//! Feed normalizer for the Niagara Falls Transit GTFS feed.
//!
//! Turns the raw text fields of the feed (route long names, trip
//! headsigns, stop names) into consistently capitalized,
//! abbreviation-expanded labels, and derives stable integer stop IDs
//! from the agency's heterogeneous alphanumeric stop codes.
//!
//! Everything here is a pure function over immutable inputs: the
//! surrounding feed loader hands in raw records and receives
//! normalized strings and IDs back. No I/O happens in this crate.

pub mod domain;
pub mod feed;
pub mod normalize;
pub mod routes;
pub mod stops;
