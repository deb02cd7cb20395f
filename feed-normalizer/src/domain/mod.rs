//! Domain types for feed normalization.
//!
//! This module contains the small validated types that the rest of the
//! crate produces and consumes. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod field_kind;
mod route_color;
mod stop_id;

pub use field_kind::FieldKind;
pub use route_color::{InvalidRouteColor, RouteColor};
pub use stop_id::{
    BUCKET_A, BUCKET_B, BUCKET_C, BUCKET_IN, BUCKET_OUT, BUCKET_TEMP10, StopId,
};
