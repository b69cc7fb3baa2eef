//! Domain types for the agency rules.
//!
//! Routes and stops as the host hands them over, plus the validated values
//! derived from them. Types that carry an invariant enforce it at
//! construction time.

mod route;
mod stop;

pub use route::{ColorAssignment, Route, RouteColor};
pub use stop::{InvalidStopId, SUFFIXED_STOP_ID_OFFSET, Stop, StopId};
