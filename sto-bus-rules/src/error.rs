//! Rule error types.
//!
//! Every variant is fatal for the import: it means the rule tables do not
//! cover a record the feed produced, and a maintainer has to review it.
//! Text cleanup never fails, so it has no variant here.

use crate::domain::InvalidStopId;

/// Errors raised by the agency rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Two long names for the same route that no rule knows how to merge
    #[error("unexpected routes to merge for route {route_id}: {long_name:?} & {other_long_name:?}")]
    UnexpectedRouteMerge {
        route_id: u32,
        long_name: String,
        other_long_name: String,
    },

    /// Asked to merge two different routes
    #[error("cannot merge route {route_id} with route {other_route_id}")]
    MismatchedRouteMerge { route_id: u32, other_route_id: u32 },

    /// Route number with no reviewed color decision
    #[error("unexpected route color for route {route_id} ({long_name:?})")]
    UnexpectedRouteColor { route_id: u32, long_name: String },

    /// Route short name is not a number
    #[error("route short name {short_name:?} is not a route number")]
    InvalidRouteShortName { short_name: String },

    /// Stop id with an unexpected shape
    #[error("unexpected stop ID {stop_id:?}: {source}")]
    UnexpectedStopId {
        stop_id: String,
        source: InvalidStopId,
    },
}
