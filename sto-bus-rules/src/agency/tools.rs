//! The hooks an import host calls for each agency.

use tracing::warn;

use crate::agency::merge::simple_merge_long_name;
use crate::domain::{Route, RouteColor, Stop, StopId};
use crate::error::RulesError;
use crate::text::clean_label;

/// GTFS route type for buses.
pub const ROUTE_TYPE_BUS: u16 = 3;

/// Host behaviours an agency opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgencyFeatures {
    /// Drop services that are not in the current schedule.
    pub default_exclude: bool,
    /// Use the numeric short name as route id.
    pub default_route_id: bool,
    /// Use the agency color for routes without one.
    pub default_agency_color: bool,
    /// Let the host work out trip directions.
    pub direction_finder: bool,
}

/// Per-agency rules applied while importing a feed.
///
/// Every hook has the behaviour a host applies when the agency does not
/// override it. Cleaners never fail; the other hooks return a
/// [`RulesError`] when a record is not covered by the agency's tables.
pub trait AgencyTools {
    /// Short agency name.
    fn agency_name(&self) -> &str;

    /// Agency color, six hex digits.
    fn agency_color(&self) -> Option<&str> {
        None
    }

    /// GTFS route type of every route.
    fn agency_route_type(&self) -> u16 {
        ROUTE_TYPE_BUS
    }

    fn features(&self) -> AgencyFeatures {
        AgencyFeatures::default()
    }

    /// Numeric route id, from the short name.
    fn route_id(&self, route: &Route) -> Result<u32, RulesError> {
        route
            .number()
            .map_err(|_| RulesError::InvalidRouteShortName {
                short_name: route.short_name.clone(),
            })
    }

    fn clean_route_long_name(&self, long_name: &str) -> String {
        clean_label(long_name)
    }

    /// Merge the long names of two records for the same route.
    fn merge_route_long_name(&self, route: &Route, other: &Route) -> Result<String, RulesError> {
        let route_id = self.route_id(route)?;
        let other_route_id = self.route_id(other)?;
        if route_id != other_route_id {
            warn!(route_id, other_route_id, "merging different routes");
            return Err(RulesError::MismatchedRouteMerge {
                route_id,
                other_route_id,
            });
        }

        let long_name = route.long_name_or_default();
        let other_long_name = other.long_name_or_default();
        simple_merge_long_name(long_name, other_long_name).ok_or_else(|| {
            warn!(route_id, long_name, other_long_name, "unexpected routes to merge");
            RulesError::UnexpectedRouteMerge {
                route_id,
                long_name: long_name.to_string(),
                other_long_name: other_long_name.to_string(),
            }
        })
    }

    /// Color for a route the feed publishes without one.
    ///
    /// `Ok(None)` leaves the route uncolored.
    fn provide_missing_route_color(&self, _route: &Route) -> Result<Option<RouteColor>, RulesError> {
        Ok(None)
    }

    /// Check if trips of this route may share a headsign across directions.
    fn allow_non_descriptive_headsigns(&self, _route_id: u32) -> bool {
        false
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_label(headsign)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_label(name)
    }

    /// Rider-facing stop code.
    fn stop_code(&self, stop: &Stop) -> String {
        stop.code.clone().unwrap_or_default()
    }

    /// Numeric stop id, stable across imports.
    fn stop_id(&self, stop: &Stop) -> Result<u32, RulesError> {
        StopId::parse_digits(&stop.id)
            .map(StopId::get)
            .map_err(|source| RulesError::UnexpectedStopId {
                stop_id: stop.id.clone(),
                source,
            })
    }
}
