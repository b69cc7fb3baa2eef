//! Configuration for the agency rules.

use crate::domain::SUFFIXED_STOP_ID_OFFSET;

/// Tunable parameters of the agency rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Upper-case words that title-casing leaves alone.
    pub ignored_words: Vec<String>,

    /// Route numbers above this may be school routes.
    /// A school route is recognized by its long name.
    pub school_route_min: u32,

    /// Added to the digits of `a`-suffixed stop ids.
    pub suffixed_stop_id_offset: u32,

    /// Routes whose trips may share a non-descriptive headsign
    /// across directions.
    pub non_descriptive_headsign_routes: Vec<u32>,
}

impl RulesConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        ignored_words: Vec<String>,
        school_route_min: u32,
        suffixed_stop_id_offset: u32,
        non_descriptive_headsign_routes: Vec<u32>,
    ) -> Self {
        Self {
            ignored_words,
            school_route_min,
            suffixed_stop_id_offset,
            non_descriptive_headsign_routes,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            ignored_words: ["AM", "PM", "GD", "STO"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            school_route_min: 100,
            suffixed_stop_id_offset: SUFFIXED_STOP_ID_OFFSET,
            // 2023-08-15: two directions merged into the same headsigns
            non_descriptive_headsign_routes: vec![79],
        }
    }
}
