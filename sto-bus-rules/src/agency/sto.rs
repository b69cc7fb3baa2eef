//! Société de transport de l'Outaouais (Gatineau) bus rules.

use tracing::{debug, warn};

use crate::agency::colors::assigned_color;
use crate::agency::merge::{find_merge_exception, simple_merge_long_name};
use crate::agency::patterns::*;
use crate::agency::tools::{AgencyFeatures, AgencyTools};
use crate::config::RulesConfig;
use crate::domain::{Route, RouteColor, Stop, StopId};
use crate::error::RulesError;
use crate::text::{
    CLEAN_ET, CLEAN_ET_REPLACEMENT, Rule, RuleSet, SAINT, SAINT_REPLACEMENT, clean_bounds,
    clean_label, clean_label_fr, clean_numbers, clean_slashes, clean_street_types_fr_ca, compose,
    keep_to_and_remove_via, title_case_words,
};

pub const AGENCY_NAME: &str = "STO";

/// Blue, Pantone 7474.
pub const AGENCY_COLOR: &str = "007F89";

/// STO bus rules.
#[derive(Debug)]
pub struct StoBusAgency {
    config: RulesConfig,
    route_long_name_rules: RuleSet,
    trip_headsign_rules: RuleSet,
    stop_name_rules: RuleSet,
}

impl StoBusAgency {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            route_long_name_rules: route_long_name_rules(&config),
            trip_headsign_rules: trip_headsign_rules(&config),
            stop_name_rules: stop_name_rules(&config),
            config,
        }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn route_long_name_rules(&self) -> &RuleSet {
        &self.route_long_name_rules
    }

    pub fn trip_headsign_rules(&self) -> &RuleSet {
        &self.trip_headsign_rules
    }

    pub fn stop_name_rules(&self) -> &RuleSet {
        &self.stop_name_rules
    }
}

impl Default for StoBusAgency {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

fn title_case(config: &RulesConfig) -> Rule {
    let ignored = config.ignored_words.clone();
    Rule::map("title_case", move |text| title_case_words(text, &ignored))
}

fn route_long_name_rules(config: &RulesConfig) -> RuleSet {
    RuleSet::new()
        .then(Rule::map("compose", compose))
        .then(title_case(config))
        .then(Rule::replace(
            "cegep_gabrielle_roy",
            &CEGEP_GABRIELLE_ROY,
            CEGEP_GABRIELLE_ROY_REPLACEMENT,
        ))
        .then(Rule::map("slashes", clean_slashes))
        .then(Rule::map("label", clean_label))
}

fn trip_headsign_rules(config: &RulesConfig) -> RuleSet {
    RuleSet::new()
        .then(Rule::map("compose", compose))
        .then(Rule::map("keep_to_remove_via", keep_to_and_remove_via))
        .then(title_case(config))
        .then(Rule::replace("station", &STATION, STATION_REPLACEMENT))
        .then(Rule::replace(
            "cegep_gabrielle_roy",
            &CEGEP_GABRIELLE_ROY,
            CEGEP_GABRIELLE_ROY_REPLACEMENT,
        ))
        .then(Rule::replace("college", &COLLEGE, COLLEGE_REPLACEMENT))
        .then(Rule::replace(
            "college_nouvelles_frontieres",
            &COLLEGE_NOUVELLES_FRONTIERES,
            COLLEGE_NOUVELLES_FRONTIERES_REPLACEMENT,
        ))
        .then(Rule::replace(
            "college_saint_joseph",
            &COLLEGE_SAINT_JOSEPH,
            COLLEGE_SAINT_JOSEPH_REPLACEMENT,
        ))
        .then(Rule::replace(
            "college_saint_alexandre",
            &COLLEGE_SAINT_ALEXANDRE,
            COLLEGE_SAINT_ALEXANDRE_REPLACEMENT,
        ))
        .then(Rule::replace("ecole", &ECOLE_X, ECOLE_X_REPLACEMENT))
        .then(Rule::replace(
            "grande_riviere",
            &GRANDE_RIVIERE,
            GRANDE_RIVIERE_REPLACEMENT,
        ))
        .then(Rule::replace(
            "galeries_aylmer",
            &GALERIES_AYLMER,
            GALERIES_AYLMER_REPLACEMENT,
        ))
        .then(Rule::replace(
            "jardins_lavigne",
            &JARDINS_LAVIGNE,
            JARDINS_LAVIGNE_REPLACEMENT,
        ))
        .then(Rule::replace(
            "allumettieres",
            &ALLUMETTIERES,
            ALLUMETTIERES_REPLACEMENT,
        ))
        .then(Rule::replace(
            "cotes_des_neiges",
            &COTES_DES_NEIGES,
            COTES_DES_NEIGES_REPLACEMENT,
        ))
        .then(Rule::replace("parc_o_bus", &PARC_O_BUS, PARC_O_BUS_REPLACEMENT))
        .then(Rule::replace(
            "place_d_accueil",
            &PLACE_D_ACCUEIL,
            PLACE_D_ACCUEIL_REPLACEMENT,
        ))
        .then(Rule::replace("pre_tunney", &PRE_TUNNEY, PRE_TUNNEY_REPLACEMENT))
        .then(Rule::replace(
            "musee_canadien_histoire",
            &MUSEE_CANADIEN_HISTOIRE,
            MUSEE_CANADIEN_HISTOIRE_REPLACEMENT,
        ))
        .then(Rule::replace(
            "masson_angers",
            &MASSON_ANGERS,
            MASSON_ANGERS_REPLACEMENT,
        ))
        .then(Rule::replace("mont_bleu", &MONT_BLEU, MONT_BLEU_REPLACEMENT))
        .then(Rule::replace("et", &CLEAN_ET, CLEAN_ET_REPLACEMENT))
        .then(Rule::map("slashes", clean_slashes))
        .then(Rule::map("numbers", clean_numbers))
        .then(Rule::map("street_types", clean_street_types_fr_ca))
        .then(Rule::map("label_fr", clean_label_fr))
}

fn stop_name_rules(config: &RulesConfig) -> RuleSet {
    RuleSet::new()
        .then(Rule::map("compose", compose))
        .then(title_case(config))
        .then(Rule::map("bounds", clean_bounds))
        .then(Rule::replace(
            "arrival_departure",
            &ARRIVAL_DEPARTURE,
            ARRIVAL_DEPARTURE_REPLACEMENT,
        ))
        // stripping a marker can leave a dangling separator behind
        .then(Rule::map("bounds_after_markers", clean_bounds))
        .then(Rule::replace(
            "courtesy_stop",
            &COURTESY_STOP,
            COURTESY_STOP_REPLACEMENT,
        ))
        .then(Rule::replace("parc_o_bus", &PARC_O_BUS, PARC_O_BUS_REPLACEMENT))
        .then(Rule::replace("ecole", &ECOLE_X, ECOLE_X_REPLACEMENT))
        .then(Rule::replace("saint", &SAINT, SAINT_REPLACEMENT))
        .then(Rule::replace("et", &CLEAN_ET, CLEAN_ET_REPLACEMENT))
        .then(Rule::map("slashes", clean_slashes))
        .then(Rule::map("street_types", clean_street_types_fr_ca))
        .then(Rule::map("label_fr", clean_label_fr))
}

impl AgencyTools for StoBusAgency {
    fn agency_name(&self) -> &str {
        AGENCY_NAME
    }

    fn agency_color(&self) -> Option<&str> {
        Some(AGENCY_COLOR)
    }

    fn features(&self) -> AgencyFeatures {
        AgencyFeatures {
            default_exclude: true,
            default_route_id: true,
            default_agency_color: true,
            direction_finder: true,
        }
    }

    fn clean_route_long_name(&self, long_name: &str) -> String {
        self.route_long_name_rules.apply(long_name)
    }

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
        if let Some(merged) = simple_merge_long_name(long_name, other_long_name) {
            return Ok(merged);
        }

        match find_merge_exception(route_id, long_name, other_long_name) {
            Some(exception) => {
                debug!(route_id, merged = exception.merged, "merged long names from table");
                Ok(exception.merged.to_string())
            }
            None => {
                warn!(route_id, long_name, other_long_name, "unexpected routes to merge");
                Err(RulesError::UnexpectedRouteMerge {
                    route_id,
                    long_name: long_name.to_string(),
                    other_long_name: other_long_name.to_string(),
                })
            }
        }
    }

    fn provide_missing_route_color(&self, route: &Route) -> Result<Option<RouteColor>, RulesError> {
        let route_id = self.route_id(route)?;
        let long_name = route.long_name_or_default();
        if route_id > self.config.school_route_min && SCHOOL_ROUTE_LONG_NAME.is_match(long_name) {
            return Ok(Some(RouteColor::SchoolBus));
        }

        match assigned_color(route_id) {
            Some(assignment) => Ok(assignment.color()),
            None => {
                warn!(route_id, long_name, "unexpected route color");
                Err(RulesError::UnexpectedRouteColor {
                    route_id,
                    long_name: long_name.to_string(),
                })
            }
        }
    }

    fn allow_non_descriptive_headsigns(&self, route_id: u32) -> bool {
        self.config.non_descriptive_headsign_routes.contains(&route_id)
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        self.trip_headsign_rules.apply(headsign)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        self.stop_name_rules.apply(name)
    }

    /// The explicit code, or the source stop id when the feed has none.
    fn stop_code(&self, stop: &Stop) -> String {
        match stop.code.as_deref() {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => stop.id.clone(),
        }
    }

    fn stop_id(&self, stop: &Stop) -> Result<u32, RulesError> {
        StopId::parse_with_offset(&stop.id, self.config.suffixed_stop_id_offset)
            .map(StopId::get)
            .map_err(|source| {
                warn!(stop_id = %stop.id, %source, "unexpected stop ID");
                RulesError::UnexpectedStopId {
                    stop_id: stop.id.clone(),
                    source,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sto() -> StoBusAgency {
        StoBusAgency::default()
    }

    #[test]
    fn metadata() {
        let sto = sto();
        assert_eq!(sto.agency_name(), "STO");
        assert_eq!(sto.agency_color(), Some("007F89"));
        assert_eq!(sto.agency_route_type(), 3);
        let features = sto.features();
        assert!(features.default_exclude);
        assert!(features.default_route_id);
        assert!(features.default_agency_color);
        assert!(features.direction_finder);
    }

    #[test]
    fn route_long_names() {
        let sto = sto();
        assert_eq!(
            sto.clean_route_long_name("STATION CITÉ/G-ROY/OTTAWA"),
            "Station Cité / Cgp GRoy / Ottawa"
        );
        assert_eq!(
            sto.clean_route_long_name("CÉGEP GABRIELLE-ROY"),
            "Cgp GRoy"
        );
        assert_eq!(
            sto.clean_route_long_name("LABROSSE/CHEVAL-BLANC"),
            "Labrosse / Cheval-Blanc"
        );
        assert_eq!(sto.clean_route_long_name(""), "");
    }

    #[test]
    fn route_long_name_keeps_ignored_words() {
        assert_eq!(
            sto().clean_route_long_name("FREEMAN AM"),
            "Freeman AM"
        );
    }

    #[test]
    fn decomposed_accents_are_composed() {
        assert_eq!(
            sto().clean_route_long_name("CITE\u{301}"),
            "Cité"
        );
    }

    #[test]
    fn headsign_via_and_station() {
        assert_eq!(
            sto().clean_trip_headsign("Station Cégep Gabrielle-Roy via Rue Principale"),
            "Cgp GRoy"
        );
    }

    #[test]
    fn headsigns() {
        let sto = sto();
        let cases = [
            ("ÉCOLE SECONDAIRE GRANDE-RIVIÈRE", "É Gr-Riv"),
            ("COLLÈGE NOUVELLES FRONTIÈRES", "Col NF"),
            ("C STJOSEPH", "Col St-Jo"),
            ("BOUL. DES ALLUMETTIÈRES", "Boul. Allum"),
            ("GALERIES AYLMER", "Gal.Aylmer"),
            ("PARC-O-BUS RIVERMEAD", "P-O-B Rivermead"),
            ("PREMIÈRE AVENUE", "1re Av"),
            ("FREEMAN ET LABROSSE", "Freeman & Labrosse"),
            ("MUSÉE CANADIEN DE L'HISTOIRE", "Musée de l'Histoire"),
            ("MASSON-ANGERS", "M-Angers"),
            ("ÉCOLE MONT-BLEU", "É MontBleu"),
            ("AYLMER TO FREEMAN/LABROSSE", "Freeman / Labrosse"),
            ("PLACE D'ACCUEIL", "Pl.Accueil"),
        ];
        for (raw, expected) in cases {
            assert_eq!(sto.clean_trip_headsign(raw), expected, "{raw}");
        }
    }

    #[test]
    fn headsign_lowercases_particles() {
        assert_eq!(
            sto().clean_trip_headsign("STATION DE LA CITÉ DES JEUNES"),
            "De La Cité des Jeunes"
        );
    }

    #[test]
    fn stop_names() {
        let sto = sto();
        let cases = [
            ("ARRÊT DE COURTOISIE RUE NOTRE-DAME", "Rue Notre-Dame (Arrêt de Courtoisie)"),
            ("ÉCOLE DU PLATEAU", "É du Plateau"),
            ("FREEMAN / ARRIVÉE", "Freeman"),
            ("DÉPART FREEMAN", "Freeman"),
            ("FREEMAN - TEMPS D'ATTENTE", "Freeman"),
            ("FREEMAN DÉPART / ARRIVÉE", "Freeman"),
            ("RUE X ARRIVÉE - TEMPS D'ATTENTE", "Rue X"),
            ("FREEMAN (NORD), RUE X", "Freeman (Nord), Rue X"),
            ("BOULEVARD SAINT-RAYMOND ET RUE X", "Boul St-Raymond & Rue X"),
            ("LABROSSE/CHEVAL-BLANC", "Labrosse / Cheval-Blanc"),
            ("PARC O BUS RIVERMEAD", "P-O-B Rivermead"),
            (" - CHEMIN VANIER / ", "Ch Vanier"),
        ];
        for (raw, expected) in cases {
            assert_eq!(sto.clean_stop_name(raw), expected, "{raw}");
        }
    }

    #[test]
    fn stacked_markers_settle_in_one_pass() {
        let sto = sto();
        for raw in [
            "FREEMAN DÉPART / ARRIVÉE",
            "RUE X ARRIVÉE - TEMPS D'ATTENTE",
            "ARRIVÉE DÉPART FREEMAN",
        ] {
            let once = sto.clean_stop_name(raw);
            assert_eq!(sto.clean_stop_name(&once), once, "{raw}");
        }
    }

    #[test]
    fn rule_order() {
        let sto = sto();
        assert_eq!(
            sto.route_long_name_rules().names().collect::<Vec<_>>(),
            ["compose", "title_case", "cegep_gabrielle_roy", "slashes", "label"]
        );
        assert_eq!(
            sto.stop_name_rules().names().collect::<Vec<_>>(),
            [
                "compose",
                "title_case",
                "bounds",
                "arrival_departure",
                "bounds_after_markers",
                "courtesy_stop",
                "parc_o_bus",
                "ecole",
                "saint",
                "et",
                "slashes",
                "street_types",
                "label_fr",
            ]
        );

        let headsign: Vec<_> = sto.trip_headsign_rules().names().collect();
        assert_eq!(headsign.len(), 26);
        assert_eq!(&headsign[..4], ["compose", "keep_to_remove_via", "title_case", "station"]);
        assert_eq!(&headsign[22..], ["slashes", "numbers", "street_types", "label_fr"]);
    }

    #[test]
    fn title_case_runs_before_place_rules() {
        // place patterns are written for title-cased words
        let rules = sto();
        let names: Vec<_> = rules.trip_headsign_rules().names().collect();
        let pos = |name| names.iter().position(|n| *n == name).unwrap();
        assert!(pos("title_case") < pos("cegep_gabrielle_roy"));
        assert!(pos("college") < pos("college_nouvelles_frontieres"));
        assert!(pos("ecole") < pos("grande_riviere"));
        assert!(pos("et") < pos("slashes"));
    }

    #[test]
    fn merge_route_33() {
        let a = Route::new("33", "Station Cité / G-Roy / Ottawa");
        let b = Route::new("33", "Station De La Cité / Cegep Gabrielle-Roy / Ottawa");
        assert_eq!(
            sto().merge_route_long_name(&a, &b).as_deref(),
            Ok("Station De La Cité / Cegep Gabrielle-Roy / Ottawa")
        );
    }

    #[test]
    fn merge_route_33_without_slash_spacing() {
        let a = Route::new("33", "Station Cité/G-Roy/Ottawa");
        let b = Route::new("33", "Station Cité/Cegep G-Roy/Ottawa");
        assert_eq!(
            sto().merge_route_long_name(&a, &b).as_deref(),
            Ok("Station De La Cité / Cegep Gabrielle-Roy / Ottawa")
        );

        let c = Route::new("33", "Station Cité/Freeman/Ottawa");
        assert!(matches!(
            sto().merge_route_long_name(&a, &c),
            Err(RulesError::UnexpectedRouteMerge { route_id: 33, .. })
        ));
    }

    #[test]
    fn merge_route_37_second_entry() {
        let a = Route::new("37", "Cegep G-Roy");
        let b = Route::new("37", "Cegep Gab-Roy / St-Joseph");
        assert_eq!(
            sto().merge_route_long_name(&a, &b).as_deref(),
            Ok("Cegep Gab-Roy / St-Joseph")
        );
    }

    #[test]
    fn merge_simple_first() {
        let a = Route::new("12", "Freeman");
        let b = Route::new("12", "Freeman / Labrosse");
        assert_eq!(
            sto().merge_route_long_name(&a, &b).as_deref(),
            Ok("Freeman / Labrosse")
        );
    }

    #[test]
    fn merge_unknown_pair_is_fatal() {
        let a = Route::new("33", "Station Cité / G-Roy / Ottawa");
        let b = Route::new("33", "Freeman");
        assert_eq!(
            sto().merge_route_long_name(&a, &b),
            Err(RulesError::UnexpectedRouteMerge {
                route_id: 33,
                long_name: "Station Cité / G-Roy / Ottawa".into(),
                other_long_name: "Freeman".into(),
            })
        );

        let a = Route::new("34", "Cegep G-Roy");
        let b = Route::new("34", "Cegep Gabrielle-Roy");
        assert!(sto().merge_route_long_name(&a, &b).is_err());
    }

    #[test]
    fn merge_different_routes_is_fatal() {
        let a = Route::new("33", "Freeman");
        let b = Route::new("37", "Freeman");
        assert!(matches!(
            sto().merge_route_long_name(&a, &b),
            Err(RulesError::MismatchedRouteMerge { .. })
        ));
    }

    #[test]
    fn route_colors() {
        let sto = sto();
        let color = |short: &str, long: &str| sto.provide_missing_route_color(&Route::new(short, long));

        assert_eq!(color("11", "Freeman"), Ok(Some(RouteColor::Peak)));
        assert_eq!(color("18", "Freeman"), Ok(Some(RouteColor::Regular)));
        assert_eq!(color("100", "Rapibus"), Ok(Some(RouteColor::Rapibus100)));
        assert_eq!(color("200", "Rapibus"), Ok(Some(RouteColor::Rapibus200)));
        assert_eq!(color("72", "Freeman"), Ok(None));
        assert_eq!(color("990", "Freeman"), Ok(None));
    }

    #[test]
    fn school_routes() {
        let sto = sto();
        let color = |short: &str, long: &str| sto.provide_missing_route_color(&Route::new(short, long));

        // not in the table, but recognized by name
        assert_eq!(color("612", "École Mont-Bleu"), Ok(Some(RouteColor::SchoolBus)));
        assert_eq!(color("800", "Cegep Gabrielle-Roy"), Ok(Some(RouteColor::SchoolBus)));
        // at or below the threshold the table wins
        assert_eq!(color("100", "Cégep"), Ok(Some(RouteColor::Rapibus100)));
        assert_eq!(color("33", "Cgp GRoy"), Ok(Some(RouteColor::Regular)));
    }

    #[test]
    fn unreviewed_route_color_is_fatal() {
        let sto = sto();
        assert_eq!(
            sto.provide_missing_route_color(&Route::new("12", "Freeman")),
            Err(RulesError::UnexpectedRouteColor {
                route_id: 12,
                long_name: "Freeman".into(),
            })
        );
        assert!(sto.provide_missing_route_color(&Route::new("999", "Freeman")).is_err());
        assert_eq!(
            sto.provide_missing_route_color(&Route::new("X1", "Freeman")),
            Err(RulesError::InvalidRouteShortName {
                short_name: "X1".into()
            })
        );
    }

    #[test]
    fn non_descriptive_headsigns() {
        let sto = sto();
        assert!(sto.allow_non_descriptive_headsigns(79));
        assert!(!sto.allow_non_descriptive_headsigns(33));
    }

    #[test]
    fn stop_codes() {
        let sto = sto();
        assert_eq!(sto.stop_code(&Stop::new("2012", "Freeman").with_code("1045")), "1045");
        assert_eq!(sto.stop_code(&Stop::new("2012", "Freeman").with_code("")), "2012");
        assert_eq!(sto.stop_code(&Stop::new("45a", "Freeman")), "45a");
    }

    #[test]
    fn stop_ids() {
        let sto = sto();
        let id = |raw: &str| sto.stop_id(&Stop::new(raw, "Freeman"));
        assert_eq!(id("12345"), Ok(12345));
        assert_eq!(id("45a"), Ok(100_045));
        assert_eq!(id("45A"), Ok(100_045));
        assert!(matches!(id("abc"), Err(RulesError::UnexpectedStopId { .. })));
        assert!(matches!(id(""), Err(RulesError::UnexpectedStopId { .. })));
        assert!(matches!(id("45b"), Err(RulesError::UnexpectedStopId { .. })));
    }

    #[test]
    fn stop_id_offset_from_config() {
        let config = RulesConfig {
            suffixed_stop_id_offset: 500_000,
            ..RulesConfig::default()
        };
        let sto = StoBusAgency::new(config);
        assert_eq!(sto.stop_id(&Stop::new("45a", "Freeman")), Ok(500_045));
    }
}
