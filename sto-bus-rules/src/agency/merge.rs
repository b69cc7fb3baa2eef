//! Route long-name merging.
//!
//! The feed sometimes publishes one route number under several long names.
//! Harmless variants merge on their own; the rest need an explicit entry in
//! [`MERGE_EXCEPTIONS`].

use crate::text::clean_slashes;

/// An accepted set of long names for one route, and the name to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeException {
    pub route_id: u32,
    pub accepted: &'static [&'static str],
    pub merged: &'static str,
}

impl MergeException {
    /// Check if both names are in the accepted set.
    ///
    /// Slash spacing is normalized before comparing.
    pub fn accepts(&self, route_id: u32, long_name: &str, other_long_name: &str) -> bool {
        if self.route_id != route_id {
            return false;
        }
        let accepted = |name: &str| {
            let name = clean_slashes(name);
            self.accepted.iter().any(|a| *a == name)
        };
        accepted(long_name) && accepted(other_long_name)
    }
}

/// Known long-name variants. Entries for the same route are tried in order.
pub static MERGE_EXCEPTIONS: &[MergeException] = &[
    MergeException {
        route_id: 33,
        accepted: &[
            "Station Cité / G-Roy / Ottawa",
            "Station Cité / Cegep G-Roy / Ottawa",
            "Station De La Cité / Cegep Gabrielle-Roy / Ottawa",
        ],
        merged: "Station De La Cité / Cegep Gabrielle-Roy / Ottawa",
    },
    MergeException {
        route_id: 37,
        accepted: &["Cegep G-Roy", "Cegep Gabrielle-Roy"],
        merged: "Cegep Gabrielle-Roy",
    },
    MergeException {
        route_id: 37,
        accepted: &["Cegep G-Roy", "Cegep Gabrielle-Roy", "Cegep Gab-Roy / St-Joseph"],
        merged: "Cegep Gab-Roy / St-Joseph",
    },
    MergeException {
        route_id: 66,
        accepted: &["Mont-Luc / Dubarry", "Montluc Dubarry"],
        merged: "Mont-Luc / Dubarry",
    },
    MergeException {
        route_id: 88,
        accepted: &["Station Labrosse / Cheval-Blanc", "Station Labrosse-Cheval Blanc"],
        merged: "Station Labrosse / Cheval-Blanc",
    },
];

/// The first exception accepting both names, if any.
pub fn find_merge_exception(
    route_id: u32,
    long_name: &str,
    other_long_name: &str,
) -> Option<&'static MergeException> {
    MERGE_EXCEPTIONS
        .iter()
        .find(|e| e.accepts(route_id, long_name, other_long_name))
}

/// Merge two long names that obviously describe the same route.
///
/// Equal names, an empty name, or a name contained in the other all merge
/// to the longer one. Anything else returns `None`.
pub fn simple_merge_long_name(long_name: &str, other_long_name: &str) -> Option<String> {
    if other_long_name.is_empty() || long_name.contains(other_long_name) {
        Some(long_name.to_string())
    } else if long_name.is_empty() || other_long_name.contains(long_name) {
        Some(other_long_name.to_string())
    } else {
        None
    }
}
