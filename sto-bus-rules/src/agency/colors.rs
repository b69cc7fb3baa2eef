//! Route color table.
//!
//! Every route number the feed can produce must be listed here. A number
//! mapped to `UNKNOWN` has been reviewed and has no color yet; a number that
//! is missing altogether has never been reviewed and aborts the import.

use crate::domain::{ColorAssignment, RouteColor};

const REGULAR: ColorAssignment = ColorAssignment::Known(RouteColor::Regular);
const PEAK: ColorAssignment = ColorAssignment::Known(RouteColor::Peak);
const RB100: ColorAssignment = ColorAssignment::Known(RouteColor::Rapibus100);
const RB200: ColorAssignment = ColorAssignment::Known(RouteColor::Rapibus200);
const UNKNOWN: ColorAssignment = ColorAssignment::Unknown;

/// Reviewed color decisions, sorted by route number.
pub static ROUTE_COLORS: &[(u32, ColorAssignment)] = &[
    (11, PEAK),
    (15, PEAK),
    (17, PEAK),
    (18, REGULAR),
    (20, PEAK),
    (21, REGULAR),
    (22, PEAK),
    (23, PEAK),
    (24, PEAK),
    (25, PEAK),
    (26, PEAK),
    (27, PEAK),
    (28, PEAK),
    (29, PEAK),
    (31, REGULAR), // occasional
    (32, PEAK),
    (33, REGULAR), // occasional
    (34, REGULAR),
    (35, REGULAR), // occasional
    (36, REGULAR), // occasional
    (37, REGULAR), // occasional
    (38, REGULAR), // occasional
    (39, REGULAR),
    (40, PEAK),
    (41, PEAK),
    (44, PEAK),
    (45, PEAK),
    (46, PEAK),
    (47, PEAK),
    (48, PEAK),
    (49, REGULAR),
    (50, PEAK),
    (51, REGULAR),
    (52, REGULAR),
    (53, REGULAR),
    (54, PEAK),
    (55, REGULAR),
    (56, REGULAR),
    (57, REGULAR),
    (58, PEAK),
    (59, REGULAR), // occasional
    (60, PEAK),
    (61, PEAK),
    (62, REGULAR),
    (63, REGULAR),
    (64, REGULAR),
    (65, REGULAR),
    (66, REGULAR),
    (67, PEAK),
    (68, REGULAR), // rapibus
    (69, REGULAR),
    (71, REGULAR),
    (72, UNKNOWN),
    (73, REGULAR),
    (74, PEAK),
    (75, REGULAR),
    (76, REGULAR),
    (77, REGULAR),
    (78, REGULAR),
    (79, REGULAR),
    (85, PEAK),
    (87, PEAK),
    (88, PEAK),
    (93, PEAK), // rapibus
    (94, PEAK),
    (95, PEAK), // rapibus
    (97, REGULAR),
    (98, PEAK),
    (100, RB100),
    (134, REGULAR),
    (200, RB200),
    (300, REGULAR), // rapibus
    (400, REGULAR), // rapibus
    (425, UNKNOWN),
    (432, UNKNOWN),
    (472, UNKNOWN),
    (500, REGULAR), // rapibus
    (534, UNKNOWN),
    (549, UNKNOWN),
    (550, UNKNOWN),
    (566, UNKNOWN),
    (571, UNKNOWN),
    (576, UNKNOWN),
    (597, UNKNOWN),
    (726, UNKNOWN),
    (734, UNKNOWN),
    (747, UNKNOWN),
    (750, UNKNOWN),
    (800, REGULAR), // rapibus
    (804, UNKNOWN),
    (805, UNKNOWN),
    (807, UNKNOWN),
    (810, REGULAR), // rapibus
    (811, UNKNOWN),
    (813, UNKNOWN),
    (824, UNKNOWN),
    (825, UNKNOWN),
    (827, UNKNOWN),
    (831, UNKNOWN),
    (833, UNKNOWN),
    (834, UNKNOWN),
    (837, UNKNOWN),
    (859, UNKNOWN),
    (867, UNKNOWN),
    (870, PEAK), // rapibus, to be confirmed
    (873, UNKNOWN),
    (874, UNKNOWN),
    (876, UNKNOWN),
    (878, UNKNOWN),
    (901, UNKNOWN),
    (902, UNKNOWN),
    (904, UNKNOWN),
    (929, UNKNOWN),
    (931, UNKNOWN),
    (932, UNKNOWN),
    (933, UNKNOWN),
    (934, UNKNOWN),
    (935, UNKNOWN),
    (937, UNKNOWN),
    (949, UNKNOWN),
    (950, UNKNOWN),
    (990, UNKNOWN),
];

/// Look up the reviewed color decision for a route number.
///
/// Returns `None` if the number has never been reviewed.
pub fn assigned_color(route_number: u32) -> Option<ColorAssignment> {
    ROUTE_COLORS
        .binary_search_by_key(&route_number, |(number, _)| *number)
        .ok()
        .map(|idx| ROUTE_COLORS[idx].1)
}
