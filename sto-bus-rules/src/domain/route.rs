//! Route records and the route color palette.

use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize, Serializer};

/// A route as read from the source feed.
///
/// Routes are identified by their public number (the short name), which is
/// also what realtime feeds use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Route {
    /// Public route number, e.g. `"33"`.
    pub short_name: String,

    /// Descriptive label, typically `Origin / Destination`.
    #[serde(default)]
    pub long_name: Option<String>,
}

impl Route {
    /// Create a route with a long name.
    pub fn new(short_name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: Some(long_name.into()),
        }
    }

    /// The long name, or an empty string if the feed has none.
    pub fn long_name_or_default(&self) -> &str {
        self.long_name.as_deref().unwrap_or_default()
    }

    /// The route number parsed from the short name.
    pub fn number(&self) -> Result<u32, ParseIntError> {
        self.short_name.trim().parse()
    }
}

/// Colors the agency uses for its routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteColor {
    /// Regular service, black.
    Regular,
    /// Peak-hour service, violet.
    Peak,
    /// Rapibus 100 line, blue.
    Rapibus100,
    /// Rapibus 200 line, red.
    Rapibus200,
    /// School service, yellow.
    SchoolBus,
}

impl RouteColor {
    /// Six uppercase hex digits, without a leading `#`.
    pub fn hex(self) -> &'static str {
        match self {
            RouteColor::Regular => "231F20",
            RouteColor::Peak => "9B0078",
            RouteColor::Rapibus100 => "0067AC",
            RouteColor::Rapibus200 => "DA002E",
            RouteColor::SchoolBus => "FFD800",
        }
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for RouteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// A reviewed color decision for one route number.
///
/// `Unknown` is a deliberate answer ("no color yet"), distinct from a route
/// number that was never reviewed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAssignment {
    /// The route uses this color.
    Known(RouteColor),
    /// Reviewed, but the color is not known yet.
    Unknown,
}

impl ColorAssignment {
    /// The assigned color, if any.
    pub fn color(self) -> Option<RouteColor> {
        match self {
            ColorAssignment::Known(color) => Some(color),
            ColorAssignment::Unknown => None,
        }
    }
}
