//! Stop records and numeric stop identifiers.

use std::fmt;

use serde::Deserialize;

/// Offset added to ids written as digits followed by an `a` suffix.
///
/// `45a` becomes `100045`, keeping suffixed ids numeric and clear of the
/// plain ids the feed publishes.
pub const SUFFIXED_STOP_ID_OFFSET: u32 = 100_000;

/// A stop as read from the source feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stop {
    /// Source identifier, usually all digits.
    pub id: String,

    /// Rider-facing code, if the feed provides one.
    #[serde(default)]
    pub code: Option<String>,

    /// Raw stop name.
    #[serde(default)]
    pub name: String,
}

impl Stop {
    /// Create a stop with no explicit code.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: None,
            name: name.into(),
        }
    }

    /// Set the rider-facing code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Error returned when a source stop id has an unexpected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ID: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A numeric stop identifier, stable across imports.
///
/// Realtime feeds refer to stops by this number, so the mapping from source
/// id must never change between runs.
///
/// # Examples
///
/// ```
/// use sto_bus_rules::domain::StopId;
///
/// assert_eq!(StopId::parse("12345").unwrap().get(), 12345);
/// assert_eq!(StopId::parse("45a").unwrap().get(), 100045);
/// assert_eq!(StopId::parse("45A").unwrap().get(), 100045);
///
/// // Unknown shapes are rejected rather than guessed
/// assert!(StopId::parse("abc").is_err());
/// assert!(StopId::parse("45b").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(u32);

impl StopId {
    /// Parse an id made of ASCII digits only.
    pub fn parse_digits(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStopId {
                reason: "must be all digits",
            });
        }
        s.parse().map(StopId).map_err(|_| InvalidStopId {
            reason: "does not fit in 32 bits",
        })
    }

    /// Parse a source stop id using [`SUFFIXED_STOP_ID_OFFSET`].
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        Self::parse_with_offset(s, SUFFIXED_STOP_ID_OFFSET)
    }

    /// Parse a source stop id.
    ///
    /// All-digit ids are used as is. Otherwise the first run of digits is
    /// taken and, if the id ends with `a` or `A`, `suffix_offset` is added.
    /// Any other shape is an error.
    pub fn parse_with_offset(s: &str, suffix_offset: u32) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().map(StopId).map_err(|_| InvalidStopId {
                reason: "does not fit in 32 bits",
            });
        }

        let digits: String = s
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return Err(InvalidStopId {
                reason: "must contain digits",
            });
        }

        if !s.ends_with(|c: char| c == 'a' || c == 'A') {
            return Err(InvalidStopId {
                reason: "only an 'a' suffix is expected after the digits",
            });
        }

        digits
            .parse::<u32>()
            .ok()
            .and_then(|n| n.checked_add(suffix_offset))
            .map(StopId)
            .ok_or(InvalidStopId {
                reason: "does not fit in 32 bits",
            })
    }

    /// Returns the numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
