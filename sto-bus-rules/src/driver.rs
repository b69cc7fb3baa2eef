//! Newline-delimited JSON record driver.
//!
//! Reads one record per line, runs the matching agency hook and writes the
//! normalized record as one JSON line. Blank lines are skipped. The first
//! rule error stops the run: a record the rules do not cover needs a
//! maintainer, not a best guess.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::agency::AgencyTools;
use crate::domain::{Route, RouteColor, Stop};
use crate::error::RulesError;

/// A record as handed over by the import host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputRecord {
    Route(Route),
    RouteMerge { route: Route, other: Route },
    Trip { trip_id: String, headsign: String },
    Stop(Stop),
}

/// A normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputRecord {
    Route {
        route_id: u32,
        short_name: String,
        long_name: String,
        route_type: u16,
        color: Option<RouteColor>,
    },
    RouteMerge {
        route_id: u32,
        long_name: String,
    },
    Trip {
        trip_id: String,
        headsign: String,
    },
    Stop {
        stop_id: u32,
        stop_code: String,
        name: String,
    },
}

/// Errors that stop a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid record: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Rules { line: usize, source: RulesError },
}

/// Record counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverSummary {
    pub routes: usize,
    pub merges: usize,
    pub trips: usize,
    pub stops: usize,
}

impl DriverSummary {
    pub fn total(&self) -> usize {
        self.routes + self.merges + self.trips + self.stops
    }

    fn count(&mut self, record: &OutputRecord) {
        match record {
            OutputRecord::Route { .. } => self.routes += 1,
            OutputRecord::RouteMerge { .. } => self.merges += 1,
            OutputRecord::Trip { .. } => self.trips += 1,
            OutputRecord::Stop { .. } => self.stops += 1,
        }
    }
}

/// Run the agency hooks on a single record.
pub fn normalize<T>(tools: &T, record: InputRecord) -> Result<OutputRecord, RulesError>
where
    T: AgencyTools + ?Sized,
{
    match record {
        InputRecord::Route(route) => Ok(OutputRecord::Route {
            route_id: tools.route_id(&route)?,
            long_name: tools.clean_route_long_name(route.long_name_or_default()),
            route_type: tools.agency_route_type(),
            color: tools.provide_missing_route_color(&route)?,
            short_name: route.short_name,
        }),
        InputRecord::RouteMerge { route, other } => Ok(OutputRecord::RouteMerge {
            route_id: tools.route_id(&route)?,
            long_name: tools.merge_route_long_name(&route, &other)?,
        }),
        InputRecord::Trip { trip_id, headsign } => Ok(OutputRecord::Trip {
            headsign: tools.clean_trip_headsign(&headsign),
            trip_id,
        }),
        InputRecord::Stop(stop) => Ok(OutputRecord::Stop {
            stop_id: tools.stop_id(&stop)?,
            stop_code: tools.stop_code(&stop),
            name: tools.clean_stop_name(&stop.name),
        }),
    }
}

/// Normalize every record of `input` into `output`.
pub fn process<T, R, W>(tools: &T, input: R, mut output: W) -> Result<DriverSummary, DriverError>
where
    T: AgencyTools + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut summary = DriverSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: InputRecord = serde_json::from_str(&line).map_err(|source| DriverError::Json {
            line: line_no,
            source,
        })?;
        let normalized = normalize(tools, record).map_err(|source| DriverError::Rules {
            line: line_no,
            source,
        })?;
        debug!(line = line_no, record = ?normalized, "normalized record");

        let json = serde_json::to_string(&normalized).map_err(|source| DriverError::Json {
            line: line_no,
            source,
        })?;
        writeln!(output, "{json}")?;
        summary.count(&normalized);
    }

    output.flush()?;
    info!(
        agency = tools.agency_name(),
        routes = summary.routes,
        merges = summary.merges,
        trips = summary.trips,
        stops = summary.stops,
        "normalized records"
    );
    Ok(summary)
}

/// [`process`] reading from a file.
pub fn process_path<T, W>(tools: &T, path: &Path, output: W) -> Result<DriverSummary, DriverError>
where
    T: AgencyTools + ?Sized,
    W: Write,
{
    let file = File::open(path)?;
    process(tools, BufReader::new(file), output)
}
