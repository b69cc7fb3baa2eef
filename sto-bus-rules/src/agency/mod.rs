//! Agency rules.
//!
//! [`AgencyTools`] is the set of hooks an import host calls while reading a
//! feed. [`StoBusAgency`] implements them for the STO bus network.

pub mod colors;
pub mod merge;
pub mod patterns;
mod sto;
mod tools;

pub use sto::{AGENCY_COLOR, AGENCY_NAME, StoBusAgency};
pub use tools::{AgencyFeatures, AgencyTools, ROUTE_TYPE_BUS};
