//! Feed import rules for the STO (Société de transport de l'Outaouais)
//! bus network in Gatineau.
//!
//! An import host calls the [`agency::AgencyTools`] hooks for every route,
//! trip and stop it reads: names are cleaned up for rider display, duplicate
//! route names are merged, missing route colors are filled in and source
//! stop ids are mapped to stable numbers. The [`driver`] module runs the
//! hooks over newline-delimited JSON records.

pub mod agency;
pub mod config;
pub mod domain;
pub mod driver;
pub mod error;
pub mod text;
