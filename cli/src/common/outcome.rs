//! # Food Truck CLI Outcome Aggregation (`common::outcome`)
//!
//! File: cli/src/common/outcome.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! Every Food Truck CLI operation produces a typed outcome value with a
//! success flag (a dependency probe, a project setup step, an API service
//! operation). This module defines the small, shared machinery for
//! combining several named outcomes into one user-facing report.
//!
//! ## Architecture
//!
//! - [`Outcome`]: the minimal interface an outcome type must expose —
//!   a success flag and a display summary.
//! - [`Report`]: an insertion-ordered collection of `(name, outcome)`
//!   pairs with a derived `all_ok` flag. Order is significant:
//!   dependencies and projects are reported in declaration order, never
//!   sorted. The report is immutable after construction.
//!
//! Two aggregation modes exist by convention rather than by mechanism:
//! the dependency checker runs every probe and builds a full `Report`
//! (the user sees the whole status table even when early probes fail),
//! while causally dependent chains (clone → install, stop → start) simply
//! stop at the first failing step in caller control flow and surface that
//! step's detail.
//!
use tracing::debug;

/// Minimal interface over any per-step outcome value.
pub trait Outcome {
    /// Whether the step succeeded.
    fn ok(&self) -> bool;
    /// One-line human-readable summary of the step's result.
    fn summary(&self) -> &str;
}

/// An ordered, immutable aggregation of named outcomes.
///
/// `all_ok` is the logical AND over all contained outcomes, computed once
/// at construction and never recomputed or mutated.
#[derive(Debug)]
pub struct Report<T: Outcome> {
    entries: Vec<(String, T)>,
    all_ok: bool,
}

impl<T: Outcome> Report<T> {
    /// Builds a report from `(name, outcome)` pairs, preserving input order.
    pub fn from_entries(entries: Vec<(String, T)>) -> Self {
        let all_ok = entries.iter().all(|(_, outcome)| outcome.ok());
        debug!(
            "Aggregated {} outcome(s), all_ok = {}",
            entries.len(),
            all_ok
        );
        Self { entries, all_ok }
    }

    /// Whether every contained outcome succeeded.
    pub fn all_ok(&self) -> bool {
        self.all_ok
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[(String, T)] {
        &self.entries
    }

    /// Only the failing entries, in insertion order.
    pub fn failures(&self) -> impl Iterator<Item = &(String, T)> {
        self.entries.iter().filter(|(_, outcome)| !outcome.ok())
    }

    /// Names of the failing entries, joined for error messages.
    pub fn failure_names(&self) -> String {
        self.failures()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
