// src/specs/mod.rs
//! # Dashboard table specs
//!
//! One module per dashboard export. Each spec knows the **shape of one CSV
//! resource** and how to turn it into a long table keyed by
//! `(epiweek, time_value, issue, geo_type, geo_value)`.
//!
//! ## What lives here
//! - Parsing of the raw CSV text (via `crate::csv`).
//! - Per-row canonicalization (`crate::canon`) and epiweek computation.
//! - Reshaping into a `table::LongTable` plus post-build validation.
//!
//! ## What does **not** live here
//! - Persistence and novelty checks (`store`).
//! - Deciding which season directory to write to (`runner`).
//!
//! ## Call chain
//! ```text
//! runner → specs::<table>::fetch(source, issue) → LongTable
//!        → store::merge_into(path, table.to_dataset())
//! ```
//!
//! ## Current specs
//! - `update_date` – the dashboard's publication stamp, used as `issue`.
//! - `detections` – `RVD_CurrentWeekTable.csv`, per-lab counts by virus.
//! - `positive`   – `RVD_WeeklyData.csv`, weekly tests and positivity.
//!
//! Every builder is a pure function of the fetched text and the issue date,
//! so it can be exercised offline against captured fixtures.
pub mod detections;
pub mod positive;
pub mod update_date;
