// src/canon/mod.rs
//! # Canonicalization
//!
//! Pure, deterministic rewrites from the dashboard's free-text labels to a
//! fixed vocabulary:
//!
//! - `virus`   – virus names and synonyms → `flu`, `rsv`, `hpiv`, …
//! - `geo`     – provinces, regions, labs → `on`, `qc`, `atlantic`, … plus the
//!   `nation` / `region` / default level classifier
//! - `date`    – mixed date layouts → `YYYY-MM-DD`
//! - `columns` – header rewrite rules (subtypes, signals, punctuation)
//!
//! The synonym tables live in `tables` and are compiled once, lazily, into
//! process-wide matchers. Unknown labels are never an error; they come out
//! cleaned but otherwise unmapped.

pub mod columns;
pub mod date;
pub mod geo;
pub mod synonyms;
pub mod tables;
pub mod virus;

pub use columns::{canonicalize_column, canonicalize_columns};
pub use date::{normalize_date, parse_update_date};
pub use geo::{GeoType, abbreviate_geo, classify_geo};
pub use virus::abbreviate_virus;
