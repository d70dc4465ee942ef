// src/specs/detections.rs
//! Current-week detections by laboratory (`RVD_CurrentWeekTable.csv`).
//!
//! The export is already wide: one row per reporting laboratory, one column
//! per virus/subtype count. Headers arrive as `<signal>_<virus…>` and are
//! reordered to `<virus…>_<signal>` before the column canonicalizer runs.
//!
//! Output keeps the input row order. The `week` column and the `year`
//! extracted from the date stay on as data columns.

use std::sync::LazyLock;

use regex::Regex;

use crate::canon::{GeoType, abbreviate_geo, canonicalize_column, classify_geo};
use crate::config::consts::{CURRENT_WEEK_RESOURCE, INDEX_COLUMNS};
use crate::core::Source;
use crate::csv::parse_table;
use crate::epiweek::epiweek_of;
use crate::error::{Error, Result};
use crate::table::{CompositeKey, LongTable, Observation, Value};

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"20\d{2}").expect("year pattern"));
// Added by the CSV reader to repeated headers; must go before the swap moves it.
static DUP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\d+$").expect("suffix pattern"));

const DATE: &str = "date";
const WEEK: &str = "week";
const LAB: &str = "reportinglaboratory";
const YEAR_COLUMN: &str = "year";

pub fn fetch(source: &dyn Source, issue: &str) -> Result<LongTable> {
    let text = source.fetch_text(CURRENT_WEEK_RESOURCE)?;
    let table = build(&text, issue)?;
    logf!("Detections: {} rows, {} columns", table.len(), table.columns.len());
    Ok(table)
}

pub fn build(text: &str, issue: &str) -> Result<LongTable> {
    let raw = parse_table(text)?;
    let names: Vec<String> = raw.headers.iter().map(|h| canonical_header(h)).collect();

    let find = |name: &str| {
        names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::MissingColumn(s!(name)))
    };
    let date_col = find(DATE)?;
    let week_col = find(WEEK)?;
    let lab_col = find(LAB)?;

    // Data columns in first-seen order; several raw columns may share a name.
    let mut columns: Vec<String> = Vec::new();
    let mut sources: Vec<(usize, usize)> = Vec::new();
    for (i, name) in names.iter().enumerate() {
        if i == date_col || i == lab_col || name == YEAR_COLUMN || INDEX_COLUMNS.contains(&name.as_str()) {
            continue;
        }
        let slot = match columns.iter().position(|c| c == name) {
            Some(slot) => {
                logd!("Raw header {:?} folds into {name:?}", raw.headers[i]);
                slot
            }
            None => {
                columns.push(name.clone());
                columns.len() - 1
            }
        };
        sources.push((i, slot));
    }
    columns.push(s!(YEAR_COLUMN));

    let mut rows = Vec::with_capacity(raw.len());
    for r in 0..raw.len() {
        let date = raw.cell(r, date_col).trim();
        let year = extract_year(date)?;
        let week = parse_week(raw.cell(r, week_col))?;
        let geo_value = abbreviate_geo(raw.cell(r, lab_col));

        let mut obs = Observation::new(CompositeKey {
            epiweek: epiweek_of(year, week)?,
            time_value: s!(date),
            issue: s!(issue),
            geo_type: classify_geo(&geo_value, GeoType::Lab),
            geo_value,
        });

        for &(i, slot) in &sources {
            let value = Value::parse(raw.cell(r, i));
            if !value.is_missing() {
                obs.values.entry(columns[slot].clone()).or_insert(value);
            }
        }
        obs.values.insert(s!(YEAR_COLUMN), Value::Number(f64::from(year)));
        rows.push(obs);
    }

    Ok(LongTable { columns, rows })
}

/// `<signal>_<virus…>` → `<virus…>_<signal>`, canonicalized, spaces → `_`.
pub fn canonical_header(raw: &str) -> String {
    let raw = DUP_SUFFIX.replace(raw, "");
    canonicalize_column(&swap_compound(&raw)).replace(' ', "_")
}

/// Move the first `_`-separated token to the end: `tests_flu_a` →
/// `flu_a_tests`. Names without `_` are unchanged.
pub fn swap_compound(name: &str) -> String {
    match name.split_once('_') {
        Some((head, rest)) => join!(rest, "_", head),
        None => s!(name),
    }
}

fn extract_year(date: &str) -> Result<i32> {
    YEAR.find(date)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| Error::Format(s!(date)))
}

/// Weeks sometimes come through as `10.0`.
fn parse_week(cell: &str) -> Result<u32> {
    let t = cell.trim();
    let invalid = || Error::InvalidNumber { column: s!(WEEK), value: s!(t) };

    if let Ok(w) = t.parse::<u32>() {
        return Ok(w);
    }
    let f: f64 = t.parse().map_err(|_| invalid())?;
    if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) {
        Ok(f as u32)
    } else {
        Err(invalid())
    }
}
