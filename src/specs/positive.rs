// src/specs/positive.rs
//! Weekly positivity table (`RVD_WeeklyData.csv`).
//!
//! Input is long by virus: one row per `(year, week, province, virus)` with
//! `tests`, `percentpositive` and `detections`. Output is one row per
//! composite key with `<virus>_tests`, `<virus>_pct_positive` and
//! `<virus>_positive_tests` columns.
//!
//! Columns are signal-major, viruses sorted inside each signal; rows come out
//! in key order. A `(key, virus)` pair seen twice is an error, and every
//! `*_pct_positive` cell must be within `[0, 100]` or missing.

use serde::Deserialize;

use crate::canon::{GeoType, abbreviate_geo, abbreviate_virus, classify_geo, normalize_date};
use crate::config::consts::WEEKLY_DATA_RESOURCE;
use crate::core::Source;
use crate::csv::deserialize_records;
use crate::epiweek::epiweek_of;
use crate::error::{Error, Result};
use crate::table::{CompositeKey, LongTable, PivotEntry, Value, pivot_wider};

/// Output signals, in column order. Sourced from `tests`, `percentpositive`
/// and `detections` respectively.
pub const SIGNALS: [&str; 3] = ["tests", "pct_positive", "positive_tests"];

/// One row of the weekly export. `weekorder` and `region` are not read.
#[derive(Debug, Deserialize)]
struct WeeklyRecord {
    year: i32,
    week: u32,
    province: String,
    virus: String,
    date: String,
    tests: Option<f64>,
    percentpositive: Option<f64>,
    detections: Option<f64>,
}

pub fn fetch(source: &dyn Source, issue: &str) -> Result<LongTable> {
    let text = source.fetch_text(WEEKLY_DATA_RESOURCE)?;
    let table = build(&text, issue)?;
    logf!("Positivity: {} rows, {} columns", table.len(), table.columns.len());
    Ok(table)
}

pub fn build(text: &str, issue: &str) -> Result<LongTable> {
    let records: Vec<WeeklyRecord> = deserialize_records(text)?;

    let mut entries = Vec::with_capacity(records.len());
    for rec in records {
        let geo_value = abbreviate_geo(&rec.province);
        let key = CompositeKey {
            epiweek: epiweek_of(rec.year, rec.week)?,
            time_value: normalize_date(&rec.date)?,
            issue: s!(issue),
            geo_type: classify_geo(&geo_value, GeoType::Province),
            geo_value,
        };
        entries.push(PivotEntry {
            key,
            category: virus_stem(&abbreviate_virus(&rec.virus)),
            values: vec![rec.tests.into(), rec.percentpositive.into(), rec.detections.into()],
        });
    }

    let table = pivot_wider(entries, &SIGNALS, |virus, signal| format!("{virus}_{signal}"))?;
    check_percentages(&table)?;
    Ok(table)
}

/// Virus label as used in column names: `/` dropped, `flu a`/`flu b` fused,
/// remaining spaces turned into `_`.
pub fn virus_stem(virus: &str) -> String {
    virus
        .replace('/', "")
        .replace("flu a", "flua")
        .replace("flu b", "flub")
        .replace(' ', "_")
}

/// Every value of every `pct_positive` column is a number in `[0, 100]` or
/// missing.
pub fn check_percentages(table: &LongTable) -> Result<()> {
    for column in table.columns.iter().filter(|c| c.contains("pct_positive")) {
        for obs in &table.rows {
            match obs.get(column) {
                Value::Missing => {}
                Value::Number(n) if (0.0..=100.0).contains(n) => {}
                Value::Number(n) => {
                    return Err(Error::Integrity { column: column.clone(), value: *n });
                }
                Value::Text(t) => {
                    return Err(Error::InvalidNumber { column: column.clone(), value: t.clone() });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "year,week,weekorder,region,province,date,virus,tests,percentpositive,detections\n";

    fn csv(rows: &[&str]) -> String {
        let mut text = s!(HEADER);
        for r in rows {
            text.push_str(r);
            text.push('\n');
        }
        text
    }

    #[test]
    fn stems() {
        assert_eq!(virus_stem("flu a"), "flua");
        assert_eq!(virus_stem("flu b"), "flub");
        assert_eq!(virus_stem("flu a/h3"), "fluah3");
        assert_eq!(virus_stem("sarscov2"), "sarscov2");
        assert_eq!(virus_stem("entero rhino"), "entero_rhino");
    }

    #[test]
    fn pivots_viruses_into_columns() {
        let text = csv(&[
            "2024,10,23,Ontario,Ontario,2024-03-04,Influenza,500,12.5,63",
            "2024,10,23,Ontario,Ontario,2024-03-04,RSV,400,5,20",
            "2024,10,23,Prairies,Saskatchewan,04/03/2024,RSV,80,,",
        ]);
        let t = build(&text, "2024-03-10").unwrap();

        assert_eq!(
            t.columns,
            vec![
                "flu_tests", "rsv_tests",
                "flu_pct_positive", "rsv_pct_positive",
                "flu_positive_tests", "rsv_positive_tests",
            ]
        );
        assert_eq!(t.len(), 2);

        // Province sorts before region.
        let sk = &t.rows[0];
        assert_eq!(sk.key.geo_value, "sk");
        assert_eq!(sk.key.geo_type, GeoType::Province);
        assert_eq!(sk.key.time_value, "2024-03-04");
        assert_eq!(sk.get("flu_tests"), &Value::Missing);
        assert_eq!(sk.get("rsv_pct_positive"), &Value::Missing);

        let on = &t.rows[1];
        assert_eq!(on.key.geo_value, "on");
        assert_eq!(on.key.geo_type, GeoType::Region);
        assert_eq!(on.get("flu_tests"), &Value::Number(500.0));
        assert_eq!(on.get("rsv_positive_tests"), &Value::Number(20.0));
    }

    #[test]
    fn percent_over_hundred_is_rejected() {
        let text = csv(&["2024,10,23,Ontario,Ontario,2024-03-04,Influenza,500,150,63"]);
        match build(&text, "2024-03-10") {
            Err(Error::Integrity { column, value }) => {
                assert_eq!(column, "flu_pct_positive");
                assert_eq!(value, 150.0);
            }
            other => panic!("expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_virus_for_one_key_is_rejected() {
        let text = csv(&[
            "2024,10,23,Ontario,Ontario,2024-03-04,Influenza,500,12.5,63",
            "2024,10,23,Ontario,Ontario,2024-03-04,influenza,501,12.5,63",
        ]);
        assert!(matches!(build(&text, "2024-03-10"), Err(Error::DuplicateEntry { .. })));
    }

    #[test]
    fn bad_dates_and_weeks_fail() {
        let bad_date = csv(&["2024,10,23,Ontario,Ontario,March 4,Influenza,500,12.5,63"]);
        assert!(matches!(build(&bad_date, "2024-03-10"), Err(Error::Format(_))));

        let bad_week = csv(&["2021,53,23,Ontario,Ontario,2024-03-04,Influenza,500,12.5,63"]);
        assert!(matches!(build(&bad_week, "2024-03-10"), Err(Error::InvalidWeek { .. })));
    }
}
