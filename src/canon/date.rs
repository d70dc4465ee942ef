// src/canon/date.rs
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::{Error, Result};

const ISO: &str = "%Y-%m-%d";

// Optional time part after the date is tolerated and dropped.
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[ T].*)?$").expect("iso date pattern"));
static DAY_FIRST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{4}$").expect("day-first pattern"));

/// Normalize a dashboard date to `YYYY-MM-DD`.
///
/// Accepted: `YYYY-MM-DD`, `DD/MM/YYYY`, `DD-MM-YYYY`. Anything else,
/// including impossible dates, is a `Format` error.
pub fn normalize_date(text: &str) -> Result<String> {
    let t = text.trim();
    let bad = || Error::Format(s!(text));

    if let Some(caps) = ISO_DATE.captures(t) {
        let date = NaiveDate::parse_from_str(&caps[1], ISO).map_err(|_| bad())?;
        return Ok(date.format(ISO).to_string());
    }
    if DAY_FIRST.is_match(t) {
        let dashed = t.replace('/', "-");
        let date = NaiveDate::parse_from_str(&dashed, "%d-%m-%Y").map_err(|_| bad())?;
        return Ok(date.format(ISO).to_string());
    }
    Err(bad())
}

/// Parse the dashboard's update stamp (`RVD_UpdateDate.csv`) to `YYYY-MM-DD`.
///
/// The stamp is either `YYYY-MM-DD HH:MM:SS` or month-first
/// `MM/DD/YYYY HH:MM:SS`; the time part may be missing.
pub fn parse_update_date(text: &str) -> Result<String> {
    let t = text.trim();

    for fmt in ["%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M", "%m/%d/%Y %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Ok(dt.date().format(ISO).to_string());
        }
    }
    for fmt in [ISO, "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Ok(d.format(ISO).to_string());
        }
    }
    Err(Error::Format(s!(text)))
}
