// src/specs/update_date.rs
//! Publication stamp of the current dashboard snapshot (`RVD_UpdateDate.csv`).

use crate::canon::parse_update_date;
use crate::config::consts::UPDATE_DATE_RESOURCE;
use crate::core::Source;
use crate::error::{Error, Result};

pub fn fetch(source: &dyn Source) -> Result<String> {
    let text = source.fetch_text(UPDATE_DATE_RESOURCE)?;
    let issue = parse(&text)?;
    logf!("Dashboard last updated {issue}");
    Ok(issue)
}

/// The resource is normally a bare timestamp. Tolerate a header line or
/// quoting by taking the first line that parses.
pub fn parse(text: &str) -> Result<String> {
    text.lines()
        .map(|l| l.trim().trim_matches('"'))
        .filter(|l| !l.is_empty())
        .find_map(|l| parse_update_date(l).ok())
        .ok_or_else(|| Error::Format(s!(text.trim())))
}
