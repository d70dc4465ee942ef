// src/runner.rs
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    config::options::RunOptions,
    core::{HttpSource, Source},
    epiweek::season_for,
    error::{Error, Result},
    file::season_paths,
    progress::Progress,
    specs,
    store::{self, MergeOutcome},
};

/// What happened to one persisted table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableReport {
    pub path: PathBuf,
    /// Rows built from this snapshot.
    pub rows: usize,
    pub outcome: MergeOutcome,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub issue: String,
    pub season: String,
    pub detections: TableReport,
    pub positive: TableReport,
}

/// Top-level runner against the live dashboard.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(options: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let source = HttpSource::new(&options.base_url)?;
    run_with_source(&source, options, progress)
}

/// Fetch, build and persist both tables from `source`.
///
/// Both tables are built before anything is written, so a fetch or
/// validation failure leaves the history untouched.
pub fn run_with_source(
    source: &dyn Source,
    options: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
    }
    let result = run_inner(source, options, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_inner(
    source: &dyn Source,
    options: &RunOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let issue = specs::update_date::fetch(source)?;
    let season = match &options.season {
        Some(season) => season.clone(),
        None => season_for(issue_date(&issue)?)?,
    };
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Issue {issue}, {season}"));
    }

    let detections = specs::detections::fetch(source, &issue)?;
    let positive = specs::positive::fetch(source, &issue)?;

    let paths = season_paths(&options.data_dir, &season);

    let outcome = store::merge_into(&paths.detections, &detections.to_dataset())?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done("respiratory_detections");
    }
    let detections = TableReport { path: paths.detections, rows: detections.len(), outcome };

    let outcome = store::merge_into(&paths.positive, &positive.to_dataset())?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done("positive_tests");
    }
    let positive = TableReport { path: paths.positive, rows: positive.len(), outcome };

    Ok(RunSummary { issue, season, detections, positive })
}

fn issue_date(issue: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(issue, "%Y-%m-%d").map_err(|_| Error::Format(s!(issue)))
}
