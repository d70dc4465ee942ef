// src/store.rs
//
// Persisted history: one CSV per table per season, append-only.
//
// A fresh batch is appended only when it brings at least one key the file
// has never seen. The check is "any new key absent", not "all absent": a
// batch mixing old and new keys is appended whole, so the overlapping keys
// end up twice. Re-fetching an unchanged snapshot is a no-op and leaves the
// file untouched.

use std::collections::HashSet;
use std::path::Path;

use crate::config::consts::INDEX_COLUMNS;
use crate::csv::{read_table, write_table_to_path};
use crate::error::Result;
use crate::file::ensure_parent;
use crate::table::DataSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No history yet; the batch became the initial file.
    Created { rows: usize },
    /// At least one novel key; the whole batch was appended.
    Appended { rows: usize },
    /// Every key was already persisted; file untouched.
    Unchanged,
}

/// Load a persisted table, `None` when the file does not exist yet.
pub fn load(path: &Path) -> Result<Option<DataSet>> {
    if !path.exists() {
        return Ok(None);
    }
    read_table(path).map(Some)
}

/// Merge `new` into the history at `path`, writing only when needed.
pub fn merge_into(path: &Path, new: &DataSet) -> Result<MergeOutcome> {
    let Some(old) = load(path)? else {
        ensure_parent(path)?;
        write_table_to_path(path, new)?;
        logf!("Created {} with {} rows", path.display(), new.len());
        return Ok(MergeOutcome::Created { rows: new.len() });
    };

    if !has_novel_key(&old, new)? {
        logf!("{}: all {} keys already present, nothing to append", path.display(), new.len());
        return Ok(MergeOutcome::Unchanged);
    }

    let merged = concat(&old, new);
    write_table_to_path(path, &merged)?;
    logf!("Appended {} rows to {} ({} total)", new.len(), path.display(), merged.len());
    Ok(MergeOutcome::Appended { rows: new.len() })
}

/// True when some row of `new` has a composite key absent from `old`.
pub fn has_novel_key(old: &DataSet, new: &DataSet) -> Result<bool> {
    let old_idx = index_positions(old)?;
    let new_idx = index_positions(new)?;

    let known: HashSet<[&str; 5]> = (0..old.len()).map(|r| key_at(old, r, &old_idx)).collect();
    Ok((0..new.len()).any(|r| !known.contains(&key_at(new, r, &new_idx))))
}

/// Rows of `old` then rows of `new`, aligned on the union of their columns:
/// old columns keep their order, new-only columns follow. Cells a side does
/// not have are left empty.
pub fn concat(old: &DataSet, new: &DataSet) -> DataSet {
    let mut headers = old.headers.clone();
    for h in &new.headers {
        if !headers.contains(h) {
            headers.push(h.clone());
        }
    }

    let mut rows = Vec::with_capacity(old.len() + new.len());
    for ds in [old, new] {
        let positions: Vec<Option<usize>> = headers.iter().map(|h| ds.column(h)).collect();
        for r in 0..ds.len() {
            let row = positions
                .iter()
                .map(|pos| pos.map(|c| s!(ds.cell(r, c))).unwrap_or_default())
                .collect();
            rows.push(row);
        }
    }

    DataSet { headers, rows }
}

fn index_positions(ds: &DataSet) -> Result<[usize; 5]> {
    let mut out = [0usize; 5];
    for (slot, name) in out.iter_mut().zip(INDEX_COLUMNS) {
        *slot = ds.require_column(name)?;
    }
    Ok(out)
}

fn key_at<'a>(ds: &'a DataSet, row: usize, idx: &[usize; 5]) -> [&'a str; 5] {
    idx.map(|c| ds.cell(row, c).trim())
}
