// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::consts::{DETECTIONS_FILE, POSITIVE_FILE};

/// The two persisted histories of a season.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonPaths {
    pub dir: PathBuf,
    pub detections: PathBuf,
    pub positive: PathBuf,
}

/// `<data_dir>/<season>/{respiratory_detections,positive_tests}.csv`
pub fn season_paths(data_dir: &Path, season: &str) -> SeasonPaths {
    let dir = data_dir.join(season);
    SeasonPaths {
        detections: dir.join(DETECTIONS_FILE),
        positive: dir.join(POSITIVE_FILE),
        dir,
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Make sure the directory a file will be written into exists.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}
