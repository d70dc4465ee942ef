// src/canon/geo.rs
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::synonyms::SynonymMatcher;
use super::tables::{GEOS, NATION, REGIONS};
use crate::core::sanitize::{fold_ascii, normalize_ws};

static GEO_MATCHER: LazyLock<SynonymMatcher> = LazyLock::new(|| SynonymMatcher::new(GEOS));

/// Level of a geography value.
///
/// Variants are declared in alphabetical order of their names so sorting by
/// `GeoType` sorts like the text written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeoType {
    Lab,
    Nation,
    Province,
    Region,
}

impl GeoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoType::Lab => "lab",
            GeoType::Nation => "nation",
            GeoType::Province => "province",
            GeoType::Region => "region",
        }
    }
}

impl fmt::Display for GeoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lab" => Ok(GeoType::Lab),
            "nation" => Ok(GeoType::Nation),
            "province" => Ok(GeoType::Province),
            "region" => Ok(GeoType::Region),
            other => Err(format!("unknown geo_type {other:?}")),
        }
    }
}

const MAX_PASSES: usize = 8;

/// One round of label cleanup. Removing a token can expose another
/// ("province province of of x"), so callers repeat it until stable.
fn clean_geo(raw: &str) -> String {
    let mut name = raw.to_lowercase().replace("province of ", "");
    name.retain(|c| c != '.' && c != '*');
    let mut name = name.replace("/territoires", "");
    if name == "cana" {
        name = s!("can");
    }

    // Apostrophes vanish ("st. john's" → "st johns"); other punctuation splits words.
    let name: String = name
        .chars()
        .filter(|&c| c != '\'' && c != '’')
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();
    normalize_ws(&name.replace("kidshospital", "kids hospital"))
}

/// Clean a geography label and abbreviate it when the whole cleaned label is
/// a known name. Matching is accent-insensitive, but unknown labels come back
/// cleaned with their accents intact (lowercase, single spaces, no ASCII
/// punctuation).
pub fn abbreviate_geo(raw: &str) -> String {
    let mut name = clean_geo(raw);
    for _ in 1..MAX_PASSES {
        let next = clean_geo(&name);
        if next == name {
            break;
        }
        name = next;
    }

    match GEO_MATCHER.lookup(&normalize_ws(&fold_ascii(&name))) {
        Some(code) => s!(code),
        None => name,
    }
}

/// `nation` for the country under any spelling, `region` for province groups
/// (and provinces reported as their own region), otherwise `default`.
pub fn classify_geo(geo_value: &str, default: GeoType) -> GeoType {
    let lower = geo_value.to_lowercase();
    if NATION.contains(&lower.as_str()) {
        GeoType::Nation
    } else if REGIONS.contains(&geo_value) {
        GeoType::Region
    } else {
        default
    }
}
