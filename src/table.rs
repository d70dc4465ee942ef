// src/table.rs
//
// Table shapes used through the pipeline.
//
// - DataSet:   raw header + string rows, exactly as read from CSV (input
//              exports and persisted history alike).
// - LongTable: built output; one Observation per CompositeKey with a
//              column-name → value mapping, so new viruses add columns
//              without code changes.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use crate::canon::GeoType;
use crate::config::consts::INDEX_COLUMNS;
use crate::epiweek::Epiweek;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of the first column named `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    /// Cell text, empty for short rows.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Identity of one observation: `(epiweek, time_value, issue, geo_type, geo_value)`.
///
/// Ordered field by field, which is the row order of built tables.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey {
    pub epiweek: Epiweek,
    pub time_value: String,
    pub issue: String,
    pub geo_type: GeoType,
    pub geo_value: String,
}

impl CompositeKey {
    /// The five index cells as written to disk.
    pub fn cells(&self) -> [String; 5] {
        [
            self.epiweek.to_string(),
            self.time_value.clone(),
            self.issue.clone(),
            s!(self.geo_type.as_str()),
            self.geo_value.clone(),
        ]
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.epiweek, self.time_value, self.issue, self.geo_type, self.geo_value
        )
    }
}

/// One data cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

static MISSING: Value = Value::Missing;

impl Value {
    /// Read a raw CSV cell: blank or NaN is missing, numbers are numbers,
    /// anything else is kept as text.
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return Value::Missing;
        }
        match t.parse::<f64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::Text(s!(t)),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        if n.is_nan() { Value::Missing } else { Value::Number(n) }
    }
}

impl From<Option<f64>> for Value {
    fn from(n: Option<f64>) -> Self {
        n.map(Value::from).unwrap_or_default()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub key: CompositeKey,
    pub values: HashMap<String, Value>,
}

impl Observation {
    pub fn new(key: CompositeKey) -> Self {
        Self { key, values: HashMap::new() }
    }

    /// Value of `column`, `Missing` when the row has none.
    pub fn get(&self, column: &str) -> &Value {
        self.values.get(column).unwrap_or(&MISSING)
    }
}

/// A built table: ordered data columns plus keyed rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LongTable {
    pub columns: Vec<String>,
    pub rows: Vec<Observation>,
}

impl LongTable {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &CompositeKey> {
        self.rows.iter().map(|r| &r.key)
    }

    /// Index columns first, then the data columns, one string row per observation.
    pub fn to_dataset(&self) -> DataSet {
        let headers: Vec<String> = INDEX_COLUMNS
            .iter()
            .map(|c| s!(*c))
            .chain(self.columns.iter().cloned())
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|obs| {
                let mut row: Vec<String> = obs.key.cells().into_iter().collect();
                row.extend(self.columns.iter().map(|c| obs.get(c).to_string()));
                row
            })
            .collect();

        DataSet { headers, rows }
    }
}

/// One input row of a wide-to-long reshape: the values of every signal for
/// one category (virus) under one key.
pub struct PivotEntry {
    pub key: CompositeKey,
    pub category: String,
    pub values: Vec<Value>,
}

/// Group entries by key and spread `category × signal` into columns named by
/// `column_name(category, signal)`.
///
/// Columns are signal-major with categories sorted; rows come out in key
/// order. Combinations never observed are `Missing`. Two entries for the same
/// key and category are an error.
pub fn pivot_wider<F>(entries: Vec<PivotEntry>, signals: &[&str], column_name: F) -> Result<LongTable>
where
    F: Fn(&str, &str) -> String,
{
    let mut categories: BTreeSet<String> = BTreeSet::new();
    let mut groups: BTreeMap<CompositeKey, HashMap<String, Vec<Value>>> = BTreeMap::new();

    for entry in entries {
        categories.insert(entry.category.clone());
        let group = groups.entry(entry.key.clone()).or_default();
        if group.contains_key(&entry.category) {
            return Err(Error::DuplicateEntry { key: entry.key.to_string(), column: entry.category });
        }
        group.insert(entry.category, entry.values);
    }

    let mut columns = Vec::with_capacity(signals.len() * categories.len());
    for signal in signals {
        for category in &categories {
            columns.push(column_name(category, signal));
        }
    }

    let rows = groups
        .into_iter()
        .map(|(key, by_category)| {
            let mut obs = Observation::new(key);
            for (si, signal) in signals.iter().enumerate() {
                for (category, values) in &by_category {
                    let value = values.get(si).cloned().unwrap_or_default();
                    obs.values.insert(column_name(category, signal), value);
                }
            }
            obs
        })
        .collect();

    Ok(LongTable { columns, rows })
}
