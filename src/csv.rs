// src/csv.rs
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::table::DataSet;

/* ---------------- Parsing ---------------- */

/// Parse CSV text with a header row into a `DataSet`.
///
/// Ragged rows are padded with empty cells (extra cells are dropped).
/// Repeated header names get `.1`, `.2`, … suffixes so every column stays
/// addressable; the column canonicalizer strips them again.
pub fn parse_table(text: &str) -> Result<DataSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let headers = disambiguate_headers(rdr.headers()?.iter());
    let width = headers.len();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().take(width).map(String::from).collect();
        row.resize(width, s!());
        rows.push(row);
    }

    Ok(DataSet { headers, rows })
}

/// Deserialize every record into `T` by header name. Columns `T` does not
/// name are ignored.
pub fn deserialize_records<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let mut out = Vec::new();
    for record in rdr.deserialize() {
        out.push(record?);
    }
    Ok(out)
}

pub fn read_table(path: &Path) -> Result<DataSet> {
    let text = std::fs::read_to_string(path)?;
    parse_table(&text)
}

fn disambiguate_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<&str> = raw.collect();
    let mut taken: HashSet<String> = raw.iter().map(|h| s!(*h)).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());

    for h in raw {
        if seen.insert(h) {
            out.push(s!(h));
            continue;
        }
        let mut n = 1;
        let name = loop {
            let candidate = format!("{h}.{n}");
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        taken.insert(name.clone());
        out.push(name);
    }
    out
}

/* ---------------- Writing ---------------- */

/// Write a header row plus rows to any writer. Quoting as needed.
pub fn write_table<W: Write>(w: W, ds: &DataSet) -> Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(w);
    wtr.write_record(&ds.headers)?;
    for row in &ds.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create/truncate `path` and write `ds` to it.
pub fn write_table_to_path(path: &Path, ds: &DataSet) -> Result<()> {
    let file = File::create(path)?;
    write_table(BufWriter::new(file), ds)
}

pub fn to_csv_string(ds: &DataSet) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, ds)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_ragged_rows_and_strips_bom() {
        let ds = parse_table("\u{feff}a,b,c\n1,2\n4,5,6,7\n").unwrap();
        assert_eq!(ds.headers, vec!["a", "b", "c"]);
        assert_eq!(ds.rows, vec![vec!["1", "2", ""], vec!["4", "5", "6"]]);
    }

    #[test]
    fn repeated_headers_get_suffixes() {
        let ds = parse_table("flu,flu,rsv,flu.1\n1,2,3,4\n").unwrap();
        assert_eq!(ds.headers, vec!["flu", "flu.2", "rsv", "flu.1"]);
    }

    #[test]
    fn quoted_fields_survive_a_round_trip() {
        let ds = DataSet::new(
            vec![s!("geo_value"), s!("n")],
            vec![vec![s!("st johns, nl"), s!("3")], vec![s!("say \"hi\""), s!("")]],
        );
        let text = to_csv_string(&ds).unwrap();
        assert!(text.starts_with("geo_value,n\n\"st johns, nl\",3\n"));
        assert_eq!(parse_table(&text).unwrap(), ds);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Row {
        a: u32,
        c: Option<f64>,
    }

    #[test]
    fn deserialize_ignores_unnamed_columns() {
        let rows: Vec<Row> = deserialize_records("a,b,c\n1,x,2.5\n2,y,\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].a, 1);
        assert_eq!(rows[0].c, Some(2.5));
        assert_eq!(rows[1].c, None);
    }
}
