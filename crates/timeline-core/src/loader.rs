// File: crates/timeline-core/src/loader.rs
// Summary: CSV loading of disaster records with fail-fast validation.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::record::{Category, DisasterRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load every record from a CSV file with a header row.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<DisasterRecord>, LoadError> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let records = read_records(rdr)?;
    info!(path = %path.display(), count = records.len(), "loaded disaster records");
    Ok(records)
}

/// Same as [`load_csv`], reading from any byte source.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<DisasterRecord>, LoadError> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    read_records(rdr)
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<DisasterRecord>, LoadError> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    let cols = Columns::locate(&headers)?;

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        out.push(cols.parse(&rec, i + 1)?);
    }
    Ok(out)
}

/// Column positions of the required fields.
struct Columns {
    name: usize,
    category: usize,
    cost: usize,
    year: usize,
    mid: usize,
}

impl Columns {
    fn locate(headers: &[String]) -> Result<Self, LoadError> {
        let idx = |want: &'static str| -> Result<usize, LoadError> {
            headers.iter().position(|h| h == want).ok_or(LoadError::MissingColumn(want))
        };
        Ok(Self {
            name: idx("name")?,
            category: idx("category")?,
            cost: idx("cost")?,
            year: idx("year")?,
            mid: idx("mid")?,
        })
    }

    fn parse(&self, rec: &csv::StringRecord, row: usize) -> Result<DisasterRecord, LoadError> {
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");

        let name = field(self.name);
        let category = field(self.category)
            .parse::<Category>()
            .map_err(|e| LoadError::UnknownCategory { row, value: e.0 })?;
        let cost_raw = field(self.cost);
        let cost = cost_raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
            row,
            field: "cost",
            value: cost_raw.to_string(),
        })?;
        let year_raw = field(self.year);
        let year = year_raw.parse::<i32>().map_err(|_| LoadError::InvalidNumber {
            row,
            field: "year",
            value: year_raw.to_string(),
        })?;
        let mid_raw = field(self.mid);
        let mid = NaiveDate::parse_from_str(mid_raw, DATE_FORMAT)
            .map_err(|_| LoadError::InvalidDate { row, value: mid_raw.to_string() })?;

        DisasterRecord::try_new(name, category, cost, year, mid)
            .map_err(|reason| LoadError::InvalidRecord { row, reason })
    }
}
