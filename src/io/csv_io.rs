use std::io::Read;
use std::path::Path;

use crate::error::EpiError;
use crate::models::{CaseSeries, Observation};

/// CSV row structure for case-count data.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct CaseRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Count")]
    count: String,
}

/// Parse a count cell: empty means "not yet reported". Float strings are
/// accepted and truncated, matching the upstream data exports.
fn parse_count(raw: &str) -> Result<Option<u64>, EpiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| EpiError::ParseError(format!("invalid count '{raw}'")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(EpiError::ParseError(format!(
            "count must be a non-negative number, got '{raw}'"
        )));
    }
    Ok(Some(value as u64))
}

fn parse_csv_records<R: Read>(rdr: &mut csv::Reader<R>) -> Result<Vec<Observation>, EpiError> {
    let mut observations = Vec::new();

    for result in rdr.deserialize() {
        let row: CaseRow = result?;
        let count = parse_count(&row.count)?;
        observations.push(Observation::parse(&row.date, count)?);
    }

    Ok(observations)
}

/// Read a case-count series from a CSV file with `Date,Count` columns.
pub fn read_csv(path: impl AsRef<Path>) -> Result<CaseSeries, EpiError> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let observations = parse_csv_records(&mut rdr)?;

    let mut series = CaseSeries::new(
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
    );
    series.observations = observations;

    Ok(series)
}

/// Read a case-count series from CSV bytes.
pub fn read_csv_from_bytes(data: &[u8], name: &str) -> Result<CaseSeries, EpiError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let observations = parse_csv_records(&mut rdr)?;

    let mut series = CaseSeries::new(name);
    series.observations = observations;

    Ok(series)
}

/// Write a case-count series to a CSV file.
pub fn write_csv(series: &CaseSeries, path: impl AsRef<Path>) -> Result<(), EpiError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    for obs in &series.observations {
        let row = CaseRow {
            date: obs.label(),
            count: obs.count.map(|c| c.to_string()).unwrap_or_default(),
        };
        wtr.serialize(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
