use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::{Dataset, Element, ElementValues, Group, Sample};

/// `Sample;X_UTM;Y_UTM;Group;Pb_ppm;As_ppm;Sb_ppm;V_ppm`
pub const FIELDS_PER_ROW: usize = 8;

/// Why a single row could not become a [`Sample`]. Rows failing this way
/// are skipped; loading continues.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid row length: {0}")]
    InvalidRowLength(usize),
    #[error("invalid group: {0}")]
    InvalidGroup(String),
    #[error("could not parse {field} as a number: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
}

/// Faults of the row source itself. These abort the load, unlike
/// [`ParseError`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open dataset file: {0}")]
    Open(std::io::Error),
    #[error("could not read data row: {0}")]
    Read(#[from] csv::Error),
}

/// Converts one raw row into a typed [`Sample`]. Pure; the code and
/// coordinate fields pass through unvalidated.
pub fn parse_record(record: &StringRecord) -> Result<Sample, ParseError> {
    if record.len() != FIELDS_PER_ROW {
        return Err(ParseError::InvalidRowLength(record.len()));
    }

    let group = match &record[3] {
        "mine" => Group::Mine,
        "background" => Group::Background,
        other => return Err(ParseError::InvalidGroup(other.to_string())),
    };

    let mut ppm = ElementValues::default();
    for (element, raw) in Element::ALL.into_iter().zip(record.iter().skip(4)) {
        ppm[element] = raw.parse().map_err(|_| ParseError::InvalidNumber {
            field: element.column(),
            value: raw.to_string(),
        })?;
    }

    Ok(Sample {
        group,
        code: record[0].to_string(),
        x_utm: record[1].to_string(),
        y_utm: record[2].to_string(),
        ppm,
    })
}

/// Reads `;`-separated rows from `source` and accumulates the parseable
/// ones into a [`Dataset`], preserving arrival order within each group.
///
/// Rows that fail semantic parsing (wrong field count, unknown group,
/// non-numeric measurement) are logged and skipped; a header line falls out
/// the same way. A structural read fault from the underlying source is
/// fatal. Variances and ratios are left uncomputed.
pub fn load<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut dataset = Dataset::default();
    let mut skipped = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        match parse_record(&record) {
            Ok(sample) => dataset.push(sample),
            Err(err) => {
                warn!(
                    "could not parse data row {}: {err} (row: {:?})",
                    row + 1,
                    record
                );
                skipped += 1;
            }
        }
    }

    if dataset.is_empty() {
        warn!("no parseable samples in input");
    }
    info!(
        "loaded {} samples ({} mine, {} background), skipped {} rows",
        dataset.n_samples(),
        dataset.samples.mine.len(),
        dataset.samples.background.len(),
        skipped
    );
    Ok(dataset)
}

/// Opens `path` and loads it. The file handle is released when loading
/// finishes, whether or not it succeeded.
pub fn load_path(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(LoadError::Open)?;
    load(file)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
