use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::{validate, AuthRecord, SeedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(OutputFormat::Json),
            Some("csv") => Ok(OutputFormat::Csv),
            _ => Err(SeedError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Pretty-printed JSON array, UTF-8 preserved.
pub fn write_json(records: &[AuthRecord], path: &Path) -> Result<(), SeedError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// CSV with a header row in field declaration order.
pub fn write_csv(records: &[AuthRecord], path: &Path) -> Result<(), SeedError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_records(records: &[AuthRecord], path: &Path, format: OutputFormat) -> Result<(), SeedError> {
    match format {
        OutputFormat::Json => write_json(records, path),
        OutputFormat::Csv => write_csv(records, path),
    }
}

/// Load and validate a dataset previously written by [`write_json`] or [`write_csv`].
pub fn read_records(path: &Path) -> Result<Vec<AuthRecord>, SeedError> {
    let records: Vec<AuthRecord> = match OutputFormat::from_path(path)? {
        OutputFormat::Json => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        OutputFormat::Csv => {
            let mut rdr = csv::Reader::from_path(path)?;
            rdr.deserialize::<AuthRecord>().collect::<Result<Vec<_>, _>>()?
        }
    };
    validate(&records)?;
    Ok(records)
}
