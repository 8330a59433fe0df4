//! arbor-records: record file format, loading and saving.

pub mod schema;

use std::path::Path;

use arbor_core::Record;
use tracing::debug;

pub use schema::RecordFile;

pub type RecordsResult<T> = Result<T, RecordsError>;

#[derive(thiserror::Error, Debug)]
pub enum RecordsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown record file format: {path} (expected .yaml, .yml or .json)")]
    UnknownFormat { path: String },
}

/// On-disk encodings of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> RecordsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Format::Yaml)
            }
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            _ => Err(RecordsError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

pub fn parse_yaml(content: &str) -> RecordsResult<Vec<Record>> {
    let file: schema::RecordFileRepr = serde_yaml::from_str(content)?;
    Ok(file.into_records())
}

pub fn parse_json(content: &str) -> RecordsResult<Vec<Record>> {
    let file: schema::RecordFileRepr = serde_json::from_str(content)?;
    Ok(file.into_records())
}

pub fn to_yaml_string(records: &[Record]) -> RecordsResult<String> {
    Ok(serde_yaml::to_string(&RecordFile::from(records))?)
}

pub fn to_json_string(records: &[Record]) -> RecordsResult<String> {
    Ok(serde_json::to_string_pretty(&RecordFile::from(records))?)
}

pub fn load_yaml(path: &Path) -> RecordsResult<Vec<Record>> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_yaml(&content)?;
    debug!(path = %path.display(), records = records.len(), "loaded YAML records");
    Ok(records)
}

pub fn save_yaml(path: &Path, records: &[Record]) -> RecordsResult<()> {
    std::fs::write(path, to_yaml_string(records)?)?;
    Ok(())
}

pub fn load_json(path: &Path) -> RecordsResult<Vec<Record>> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_json(&content)?;
    debug!(path = %path.display(), records = records.len(), "loaded JSON records");
    Ok(records)
}

pub fn save_json(path: &Path, records: &[Record]) -> RecordsResult<()> {
    std::fs::write(path, to_json_string(records)?)?;
    Ok(())
}

/// Load records, choosing YAML or JSON by extension.
pub fn load(path: &Path) -> RecordsResult<Vec<Record>> {
    match Format::from_path(path)? {
        Format::Yaml => load_yaml(path),
        Format::Json => load_json(path),
    }
}

/// Save records, choosing YAML or JSON by extension.
pub fn save(path: &Path, records: &[Record]) -> RecordsResult<()> {
    match Format::from_path(path)? {
        Format::Yaml => save_yaml(path, records),
        Format::Json => save_json(path, records),
    }
}
