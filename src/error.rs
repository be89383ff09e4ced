use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("csv error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
}

/// Why a single input row produced no output row.
///
/// None of these stop the run; the row is dropped and the next one is tried.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("malformed row: only {width} fields")]
    MalformedRow { width: usize },
    #[error("row is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("error parsing timestamp {raw}: {source}")]
    Timestamp {
        raw: String,
        source: chrono::ParseError,
    },
    #[error("no valid JSON found: {raw}")]
    NoJson { raw: String },
    #[error("error unmarshalling JSON for record: {0}")]
    Json(#[from] serde_json::Error),
}
