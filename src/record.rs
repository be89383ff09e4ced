use std::{path::Path, str};

use csv::ByteRecord;
use derive_more::Deref;

use super::error::SkipReason;

/// Minimum number of columns a data row must carry.
pub const MIN_FIELDS: usize = 3;

/// Borrowed view of the three columns the transform reads.
#[derive(Debug, PartialEq)]
pub struct InputRecord<'a> {
    pub timestamp: &'a str,
    pub message: &'a str,
    pub iam_id: &'a str,
}

impl<'a> TryFrom<&'a ByteRecord> for InputRecord<'a> {
    type Error = SkipReason;

    /// Only the three columns read here must be valid UTF-8.
    fn try_from(row: &'a ByteRecord) -> Result<Self, Self::Error> {
        if row.len() < MIN_FIELDS {
            return Err(SkipReason::MalformedRow { width: row.len() });
        }
        Ok(Self {
            timestamp: str::from_utf8(&row[0])?,
            message: str::from_utf8(&row[1])?,
            iam_id: str::from_utf8(&row[2])?,
        })
    }
}

/// The whole input table, header excluded.
#[derive(Debug, Deref)]
pub struct InputRecords(pub Vec<ByteRecord>);

impl InputRecords {
    /// Reads every row into memory. The first row is always treated as a
    /// header and dropped, whatever it contains. Rows may differ in width and
    /// are kept as raw bytes, so bad encoding only costs the affected row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, csv::Error> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?
            .into_byte_records()
            .collect::<Result<_, _>>()
            .map(Self)
    }
}
