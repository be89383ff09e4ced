use std::{fs::File, io, path::Path};

use csv::ByteRecord;
use derive_getters::Getters;
use derive_more::{Constructor, Deref};
use serde::Serialize;
use tracing::{info, warn};

use super::{
    account::account_no,
    error::{SkipReason, TransformError},
    message::Message,
    record::{InputRecord, InputRecords},
    timestamp::{parse_utc, TargetZone},
};

/// Written unconditionally, whatever the input header said.
pub const OUTPUT_HEADER: [&str; 4] = ["iam_id", "account_no", "timestamp", "reference_id"];

#[derive(Debug, Clone, PartialEq, Serialize, Constructor, Getters)]
pub struct OutputRecord {
    iam_id: String,
    account_no: String,
    timestamp: String,
    reference_id: String,
}

#[derive(Debug, Default, PartialEq, Deref)]
pub struct OutputRecords(pub Vec<OutputRecord>);

impl OutputRecords {
    pub fn to_csv<W: io::Write>(&self, writer: W) -> Result<(), TransformError> {
        let mut wrt = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wrt.write_record(OUTPUT_HEADER)?;
        for rec in &self.0 {
            wrt.serialize(rec)?;
        }
        wrt.flush()?;

        Ok(())
    }
}

/// Row counts of a finished run. `read` always equals `written + skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct RunSummary {
    read: usize,
    written: usize,
    skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, Constructor)]
pub struct Transformer {
    zone: TargetZone,
}

impl Transformer {
    /// Turns one raw input row into an output row, or says why it can't.
    pub fn transform(&self, row: &ByteRecord) -> Result<OutputRecord, SkipReason> {
        let input = InputRecord::try_from(row)?;
        let instant = parse_utc(input.timestamp)?;
        let message = Message::from_raw(input.message)?;

        Ok(OutputRecord::new(
            input.iam_id.to_owned(),
            account_no(&message.reference_id).to_owned(),
            self.zone.render(&instant),
            message.reference_id,
        ))
    }

    /// Transforms every row in order, logging and dropping the ones that fail.
    pub fn transform_all(&self, rows: &InputRecords) -> (OutputRecords, usize) {
        let mut out = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for row in rows.iter() {
            match self.transform(row) {
                Ok(rec) => out.push(rec),
                Err(reason) => {
                    skipped += 1;
                    warn!(
                        line = row.position().map_or(0, |pos| pos.line()),
                        %reason,
                        "skipping record"
                    );
                }
            }
        }
        (OutputRecords(out), skipped)
    }
}

/// Reads `input`, writes the normalized table to `output`.
///
/// Bad rows are skipped; anything wrong with the files themselves ends the run.
pub fn run(input: &Path, output: &Path, zone: TargetZone) -> Result<RunSummary, TransformError> {
    let rows = InputRecords::from_path(input)?;
    let file = File::create(output)?;

    let (records, skipped) = Transformer::new(zone).transform_all(&rows);
    records.to_csv(file)?;

    info!(output = %output.display(), zone = zone.name(), "output written");

    Ok(RunSummary {
        read: rows.len(),
        written: records.len(),
        skipped,
    })
}
