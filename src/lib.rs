mod account;
mod error;
mod message;
mod record;
mod timestamp;
mod transform;

pub use self::{
    account::account_no,
    error::{SkipReason, TransformError},
    message::{extract_json, Message},
    record::{InputRecord, InputRecords, MIN_FIELDS},
    timestamp::{parse_utc, TargetZone, DEFAULT_ZONE},
    transform::{run, OutputRecord, OutputRecords, RunSummary, Transformer, OUTPUT_HEADER},
};
