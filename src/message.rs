use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::SkipReason;

/// Payload embedded in the free-form message column.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub qr_metadata: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Message {
    /// Parses the JSON object embedded somewhere inside `raw`.
    pub fn from_raw(raw: &str) -> Result<Self, SkipReason> {
        let json = extract_json(raw).ok_or_else(|| SkipReason::NoJson {
            raw: raw.to_owned(),
        })?;
        // Going through `Value` keeps the last of any repeated keys.
        let value: Value = serde_json::from_str(json)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Slice from the first `{` through the last `}`.
///
/// Text after the payload that contains a `}` widens the slice and makes it
/// unparsable.
pub fn extract_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start <= end).then(|| &raw[start..=end])
}
