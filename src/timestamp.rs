use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use derive_more::{Deref, Display};

use super::error::{SkipReason, TransformError};

pub const DEFAULT_ZONE: &str = "Asia/Singapore";

/// `M-D-YYYY hh:mm:ss`, 24-hour clock, month and day unpadded.
const LOCAL_FORMAT: &str = "%-m-%-d-%Y %H:%M:%S";

/// Zone every output timestamp is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Deref, Display)]
pub struct TargetZone(Tz);

impl FromStr for TargetZone {
    type Err = TransformError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| TransformError::UnknownZone(name.to_owned()))
    }
}

impl Default for TargetZone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Singapore)
    }
}

impl TargetZone {
    /// Renders an instant as wall-clock time in this zone.
    pub fn render(&self, instant: &DateTime<FixedOffset>) -> String {
        instant.with_timezone(&self.0).format(LOCAL_FORMAT).to_string()
    }
}

/// Parses an RFC 3339 timestamp such as `2023-01-05T10:00:00Z`.
pub fn parse_utc(raw: &str) -> Result<DateTime<FixedOffset>, SkipReason> {
    DateTime::parse_from_rfc3339(raw).map_err(|source| SkipReason::Timestamp {
        raw: raw.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_utc, TargetZone, DEFAULT_ZONE};
    use crate::error::{SkipReason, TransformError};

    #[test]
    fn renders_in_singapore() {
        let zone: TargetZone = DEFAULT_ZONE.parse().unwrap();
        let instant = parse_utc("2023-01-05T10:00:00Z").unwrap();
        assert_eq!(zone.render(&instant), "1-5-2023 18:00:00");
    }

    #[test]
    fn default_zone_is_singapore() {
        assert_eq!(TargetZone::default(), DEFAULT_ZONE.parse::<TargetZone>().unwrap());
        assert_eq!(TargetZone::default().to_string(), DEFAULT_ZONE);
    }

    #[test]
    fn crosses_date_boundary() {
        let zone: TargetZone = DEFAULT_ZONE.parse().unwrap();
        let instant = parse_utc("2023-12-31T20:30:05Z").unwrap();
        assert_eq!(zone.render(&instant), "1-1-2024 04:30:05");
    }

    #[test]
    fn other_zones_are_configurable() {
        let instant = parse_utc("2023-01-05T10:00:00Z").unwrap();

        let utc: TargetZone = "UTC".parse().unwrap();
        assert_eq!(utc.render(&instant), "1-5-2023 10:00:00");

        let new_york: TargetZone = "America/New_York".parse().unwrap();
        assert_eq!(new_york.render(&instant), "1-5-2023 05:00:00");
    }

    #[test]
    fn accepts_offsets_and_fractions() {
        let zone = TargetZone::default();

        let offset = parse_utc("2023-01-05T10:00:00+02:00").unwrap();
        assert_eq!(zone.render(&offset), "1-5-2023 16:00:00");

        let fraction = parse_utc("2023-11-25T01:02:03.999Z").unwrap();
        assert_eq!(zone.render(&fraction), "11-25-2023 09:02:03");
    }

    #[test]
    fn rejects_non_rfc3339() {
        let err = parse_utc("2023/01/05 10:00:00").unwrap_err();
        assert!(matches!(err, SkipReason::Timestamp { raw, .. } if raw == "2023/01/05 10:00:00"));
        assert!(parse_utc("").is_err());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = "Mars/Olympus_Mons".parse::<TargetZone>().unwrap_err();
        assert!(matches!(err, TransformError::UnknownZone(name) if name == "Mars/Olympus_Mons"));
    }
}
