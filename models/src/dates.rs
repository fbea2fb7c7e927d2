// models/src/dates.rs
//
// The backend is loose about temporal values: some screens post bare
// `YYYY-MM-DD` strings, others post full ISO timestamps and truncate on the
// way out. These serde helpers normalize both shapes at the gateway boundary
// so the rest of the workspace only ever sees `NaiveDate` / `DateTime<Utc>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATE_FMT: &str = "%Y-%m-%d";

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw).trim();
    NaiveDate::parse_from_str(date_part, DATE_FMT).ok()
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // datetime-local inputs come through without an offset or seconds
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw.trim(), fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// A required date field: accepts `YYYY-MM-DD` or a full timestamp,
/// serializes date-only.
pub mod flexible_date {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FMT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date value: {raw}")))
    }
}

/// An optional date field: empty strings and missing keys both become `None`.
pub mod flexible_date_opt {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FMT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => parse_date(s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date value: {s}"))),
        }
    }
}

/// A required timestamp field: accepts RFC 3339 or naive datetime-local
/// strings (assumed UTC), serializes RFC 3339.
pub mod flexible_datetime {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        dt: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp value: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_date, parse_datetime};
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn should_parse_bare_date() {
        assert_eq!(
            parse_date("2024-05-01"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn should_truncate_timestamp_to_date() {
        assert_eq!(
            parse_date("2024-05-01T10:30:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn should_reject_garbage_date() {
        assert_eq!(parse_date("pronto"), None);
    }

    #[test]
    fn should_parse_datetime_local_without_offset() {
        let dt = parse_datetime("2024-05-01T10:30").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn should_parse_rfc3339_datetime() {
        assert!(parse_datetime("2024-05-01T10:30:00+02:00").is_some());
    }
}
