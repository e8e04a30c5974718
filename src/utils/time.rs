//! Serde helpers for timestamp fields on the ClassMate API.
//!
//! Canvas due dates arrive as RFC 3339 strings ("2026-03-02T04:59:00Z");
//! these helpers are meant for use with `#[serde(with = "...")]`.

use serde::{Deserialize, Deserializer, Serializer};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Deserialize an RFC 3339 formatted string into an OffsetDateTime.
pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OffsetDateTime::parse(&s, &Rfc3339).map_err(serde::de::Error::custom)
}

/// Serialize an OffsetDateTime into an RFC 3339 formatted string.
pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = datetime
        .format(&Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&s)
}

/// RFC 3339 (de)serialization for `Option<OffsetDateTime>` fields.
///
/// `null` and absent-with-`#[serde(default)]` both map to `None`.
pub mod option {
    use super::*;

    /// Deserialize an optional RFC 3339 formatted string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| OffsetDateTime::parse(&s, &Rfc3339).map_err(serde::de::Error::custom))
            .transpose()
    }

    /// Serialize an optional OffsetDateTime as RFC 3339 or null.
    pub fn serialize<S>(
        datetime: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(datetime) => super::serialize(datetime, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use time::macros::datetime;

    #[derive(Serialize, Deserialize)]
    struct Due {
        #[serde(with = "super")]
        at: time::OffsetDateTime,
    }

    #[derive(Serialize, Deserialize)]
    struct MaybeDue {
        #[serde(with = "super::option", default)]
        at: Option<time::OffsetDateTime>,
    }

    #[test]
    fn round_trip_canvas_due_date() {
        let due: Due = serde_json::from_str(r#"{"at":"2026-03-02T04:59:00Z"}"#).unwrap();
        assert_eq!(due.at, datetime!(2026-03-02 04:59:00 UTC));
        let json = serde_json::to_string(&due).unwrap();
        assert_eq!(json, r#"{"at":"2026-03-02T04:59:00Z"}"#);
    }

    #[test]
    fn optional_timestamp_null() {
        let due: MaybeDue = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(due.at.is_none());
        let due: MaybeDue = serde_json::from_str(r#"{}"#).unwrap();
        assert!(due.at.is_none());
    }

    #[test]
    fn rejects_non_rfc3339() {
        let result: Result<Due, _> = serde_json::from_str(r#"{"at":"March 2, 2026"}"#);
        assert!(result.is_err());
    }
}
