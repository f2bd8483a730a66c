//! Timestamp text used for `lastUpdated`, `createdAt` and `updatedAt`.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as RFC 3339 with millisecond precision,
/// e.g. `2025-05-24T00:00:00.000Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::now_timestamp;

    #[test]
    fn timestamp_uses_millis_and_zulu_suffix() {
        let now = now_timestamp();
        assert!(now.ends_with('Z'));
        assert_eq!(now.len(), "2025-05-24T00:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
