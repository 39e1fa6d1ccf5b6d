/// Current UTC time in RFC 3339 format, used to timestamp report entries.
pub fn get_utc_iso_datetime() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_timestamp_parses_back_as_rfc3339() {
        let timestamp = get_utc_iso_datetime();
        assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }
}
