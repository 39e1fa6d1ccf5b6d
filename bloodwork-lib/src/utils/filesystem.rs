use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::utils::get_utc_iso_datetime;

/// Append a titled, timestamped entry to an error-report file.
///
/// Write failures are ignored: the report file is an auxiliary diagnostic
/// channel and must not abort the run.
pub fn append_error_report(path: &Path, title: &str, body: &str) {
    let timestamp = get_utc_iso_datetime();
    let entry = format!("\n[{}] {}:\n{}\n", timestamp, title, body);

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(entry.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_titled_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errors.log");

        append_error_report(&path, "Validation Error Report", "Missing columns");
        append_error_report(&path, "Validation Error Report", "NaN values");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Validation Error Report:").count(), 2);
        assert!(contents.contains("Missing columns"));
        assert!(contents.contains("NaN values"));
    }

    #[test]
    fn test_unwritable_path_is_ignored() {
        append_error_report(
            Path::new("no/such/directory/errors.log"),
            "Report",
            "body",
        );
    }
}
