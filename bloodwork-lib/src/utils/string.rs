/// Normalize a column header: control characters become spaces and runs of
/// whitespace collapse to a single space.
pub fn normalize_header(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Cell spellings treated as missing values when loading text data.
pub fn is_null_marker(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "" | "nan" | "na" | "n/a" | "null" | "nil" | "none"
    )
}
