use bloodwork_lib::{Column, Dataset};

// Re-export shared test utilities from src/test_utils.rs
// These are the core fixtures used by most tests
pub use bloodwork_lib::test_utils::{
    float_column, int_column, sample_blood_panel, sample_config, text_column,
};

/// The id/value/category table used by the validator tests.
#[allow(dead_code)]
pub fn id_value_category() -> Dataset {
    Dataset::builder()
        .column(int_column("id", &[1, 2, 3]))
        .column(float_column("value", &[10.5, 20.1, 30.2]))
        .column(text_column("category", &["A", "B", "C"]))
        .build()
        .unwrap()
}

/// Float column with explicit missing entries.
#[allow(dead_code)]
pub fn float_column_with_gaps(name: &str, values: &[Option<f64>]) -> Column {
    Column::floats(name, values.to_vec())
}
