//! Test fixtures shared between unit and integration tests.

use crate::config::Config;
use crate::dataset::{Column, Dataset};

/// Configuration used throughout the tests.
pub fn sample_config() -> Config {
    Config {
        model_name: "bert-base-uncased".to_string(),
        batch_size: 32,
        learning_rate: 2e-5,
        telegram_token: None,
        fatsecret_key: None,
    }
}

/// Small panel with in-range hemoglobin and glucose readings.
pub fn sample_blood_panel() -> Dataset {
    Dataset::builder()
        .column(int_column("id", &[1, 2, 3]))
        .column(float_column("hemoglobin", &[14.2, 13.9, 16.1]))
        .column(float_column("glucose", &[88.0, 95.5, 72.4]))
        .column(text_column("category", &["A", "B", "C"]))
        .build()
        .unwrap()
}

/// Integer column with no missing values.
pub fn int_column(name: &str, values: &[i64]) -> Column {
    Column::ints(name, values.iter().map(|v| Some(*v)).collect())
}

/// Float column with no missing values.
pub fn float_column(name: &str, values: &[f64]) -> Column {
    Column::floats(name, values.iter().map(|v| Some(*v)).collect())
}

/// Text column with no missing values.
pub fn text_column(name: &str, values: &[&str]) -> Column {
    Column::texts(name, values.iter().map(|v| Some(v.to_string())).collect())
}
