// reset; cargo run -- --input data/blood_panel.csv
// reset; cargo run -- --input data/blood_panel.xlsx --sheet-name Panel --required hemoglobin,glucose --json

use std::path::PathBuf;

use bloodwork_lib::{
    anyhow, serde_json,
    tracing::info,
    utils::{append_error_report, get_utc_iso_datetime},
    BloodTestProcessor, Config, DatasetValidator, LogConfig, ValidationReport, ERRORS_LOG_FILE,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bloodwork")]
#[command(about = "A tool to validate and normalize blood test datasets")]
#[command(version)]
struct Args {
    /// Path to the blood test data file (.csv or .xlsx)
    #[arg(short, long)]
    input: PathBuf,

    /// Optional sheet name to read (XLSX only; if not specified, reads the first sheet)
    #[arg(long)]
    sheet_name: Option<String>,

    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "configs/default.yml")]
    config: PathBuf,

    /// Comma-separated columns that must be present (if not specified, the known metric columns)
    #[arg(long, value_delimiter = ',')]
    required: Option<Vec<String>>,

    /// Comma-separated columns that must be numeric (if not specified, the known metric columns)
    #[arg(long, value_delimiter = ',')]
    numeric: Option<Vec<String>>,

    /// Optional log file; console logging stays on either way
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// File that failed validation reports are appended to
    #[arg(long, default_value = ERRORS_LOG_FILE)]
    error_log: PathBuf,

    /// Print the validation report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let arguments = Args::parse();

    let mut log_config = LogConfig::default();
    if let Some(path) = &arguments.log_file {
        log_config = log_config.with_log_file(path.clone());
    }
    log_config.init()?;

    let config = Config::from_yaml(&arguments.config)?;
    let processor = BloodTestProcessor::new(config);

    let dataset = processor.load(&arguments.input, arguments.sheet_name.as_deref())?;

    let report = match (&arguments.required, &arguments.numeric) {
        (None, None) => processor.validate(&dataset),
        (required, numeric) => {
            let mut validator = DatasetValidator::new();
            if let Some(columns) = required {
                validator = validator.require_columns(columns.clone());
            }
            if let Some(columns) = numeric {
                validator = validator.require_numeric(columns.clone());
            }
            validator.validate(&dataset)
        }
    };

    if arguments.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if !report.is_valid {
        println!("❌ Validation failed with {} errors", report.errors.len());
        append_error_report(
            &arguments.error_log,
            "Blood Test Validation Error Report",
            &format_error_report(&report),
        );
        eprintln!("❌ Check {} for details.", arguments.error_log.display());
        std::process::exit(1);
    }

    println!("✅ Validation completed!");
    if let Some(summary) = &report.validation_summary {
        info!("{summary}");
    }

    let normalized = processor.normalize(&dataset)?;
    info!(
        "Normalized {} metric readings against reference ranges",
        normalized.n_rows()
    );

    for summary in processor.summarize(&dataset)? {
        println!(
            "  {} ({}): {} readings, {} below / {} within / {} above normal",
            summary.metric,
            summary.unit,
            summary.readings,
            summary.below_normal,
            summary.within_normal,
            summary.above_normal
        );
    }

    Ok(())
}

fn format_error_report(report: &ValidationReport) -> String {
    let mut body = String::new();
    body.push_str("=============================\n");
    body.push_str(&format!("Generated at: {}\n\n", get_utc_iso_datetime()));
    body.push_str(&format!("Total errors: {}\n\n", report.errors.len()));
    for error in &report.errors {
        body.push_str(&format!("  - {}\n", error));
    }
    if let Some(summary) = &report.validation_summary {
        body.push_str(&format!("\nChecks performed: {}\n", summary));
    }
    body
}
