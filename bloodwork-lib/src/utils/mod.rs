//! Shared helpers: file loaders, header normalization, timestamps, and the
//! error-report file.

mod csv;
mod datetime;
mod excel;
mod filesystem;
mod string;

pub use self::csv::read_csv;
pub use self::datetime::get_utc_iso_datetime;
pub use self::excel::{dataset_from_rows, read_xlsx, read_xlsx_sheet};
pub use self::filesystem::append_error_report;
pub use self::string::{is_null_marker, normalize_header};
