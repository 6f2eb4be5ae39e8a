use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors raised while building or saving a tracker workbook
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Year outside the range spreadsheet dates can represent (1900-9999)
    #[error("year {0} is outside the supported range 1900-9999")]
    InvalidYear(i32),

    #[error("month {month} of {year} does not exist")]
    InvalidMonth { year: i32, month: u32 },

    /// Any failure reported by the xlsx writer, including the final save
    #[error("workbook write failed: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid goals configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
