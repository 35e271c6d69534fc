//! Error types for the fantasy football asset fetchers

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("No table found in page")]
    NoTable,

    #[error("Could not detect {column} column in {source_name}")]
    MissingColumn { column: String, source_name: String },

    #[error("Column '{column}' not found in CSV. Found columns: {found:?}")]
    MissingCsvColumn { column: String, found: Vec<String> },

    #[error("CSV appears to be empty")]
    EmptyCsv,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid league id: {value:?} (expected digits only)")]
    InvalidLeagueId { value: String },

    #[error("Invalid week: {week} (expected 1-18)")]
    InvalidWeek { week: u16 },

    #[error("{env_var} is missing")]
    MissingEnv { env_var: String },

    #[error("OpenAI request failed ({code}): {message}")]
    OpenAi { code: String, message: String },
}

impl FflError {
    /// True when the OpenAI API rejected the call for billing reasons.
    pub fn is_insufficient_quota(&self) -> bool {
        matches!(self, FflError::OpenAi { code, .. } if code == "insufficient_quota")
    }
}
