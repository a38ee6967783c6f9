use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocReadsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Unknown country code: {0}")]
    UnknownCountryCode(String),

    #[error("No country query has been run in this session")]
    NoPriorCountryQuery,
}

impl DocReadsError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        DocReadsError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
