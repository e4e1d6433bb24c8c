use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractDataError {
    #[error("Unsupported fiscal year {0}: expected one of 2020-2024")]
    InvalidFiscalYear(i32),

    #[error("Invalid top-N count {0}: must be at least 1")]
    InvalidTopN(usize),

    #[error("Contract search failed (status {status}): {details}")]
    FetchFailed { status: u16, details: String },

    #[error("Malformed contract search response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ContractDataError>;
