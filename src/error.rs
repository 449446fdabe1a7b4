use thiserror::Error;

/// Error types for PubMed client and report operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {message}")]
    XmlParseError { message: String },

    /// Article not found
    #[error("Article not found: PMID {pmid}")]
    ArticleNotFound { pmid: String },

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Generic API error
    #[error("API error: {message}")]
    ApiError { message: String },

    /// Writing the report file failed
    #[error("CSV write failed: {0}")]
    CsvError(#[from] csv::Error),

    /// Filesystem I/O failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PubMedError>;
