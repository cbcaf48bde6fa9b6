use thiserror::Error;

/// Error type for every failure a check can hit before it produces a verdict.
///
/// All variants end up as an UNKNOWN plugin line; none of them are retried.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("invalid threshold '{spec}': {reason}")]
    ThresholdParse { spec: String, reason: String },

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("The given States do not contain an State")]
    EmptyAggregation,

    #[error("one of the scraped data exceed the freshness by {0}s")]
    Stale(i64),

    #[error("The query did not return a supported type(scalar, vector, matrix), instead: '{result_type}'. Query: '{query}'")]
    UnsupportedResultShape { result_type: String, query: String },

    #[error("{0}")]
    UnexpectedResult(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("API error: {0}")]
    Api(String),

    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    #[error("{0}")]
    QueryDecode(String),

    #[error("Invalid cookie: {0}")]
    InvalidCookie(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for check operations
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a threshold parse error
    pub fn threshold<S: Into<String>, R: Into<String>>(spec: S, reason: R) -> Self {
        CheckError::ThresholdParse {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported result shape error
    pub fn unsupported_shape<S: Into<String>, Q: Into<String>>(result_type: S, query: Q) -> Self {
        CheckError::UnsupportedResultShape {
            result_type: result_type.into(),
            query: query.into(),
        }
    }

    pub fn unexpected<S: Into<String>>(msg: S) -> Self {
        CheckError::UnexpectedResult(msg.into())
    }

    pub fn api<S: Into<String>>(msg: S) -> Self {
        CheckError::Api(msg.into())
    }

    pub fn query_decode<S: Into<String>>(msg: S) -> Self {
        CheckError::QueryDecode(msg.into())
    }

    pub fn invalid_cookie<S: Into<String>>(msg: S) -> Self {
        CheckError::InvalidCookie(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        CheckError::Config(msg.into())
    }
}
