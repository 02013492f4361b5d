use thiserror::Error;

/// Errors reading or decoding an input document.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not well-formed YAML/JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document parsed but a path item did not decode.
    #[error("decode error: {0}")]
    Decode(String),

    /// The document parsed but has the wrong overall shape.
    #[error("document shape error: {0}")]
    Shape(String),
}

impl DocError {
    /// Short machine-readable category for report rows.
    pub fn category(&self) -> &'static str {
        match self {
            DocError::Io(_) => "io",
            DocError::Parse(_) => "parse",
            DocError::Decode(_) => "decode",
            DocError::Shape(_) => "shape",
        }
    }
}
