use thiserror::Error;

/// Why a content request produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("content API answered HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("empty payload")]
    Empty,
}

impl FetchError {
    /// Text shown to visitors; technical detail stays in the console log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Status(404) => "We couldn't find what you were looking for.",
            _ => "We couldn't load this content right now. Please try again later.",
        }
    }
}
