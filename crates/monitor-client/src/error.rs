use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between pressing a button and drawing the result.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The label has no entry in the symbol table.
    #[error("unknown symbol: {0}")]
    UnknownLabel(String),

    #[error("invalid news limit: {0:?}")]
    InvalidLimit(String),

    /// `index` and `close` of a price series differ in length.
    #[error("malformed price series: {index} timestamps against {close} closes")]
    MalformedSeries { index: usize, close: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to render template: {0}")]
    Render(#[from] tera::Error),
}
