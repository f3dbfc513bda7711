use thiserror::Error;

/// Everything that can terminate a run. All variants are terminal: nothing
/// is retried or recovered.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was absent or empty. The message matches the text
    /// the runner itself uses for missing action inputs.
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The response envelope carried no payload.
    #[error("the response contained an empty result")]
    EmptyResult,

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
