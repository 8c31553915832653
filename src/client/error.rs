use crate::judge::token::TokenKind;
use std::result::Result as StdResult;
use thiserror::Error;

/// Failures of the caller-supplied problem index or test case label against
/// freshly fetched contest metadata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("problem index {index} out of range, contest has {len} problems")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no data set labeled {label:?} in problem {problem_id}")]
    LabelNotFound { label: String, problem_id: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error sending request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Regex to find {0} not matched")]
    TokenNotFound(TokenKind),

    #[error("Failed to log in: {0}")]
    Auth(#[source] Box<Error>),

    #[error("Resolve: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Config: {0}")]
    Config(String),

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Error process file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Relay answered {status}: {message}")]
    Relay { status: u16, message: String },
}

impl Error {
    pub(crate) fn auth(err: Error) -> Self {
        Self::Auth(Box::new(err))
    }
}

pub type Result<T> = StdResult<T, Error>;
