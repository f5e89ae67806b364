use thiserror::Error;

/// Failures of the HTTP collaborators and their configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdapterError {
    #[error("invalid adapter configuration: {0}")]
    InvalidConfig(String),

    #[error("http client error: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("service id `{0}` is not a valid url")]
    InvalidServiceId(String),

    #[error("no identifier authority registered for host `{0}`")]
    UnknownAuthority(String),

    #[error("content not found for {0}")]
    NotFound(String),

    #[error("response carries no content identity")]
    MissingIdentity,

    #[error("`{0}` is not a valid uuid")]
    InvalidUuid(String),
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        AdapterError::Transport {
            url,
            message: err.to_string(),
        }
    }
}
