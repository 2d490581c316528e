use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server answered {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("no book with id {0}")]
    UnknownBook(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
