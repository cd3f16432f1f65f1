pub type AnimlibResult<T> = Result<T, AnimlibError>;

#[derive(thiserror::Error, Debug)]
pub enum AnimlibError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("url error: {0}")]
    Url(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimlibError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub fn url(msg: impl Into<String>) -> Self {
        Self::Url(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<url::ParseError> for AnimlibError {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err.to_string())
    }
}

impl From<serde_json::Error> for AnimlibError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
