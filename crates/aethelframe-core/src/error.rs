use thiserror::Error;

#[derive(Debug, Error)]
pub enum AethelframeError {
    #[error("unknown canvas identifier: {0}")]
    InvalidCanvas(String),

    #[error("invalid phase: {0}")]
    InvalidPhase(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AethelframeError>;
