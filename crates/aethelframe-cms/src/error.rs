use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("CMS base URL not configured: set AETHELFRAME_API_URL")]
    MissingBaseUrl,

    #[error("API token contains characters not valid in a header")]
    InvalidToken,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CmsError>;
