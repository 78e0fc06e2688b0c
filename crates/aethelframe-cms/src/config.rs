use crate::error::{CmsError, Result};

pub const BASE_URL_ENV: &str = "AETHELFRAME_API_URL";
pub const TOKEN_ENV: &str = "AETHELFRAME_API_TOKEN";

/// Collection pages served by the API.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

// ---------------------------------------------------------------------------
// CmsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CmsConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub page_size: u32,
}

impl CmsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the base URL and optional bearer token from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).map_err(|_| CmsError::MissingBaseUrl)?;
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                config = config.with_token(token);
            }
        }
        Ok(config)
    }
}
