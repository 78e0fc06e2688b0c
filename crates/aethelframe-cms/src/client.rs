use crate::config::CmsConfig;
use crate::content::{validate_slug, JournalEntry, Page, Project, ProjectFilter, Service};
use crate::error::{CmsError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

// ---------------------------------------------------------------------------
// CmsClient
// ---------------------------------------------------------------------------

/// Client for the published-content API. Only published collections and
/// by-slug lookups exist here; admin CRUD is a different surface entirely.
pub struct CmsClient {
    http: reqwest::Client,
    config: CmsConfig,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| CmsError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(CmsConfig::from_env()?)
    }

    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String, query: &[(&str, String)]) -> Result<T> {
        debug!(%url, "cms request");
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json().await?)
    }

    async fn get_by_slug<T: DeserializeOwned>(&self, path: &str, slug: &str) -> Result<T> {
        validate_slug(slug)?;
        let url = self.endpoint(path);
        match self.get_json(url, &[("slug", slug.to_string())]).await {
            Err(CmsError::Status { status: 404, .. }) => Err(CmsError::NotFound(slug.to_string())),
            other => other,
        }
    }

    // ---------------------------------------------------------------------------
    // Projects
    // ---------------------------------------------------------------------------

    pub async fn published_projects(
        &self,
        filter: &ProjectFilter,
        page: u32,
    ) -> Result<Page<Project>> {
        let mut query = vec![("page", page.to_string())];
        if let Some(tech) = &filter.tech_stack {
            query.push(("tech_stack", tech.clone()));
        }
        if let Some(tag) = &filter.tag {
            query.push(("tag", tag.clone()));
        }
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        self.get_json(self.endpoint("projects/published/"), &query)
            .await
    }

    pub async fn project_by_slug(&self, slug: &str) -> Result<Project> {
        self.get_by_slug("projects/by_slug/", slug).await
    }

    // ---------------------------------------------------------------------------
    // Journal
    // ---------------------------------------------------------------------------

    pub async fn published_journal_entries(
        &self,
        tag: Option<&str>,
        page: u32,
    ) -> Result<Page<JournalEntry>> {
        let mut query = vec![("page", page.to_string())];
        if let Some(tag) = tag {
            query.push(("tag", tag.to_string()));
        }
        self.get_json(self.endpoint("journal-entries/published/"), &query)
            .await
    }

    pub async fn journal_entry_by_slug(&self, slug: &str) -> Result<JournalEntry> {
        self.get_by_slug("journal-entries/by_slug/", slug).await
    }

    // ---------------------------------------------------------------------------
    // Services
    // ---------------------------------------------------------------------------

    pub async fn published_services(&self) -> Result<Vec<Service>> {
        self.get_json(self.endpoint("services/published/"), &[])
            .await
    }

    pub async fn service_by_slug(&self, slug: &str) -> Result<Service> {
        self.get_by_slug("services/by_slug/", slug).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
