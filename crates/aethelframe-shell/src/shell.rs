use crate::router::{self, Route};
use aethelframe_cms::{
    CmsClient, JournalEntry, PageInfo, Project, ProjectFilter, Remote, Service,
};
use aethelframe_core::emergence::EmergenceState;
use aethelframe_core::error::Result;
use aethelframe_core::store::Subscription;
use aethelframe_core::visit::VisitStore;
use aethelframe_core::{CanvasId, EmergenceStore};
use tracing::warn;

// ---------------------------------------------------------------------------
// SiteShell
// ---------------------------------------------------------------------------

/// The application shell: owns the emergence store (the single writer of
/// session state) and the CMS client, and keeps per-canvas content caches.
///
/// Content is fetched once when a canvas is first activated; fetch failures
/// are logged and the view degrades to an empty collection. Content fetching
/// never feeds back into emergence state.
pub struct SiteShell<S: VisitStore> {
    emergence: EmergenceStore<S>,
    client: CmsClient,
    projects: Remote<Vec<Project>>,
    projects_pages: PageInfo,
    project_filter: ProjectFilter,
    journal: Remote<Vec<JournalEntry>>,
    journal_pages: PageInfo,
    journal_tag: Option<String>,
    services: Remote<Vec<Service>>,
}

impl<S: VisitStore> SiteShell<S> {
    pub fn new(emergence: EmergenceStore<S>, client: CmsClient) -> Self {
        Self {
            emergence,
            client,
            projects: Remote::Idle,
            projects_pages: PageInfo::default(),
            project_filter: ProjectFilter::default(),
            journal: Remote::Idle,
            journal_pages: PageInfo::default(),
            journal_tag: None,
            services: Remote::Idle,
        }
    }

    // ---------------------------------------------------------------------------
    // Emergence passthroughs
    // ---------------------------------------------------------------------------

    pub fn state(&self) -> EmergenceState {
        self.emergence.state()
    }

    pub fn dismiss_overture(&mut self) {
        self.emergence.dismiss_overture();
    }

    pub fn advance_phase(&mut self) {
        self.emergence.advance_phase();
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&EmergenceState) + 'static) -> Subscription {
        self.emergence.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.emergence.unsubscribe(subscription);
    }

    // ---------------------------------------------------------------------------
    // Activation
    // ---------------------------------------------------------------------------

    /// Present `canvas`: run the phase-advance rule, then fetch the canvas's
    /// collection if it has not been requested yet this session.
    pub async fn activate(&mut self, canvas: CanvasId) {
        self.emergence.navigate(canvas);
        self.ensure_content(canvas).await;
    }

    /// Router entry point: resolve `path` and activate its canvas. An
    /// unknown path leaves all state untouched and surfaces the error.
    pub async fn activate_path(&mut self, path: &str) -> Result<Route> {
        let route = router::resolve(path)?;
        self.activate(route.canvas).await;
        Ok(route)
    }

    async fn ensure_content(&mut self, canvas: CanvasId) {
        match canvas {
            CanvasId::Portfolio if self.projects.is_idle() => self.load_projects(1).await,
            CanvasId::Journal if self.journal.is_idle() => self.load_journal(1).await,
            CanvasId::Services if self.services.is_idle() => self.load_services().await,
            _ => {}
        }
    }

    // ---------------------------------------------------------------------------
    // Projects
    // ---------------------------------------------------------------------------

    pub async fn load_projects(&mut self, page: u32) {
        self.projects = Remote::Loading;
        match self.client.published_projects(&self.project_filter, page).await {
            Ok(fetched) => {
                self.projects_pages = PageInfo::from_page(&fetched, page, self.client.page_size());
                self.projects = Remote::Ready(fetched.results);
            }
            Err(err) => {
                warn!(error = %err, page, "project fetch failed, presenting empty list");
                self.projects_pages = PageInfo::default();
                self.projects = Remote::Failed(err.to_string());
            }
        }
    }

    /// Apply a new project filter and reload from the first page.
    pub async fn filter_projects(&mut self, filter: ProjectFilter) {
        self.project_filter = filter;
        self.load_projects(1).await;
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn projects_state(&self) -> &Remote<Vec<Project>> {
        &self.projects
    }

    pub fn projects_pages(&self) -> PageInfo {
        self.projects_pages
    }

    pub fn project_filter(&self) -> &ProjectFilter {
        &self.project_filter
    }

    // ---------------------------------------------------------------------------
    // Journal
    // ---------------------------------------------------------------------------

    pub async fn load_journal(&mut self, page: u32) {
        self.journal = Remote::Loading;
        let tag = self.journal_tag.clone();
        match self
            .client
            .published_journal_entries(tag.as_deref(), page)
            .await
        {
            Ok(fetched) => {
                self.journal_pages = PageInfo::from_page(&fetched, page, self.client.page_size());
                self.journal = Remote::Ready(fetched.results);
            }
            Err(err) => {
                warn!(error = %err, page, "journal fetch failed, presenting empty list");
                self.journal_pages = PageInfo::default();
                self.journal = Remote::Failed(err.to_string());
            }
        }
    }

    /// Apply a journal tag filter (or clear it) and reload from page one.
    pub async fn filter_journal(&mut self, tag: Option<String>) {
        self.journal_tag = tag;
        self.load_journal(1).await;
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        self.journal.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn journal_state(&self) -> &Remote<Vec<JournalEntry>> {
        &self.journal
    }

    pub fn journal_pages(&self) -> PageInfo {
        self.journal_pages
    }

    // ---------------------------------------------------------------------------
    // Services
    // ---------------------------------------------------------------------------

    pub async fn load_services(&mut self) {
        self.services = Remote::Loading;
        match self.client.published_services().await {
            Ok(fetched) => self.services = Remote::Ready(fetched),
            Err(err) => {
                warn!(error = %err, "service fetch failed, presenting empty list");
                self.services = Remote::Failed(err.to_string());
            }
        }
    }

    pub fn services(&self) -> &[Service] {
        self.services.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn services_state(&self) -> &Remote<Vec<Service>> {
        &self.services
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use aethelframe_cms::CmsConfig;
    use aethelframe_core::visit::MemoryVisitStore;
    use aethelframe_core::Phase;

    fn shell_for(server: &mockito::ServerGuard) -> SiteShell<MemoryVisitStore> {
        let emergence = EmergenceStore::initialize(MemoryVisitStore::new());
        let client = CmsClient::new(CmsConfig::new(server.url())).unwrap();
        SiteShell::new(emergence, client)
    }

    fn projects_body() -> String {
        serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 1,
                "title": "Floating Glass Shards",
                "slug": "floating-glass-shards",
                "description": "Decorative WebGL scene",
                "status": "published",
                "created_at": "2024-05-01T12:00:00Z",
                "updated_at": "2024-05-01T12:00:00Z"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn activating_portfolio_advances_phase_and_loads_projects() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/projects/published/")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(projects_body())
            .create_async()
            .await;

        let mut shell = shell_for(&server);
        shell.activate(CanvasId::Portfolio).await;

        assert_eq!(shell.state().phase, Phase::Growth);
        assert_eq!(shell.state().active_canvas, CanvasId::Portfolio);
        assert_eq!(shell.projects().len(), 1);
        assert_eq!(shell.projects_pages().total_items, 1);
    }

    #[tokio::test]
    async fn content_is_fetched_once_per_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/published/")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(projects_body())
            .expect(1)
            .create_async()
            .await;

        let mut shell = shell_for(&server);
        shell.activate(CanvasId::Portfolio).await;
        shell.activate(CanvasId::Home).await;
        shell.activate(CanvasId::Portfolio).await;
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_empty_list() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("aethelframe_shell=warn")
            .try_init();
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services/published/")
            .with_status(500)
            .create_async()
            .await;

        let mut shell = shell_for(&server);
        shell.activate(CanvasId::Services).await;

        assert!(shell.services().is_empty());
        assert!(shell.services_state().is_failed());
        // The failure never reaches emergence state.
        assert_eq!(shell.state().phase, Phase::Growth);
        assert_eq!(shell.state().active_canvas, CanvasId::Services);
    }

    #[tokio::test]
    async fn unknown_path_changes_nothing() {
        let server = mockito::Server::new_async().await;
        let mut shell = shell_for(&server);
        let before = shell.state();

        assert!(shell.activate_path("/atrium").await.is_err());
        assert_eq!(shell.state(), before);
        assert!(shell.projects_state().is_idle());
    }

    #[tokio::test]
    async fn activate_path_walks_the_emergence_arc() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/projects/published/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(projects_body())
            .create_async()
            .await;
        server
            .mock("GET", "/journal-entries/published/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count":0,"next":null,"previous":null,"results":[]}"#)
            .create_async()
            .await;

        let mut shell = shell_for(&server);
        shell.dismiss_overture();
        assert_eq!(shell.state().phase, Phase::Growth);

        let route = shell.activate_path("/portfolio").await.unwrap();
        assert_eq!(route.canvas, CanvasId::Portfolio);
        assert_eq!(shell.state().phase, Phase::Bloom);

        shell.activate_path("/journal/on-emergence").await.unwrap();
        assert_eq!(shell.state().phase, Phase::Bloom);
        assert_eq!(shell.state().active_canvas, CanvasId::Journal);
    }

    #[tokio::test]
    async fn filter_reload_hits_the_network_again() {
        let mut server = mockito::Server::new_async().await;
        let unfiltered = server
            .mock("GET", "/projects/published/")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(projects_body())
            .create_async()
            .await;
        let filtered = server
            .mock("GET", "/projects/published/")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("page".into(), "1".into()),
                mockito::Matcher::UrlEncoded("category".into(), "installations".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count":0,"next":null,"previous":null,"results":[]}"#)
            .create_async()
            .await;

        let mut shell = shell_for(&server);
        shell.activate(CanvasId::Portfolio).await;
        shell
            .filter_projects(ProjectFilter::default().category("installations"))
            .await;

        assert!(shell.projects().is_empty());
        unfiltered.assert_async().await;
        filtered.assert_async().await;
    }
}
