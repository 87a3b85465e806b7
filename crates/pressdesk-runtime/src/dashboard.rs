use crate::fetch::{FetchTicket, Generations};
use crate::{Error, Result};
use pressdesk_client::{ArticleRepository, FetchError};
use pressdesk_engine::{ArticleRow, DateDisplay, LIST_LIMIT, TabCounts, counts, visible_articles};
use pressdesk_types::{Article, ArticleId, Tab};

/// Article collection behind the dashboard screen.
///
/// The collection is a snapshot of the last successful listing and is only
/// ever replaced wholesale; mutations re-fetch instead of patching it.
pub struct Dashboard<R> {
    repo: R,
    articles: Vec<Article>,
    tab: Tab,
    loading: bool,
    error: Option<String>,
    dates: DateDisplay,
    generations: Generations,
}

impl<R: ArticleRepository> Dashboard<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            articles: Vec::new(),
            tab: Tab::default(),
            loading: false,
            error: None,
            dates: DateDisplay::utc(),
            generations: Generations::default(),
        }
    }

    pub fn with_dates(mut self, dates: DateDisplay) -> Self {
        self.dates = dates;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dates(&self) -> &DateDisplay {
        &self.dates
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn counts(&self) -> TabCounts {
        counts(&self.articles)
    }

    /// Rows of the selected tab.
    pub fn visible(&self) -> Vec<ArticleRow> {
        visible_articles(&self.articles, self.tab, &self.dates)
    }

    pub fn find(&self, id: &ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| &article.id == id)
    }

    /// Like [`Dashboard::find`], as a [`Result`].
    pub fn require(&self, id: &ArticleId) -> Result<&Article> {
        self.find(id).ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Start a listing. Any ticket issued earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.generations.issue()
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state alone when a newer fetch has been
    /// started since. A failure empties the collection and sets the banner.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<Article>, FetchError>,
    ) -> bool {
        if !self.generations.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                "discarding stale article listing"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(articles) => {
                tracing::info!(count = articles.len(), "fetched articles");
                self.articles = articles;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "article listing failed");
                self.articles.clear();
                self.error = Some(format!("Failed to fetch articles: {}", err));
            }
        }
        true
    }

    /// Re-list every article (`limit 1000, offset 0`).
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.begin_fetch();
        let result = self.repo.list(LIST_LIMIT, 0).await;
        let failure = result.as_ref().err().cloned();
        self.apply_fetch(ticket, result);
        match failure {
            Some(err) => Err(Error::Fetch(err)),
            None => Ok(()),
        }
    }
}
