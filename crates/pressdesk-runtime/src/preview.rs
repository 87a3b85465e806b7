use crate::fetch::{FetchTicket, Generations};
use crate::{Error, Result};
use pressdesk_client::{ArticleRepository, FetchError};
use pressdesk_engine::{
    LIST_LIMIT, PAGE_SIZE, PageCursor, PreviewStatusMatch, coarse_offset, filter_published,
    page_window,
};
use pressdesk_types::Article;
use serde::{Deserialize, Serialize};

/// How preview pages map onto listing requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStrategy {
    /// One `list(1000, 0)`, cached; pages are cut from the cached published set.
    #[default]
    ClientSide,
    /// `list(1000, (page - 1) * 1000)` for every page, windowed locally.
    CoarseOffset,
}

/// A page load that needs a listing from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    ticket: FetchTicket,
    page: usize,
    offset: usize,
}

impl PageRequest {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        LIST_LIMIT
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// Served from the cache; the page is already applied.
    Cached,
    Fetch(PageRequest),
}

/// Paginated public view of published articles.
pub struct Preview<R> {
    repo: R,
    strategy: PaginationStrategy,
    status_match: PreviewStatusMatch,
    current_page: usize,
    articles: Vec<Article>,
    loading: bool,
    error: Option<String>,
    cache: Option<Vec<Article>>,
    generations: Generations,
}

impl<R: ArticleRepository> Preview<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            strategy: PaginationStrategy::default(),
            status_match: PreviewStatusMatch::default(),
            current_page: 1,
            articles: Vec::new(),
            loading: false,
            error: None,
            cache: None,
            generations: Generations::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: PaginationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_status_match(mut self, status_match: PreviewStatusMatch) -> Self {
        self.status_match = status_match;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Articles of the current page.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor::new(self.current_page, self.articles.len())
    }

    /// Start loading `page` (pages below 1 load page 1).
    ///
    /// With a warm client-side cache the page is applied immediately.
    pub fn begin_load(&mut self, page: usize) -> PageLoad {
        let page = page.max(1);

        if self.strategy == PaginationStrategy::ClientSide
            && let Some(published) = &self.cache
        {
            // Supersede anything still in flight.
            self.generations.issue();
            self.articles = page_window(published, page, PAGE_SIZE);
            self.current_page = page;
            self.loading = false;
            self.error = None;
            return PageLoad::Cached;
        }

        let offset = match self.strategy {
            PaginationStrategy::ClientSide => 0,
            PaginationStrategy::CoarseOffset => coarse_offset(page),
        };

        self.loading = true;
        PageLoad::Fetch(PageRequest {
            ticket: self.generations.issue(),
            page,
            offset,
        })
    }

    /// Apply the listing fetched for `request`.
    ///
    /// Returns `false` for a superseded request. On failure the page and its
    /// articles stay as they were and the error is recorded.
    pub fn apply_load(
        &mut self,
        request: PageRequest,
        result: std::result::Result<Vec<Article>, FetchError>,
    ) -> bool {
        if !self.generations.is_current(request.ticket) {
            return false;
        }

        self.loading = false;
        match result {
            Ok(batch) => {
                let published = filter_published(&batch, self.status_match);
                self.articles = match self.strategy {
                    PaginationStrategy::ClientSide => {
                        let page = page_window(&published, request.page, PAGE_SIZE);
                        self.cache = Some(published);
                        page
                    }
                    // Each batch is already offset by the page.
                    PaginationStrategy::CoarseOffset => page_window(&published, 1, PAGE_SIZE),
                };
                self.current_page = request.page;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(page = request.page, error = %err, "preview page failed to load");
                self.error = Some(format!("Failed to fetch articles: {}", err));
            }
        }
        true
    }

    pub async fn load_page(&mut self, page: usize) -> Result<()> {
        let request = match self.begin_load(page) {
            PageLoad::Cached => return Ok(()),
            PageLoad::Fetch(request) => request,
        };

        let result = self.repo.list(request.limit(), request.offset()).await;
        let failure = result.as_ref().err().cloned();
        self.apply_load(request, result);
        match failure {
            Some(err) => Err(Error::Fetch(err)),
            None => Ok(()),
        }
    }

    /// Load the next page if the current one is full. Returns whether a load ran.
    pub async fn next_page(&mut self) -> Result<bool> {
        if !self.cursor().has_next() {
            return Ok(false);
        }
        self.load_page(self.current_page + 1).await?;
        Ok(true)
    }

    /// Load the previous page unless on the first. Returns whether a load ran.
    pub async fn previous_page(&mut self) -> Result<bool> {
        if !self.cursor().has_previous() {
            return Ok(false);
        }
        self.load_page(self.current_page - 1).await?;
        Ok(true)
    }

    /// Drop the cache and load the current page again.
    pub async fn reload(&mut self) -> Result<()> {
        self.cache = None;
        self.load_page(self.current_page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressdesk_client::Operation;
    use pressdesk_testing::fixtures::published;
    use pressdesk_testing::{ArticleFactory, Call, FakeRepository};

    fn ids(preview: &Preview<FakeRepository>) -> Vec<String> {
        preview.articles().iter().map(|a| a.id.to_string()).collect()
    }

    #[tokio::test]
    async fn test_client_side_pages_from_one_listing() {
        let mut articles = published(1, 7);
        articles.insert(2, ArticleFactory::new(100).status("draft").build());
        let mut preview = Preview::new(FakeRepository::with_articles(articles));

        preview.load_page(1).await.unwrap();
        assert_eq!(ids(&preview), vec!["1", "2", "3", "4", "5"]);
        assert!(preview.cursor().has_next());
        assert!(!preview.cursor().has_previous());

        assert!(preview.next_page().await.unwrap());
        assert_eq!(preview.current_page(), 2);
        assert_eq!(ids(&preview), vec!["6", "7"]);
        assert!(!preview.cursor().has_next());
        assert!(!preview.next_page().await.unwrap());

        assert!(preview.previous_page().await.unwrap());
        assert_eq!(preview.current_page(), 1);

        assert_eq!(preview.repository().list_calls(), 1);
    }

    #[tokio::test]
    async fn test_four_published_has_no_next() {
        let mut preview = Preview::new(FakeRepository::with_articles(published(1, 4)));
        preview.load_page(1).await.unwrap();
        assert_eq!(preview.articles().len(), 4);
        assert!(!preview.cursor().has_next());
    }

    #[tokio::test]
    async fn test_coarse_offset_requests_each_page() {
        let mut preview = Preview::new(FakeRepository::with_articles(published(1, 6)))
            .with_strategy(PaginationStrategy::CoarseOffset);

        preview.load_page(1).await.unwrap();
        assert_eq!(ids(&preview), vec!["1", "2", "3", "4", "5"]);

        preview.next_page().await.unwrap();
        assert_eq!(preview.current_page(), 2);
        assert!(preview.articles().is_empty());

        assert_eq!(
            preview.repository().calls(),
            vec![
                Call::List {
                    limit: 1000,
                    offset: 0
                },
                Call::List {
                    limit: 1000,
                    offset: 1000
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_display_label_vocabulary() {
        let articles = vec![
            ArticleFactory::new(1).status("publish").build(),
            ArticleFactory::new(2).status("Published").build(),
        ];
        let mut preview = Preview::new(FakeRepository::with_articles(articles))
            .with_status_match(PreviewStatusMatch::DisplayLabel);

        preview.load_page(1).await.unwrap();
        assert_eq!(ids(&preview), vec!["2"]);
    }

    #[tokio::test]
    async fn test_failure_keeps_current_page() {
        let mut preview = Preview::new(FakeRepository::with_articles(published(1, 12)))
            .with_strategy(PaginationStrategy::CoarseOffset);
        preview.load_page(1).await.unwrap();

        preview
            .repository()
            .fail_next(Operation::List, 503, "maintenance");
        let err = preview.next_page().await.unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
        assert_eq!(preview.current_page(), 1);
        assert_eq!(ids(&preview), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(preview.error(), Some("Failed to fetch articles: maintenance"));
        assert!(!preview.is_loading());
    }

    #[tokio::test]
    async fn test_reload_drops_cache() {
        let mut preview = Preview::new(FakeRepository::with_articles(published(1, 3)));
        preview.load_page(1).await.unwrap();
        preview.load_page(1).await.unwrap();
        assert_eq!(preview.repository().list_calls(), 1);

        preview.reload().await.unwrap();
        assert_eq!(preview.repository().list_calls(), 2);
    }

    #[test]
    fn test_stale_page_is_discarded() {
        let mut preview = Preview::new(FakeRepository::new())
            .with_strategy(PaginationStrategy::CoarseOffset);

        let PageLoad::Fetch(first) = preview.begin_load(1) else {
            panic!("expected fetch");
        };
        let PageLoad::Fetch(second) = preview.begin_load(2) else {
            panic!("expected fetch");
        };
        assert_eq!(second.offset(), 1000);

        assert!(preview.apply_load(second, Ok(published(6, 2))));
        assert!(!preview.apply_load(first, Ok(published(1, 5))));
        assert_eq!(preview.current_page(), 2);
        assert_eq!(ids(&preview), vec!["6", "7"]);
    }

    #[tokio::test]
    async fn test_page_zero_is_first_page() {
        let mut preview = Preview::new(FakeRepository::with_articles(published(1, 2)));
        preview.load_page(0).await.unwrap();
        assert_eq!(preview.current_page(), 1);
    }
}
