//! Properties of the dashboard and preview derivations over generated collections.

use pressdesk_engine::{
    DateDisplay, PAGE_SIZE, PageCursor, PreviewStatusMatch, counts, filter_published, page_window,
    visible_articles,
};
use pressdesk_testing::ArticleFactory;
use pressdesk_types::{Article, ArticleStatus, Tab};

const STATUSES: [&str; 9] = [
    "publish", "draft", "trashed", "Publish", "DRAFT", "archived", "", "Published", "trashed",
];

/// Deterministic pseudo-random collection of `len` articles.
fn collection(seed: u64, len: usize) -> Vec<Article> {
    let mut state = seed;
    (0..len)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let status = STATUSES[(state >> 33) as usize % STATUSES.len()];
            ArticleFactory::new(i as i64 + 1).status(status).build()
        })
        .collect()
}

#[test]
fn visible_rows_are_exactly_the_matching_articles_in_order() {
    let dates = DateDisplay::utc();
    for seed in 0..32 {
        let articles = collection(seed, 40);
        for tab in Tab::ALL {
            let expected: Vec<String> = articles
                .iter()
                .filter(|a| a.status == tab.status().as_str())
                .map(|a| a.id.to_string())
                .collect();
            let actual: Vec<String> = visible_articles(&articles, tab, &dates)
                .iter()
                .map(|row| row.id.to_string())
                .collect();
            assert_eq!(actual, expected, "seed {} tab {}", seed, tab);
        }
    }
}

#[test]
fn counts_total_never_exceeds_collection() {
    for seed in 0..32 {
        let articles = collection(seed, 25);
        let c = counts(&articles);
        let recognised = articles
            .iter()
            .filter(|a| ArticleStatus::parse_canonical(&a.status).is_some())
            .count();

        assert!(c.total() <= articles.len());
        assert_eq!(c.total(), recognised);
        assert_eq!(c.total() == articles.len(), recognised == articles.len());
    }
}

#[test]
fn visible_articles_is_idempotent() {
    let dates = DateDisplay::utc();
    let articles = collection(7, 30);
    for tab in Tab::ALL {
        let first = visible_articles(&articles, tab, &dates);
        let second = visible_articles(&articles, tab, &dates);
        assert_eq!(first, second);
    }
}

#[test]
fn preview_next_exists_only_for_full_pages() {
    let five: Vec<Article> = (1..=5)
        .map(|id| ArticleFactory::new(id).status("publish").build())
        .collect();
    let published = filter_published(&five, PreviewStatusMatch::Canonical);
    let page = page_window(&published, 1, PAGE_SIZE);
    assert!(PageCursor::new(1, page.len()).has_next());

    let four = &five[..4];
    let page = page_window(four, 1, PAGE_SIZE);
    assert!(!PageCursor::new(1, page.len()).has_next());
}

#[test]
fn pages_partition_the_published_set() {
    let articles = collection(11, 60);
    let published = filter_published(&articles, PreviewStatusMatch::Canonical);

    let mut seen = Vec::new();
    let mut page = 1;
    loop {
        let window = page_window(&published, page, PAGE_SIZE);
        seen.extend(window.iter().map(|a| a.id.clone()));
        if !PageCursor::new(page, window.len()).has_next() {
            break;
        }
        page += 1;
    }

    let expected: Vec<_> = published.iter().map(|a| a.id.clone()).collect();
    assert_eq!(seen, expected);
}
