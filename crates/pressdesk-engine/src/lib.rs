// Engine - pure derivations over a fetched article collection.
// Nothing in here performs I/O; the runtime owns fetching and state.

pub mod dashboard;
pub mod dates;
pub mod pagination;

pub use dashboard::{ArticleRow, TabCounts, counts, visible_articles};
pub use dates::{DateDisplay, INVALID_DATE, MISSING_DATE};
pub use pagination::{
    LIST_LIMIT, OFFSET_STRIDE, PAGE_SIZE, PageCursor, PreviewStatusMatch, coarse_offset,
    filter_published, page_window,
};
