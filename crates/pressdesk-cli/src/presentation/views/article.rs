use std::fmt;

use crate::presentation::formatters::{excerpt, truncate};
use crate::presentation::view_models::{
    ArticleDetailViewModel, ArticleListViewModel, CountsViewModel, SaveAction,
    SaveResultViewModel, TabCountsViewModel, ViewMode,
};

fn tab_strip(counts: &TabCountsViewModel, selected: &str) -> String {
    [
        ("Published", counts.published),
        ("Drafts", counts.drafts),
        ("Trashed", counts.trashed),
    ]
    .iter()
    .map(|(label, count)| {
        if *label == selected {
            format!("[{} ({})]", label, count)
        } else {
            format!(" {} ({}) ", label, count)
        }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

// --------------------------------------------------------
// Article List View
// --------------------------------------------------------

pub struct ArticleListView<'a> {
    data: &'a ArticleListViewModel,
    mode: ViewMode,
}

impl<'a> ArticleListView<'a> {
    pub fn new(data: &'a ArticleListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", row.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(
                f,
                "{:<6} {:<12} {}",
                row.id.to_string(),
                truncate(&row.category, 12),
                truncate(&row.title, 60)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Signed in as {}", self.data.user_label)?;
        writeln!(f, "{}", tab_strip(&self.data.counts, &self.data.tab))?;
        writeln!(f)?;

        if self.data.rows.is_empty() {
            writeln!(f, "No articles in {}.", self.data.tab)?;
            return Ok(());
        }

        writeln!(
            f,
            "  {:<6} {:<40} {:<12} {}",
            "ID", "TITLE", "CATEGORY", "CREATED"
        )?;
        for row in &self.data.rows {
            writeln!(
                f,
                "  {:<6} {:<40} {:<12} {}",
                row.id.to_string(),
                truncate(&row.title, 40),
                truncate(&row.category, 12),
                row.created_date
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        if self.data.rows.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        for row in &self.data.rows {
            writeln!(
                f,
                "  #{} status={} content={} chars",
                row.id, row.status, row.content_chars
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ArticleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Counts View
// --------------------------------------------------------

pub struct CountsView<'a> {
    data: &'a CountsViewModel,
    mode: ViewMode,
}

impl<'a> CountsView<'a> {
    pub fn new(data: &'a CountsViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CountsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = &self.data.counts;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{} {} {}", c.published, c.drafts, c.trashed),
            ViewMode::Compact => writeln!(
                f,
                "published={} drafts={} trashed={}",
                c.published, c.drafts, c.trashed
            ),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(f, "  {:<10} {:>5}", "Published", c.published)?;
                writeln!(f, "  {:<10} {:>5}", "Drafts", c.drafts)?;
                writeln!(f, "  {:<10} {:>5}", "Trashed", c.trashed)?;
                if self.mode == ViewMode::Verbose {
                    writeln!(f, "  {:<10} {:>5}", "Total", self.data.total)?;
                    writeln!(f, "  {:<10} {:>5}", "Other", self.data.unclassified)?;
                }
                Ok(())
            }
        }
    }
}

// --------------------------------------------------------
// Article Detail View
// --------------------------------------------------------

pub struct ArticleDetailView<'a> {
    data: &'a ArticleDetailViewModel,
    mode: ViewMode,
}

impl<'a> ArticleDetailView<'a> {
    pub fn new(data: &'a ArticleDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ArticleDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", d.title),
            ViewMode::Compact => writeln!(
                f,
                "{} [{}] {} - {}",
                d.id,
                d.status,
                d.title,
                excerpt(&d.content, 60)
            ),
            ViewMode::Standard | ViewMode::Verbose => {
                writeln!(f, "{}", d.title)?;
                writeln!(f, "  ID:       {}", d.id)?;
                writeln!(f, "  Category: {}", d.category)?;
                writeln!(f, "  Status:   {}", d.status)?;
                writeln!(f, "  Created:  {}", d.created_display)?;
                if self.mode == ViewMode::Verbose
                    && let Some(raw) = &d.created_date
                {
                    writeln!(f, "  Raw date: {}", raw)?;
                }
                writeln!(f)?;
                writeln!(f, "{}", d.content)
            }
        }
    }
}

// --------------------------------------------------------
// Save Result View
// --------------------------------------------------------

pub struct SaveResultView<'a> {
    data: &'a SaveResultViewModel,
    mode: ViewMode,
}

impl<'a> SaveResultView<'a> {
    pub fn new(data: &'a SaveResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SaveResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            if let Some(id) = &self.data.id {
                writeln!(f, "{}", id)?;
            }
            return Ok(());
        }

        let verb = match self.data.action {
            SaveAction::Created => "Created",
            SaveAction::Updated => "Updated",
        };
        writeln!(f, "{} \"{}\" as {}", verb, self.data.title, self.data.status)?;

        if let Some(err) = &self.data.refresh_error {
            writeln!(f, "{}", err)?;
        } else if let Some(c) = &self.data.counts
            && matches!(self.mode, ViewMode::Standard | ViewMode::Verbose)
        {
            writeln!(
                f,
                "Now: {} published, {} drafts, {} trashed",
                c.published, c.drafts, c.trashed
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ArticleRowViewModel;
    use pressdesk_types::ArticleId;

    fn list() -> ArticleListViewModel {
        ArticleListViewModel {
            user_label: "user_001_simulated".to_string(),
            tab: "Published".to_string(),
            status: "publish".to_string(),
            counts: TabCountsViewModel {
                published: 2,
                drafts: 1,
                trashed: 0,
            },
            rows: vec![
                ArticleRowViewModel {
                    id: ArticleId::from(1),
                    title: "First headline".to_string(),
                    category: "news".to_string(),
                    status: "publish".to_string(),
                    created_date: "1/3/2024, 10.00.00".to_string(),
                    content_chars: 250,
                },
                ArticleRowViewModel {
                    id: ArticleId::from(4),
                    title: "Second headline".to_string(),
                    category: "sport".to_string(),
                    status: "publish".to_string(),
                    created_date: "N/A".to_string(),
                    content_chars: 300,
                },
            ],
        }
    }

    #[test]
    fn test_minimal_lists_ids() {
        let data = list();
        let text = ArticleListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(text, "1\n4\n");
    }

    #[test]
    fn test_standard_marks_selected_tab() {
        let data = list();
        let text = ArticleListView::new(&data, ViewMode::Standard).to_string();
        let strip = text.lines().nth(1).unwrap_or_default().trim_end();
        insta::assert_snapshot!(strip, @"[Published (2)]  Drafts (1)   Trashed (0)");
        assert!(text.contains("Signed in as user_001_simulated"));
        assert!(text.contains("1/3/2024, 10.00.00"));
    }

    #[test]
    fn test_empty_tab_message() {
        let mut data = list();
        data.rows.clear();
        data.tab = "Drafts".to_string();
        let text = ArticleListView::new(&data, ViewMode::Standard).to_string();
        assert!(text.contains("No articles in Drafts."));
    }
}
