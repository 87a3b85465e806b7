//! Article table: selection state and row-level keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::view_models::ArticleRowViewModel;
use crate::presentation::views::tui::ArticleTableView;

/// Actions the table emits to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Ask to move the row at this index to the trash
    Trash(usize),
    /// Ask to delete the row at this index permanently
    Delete(usize),
}

pub struct ArticleTableComponent {
    state: TableState,
}

impl ArticleTableComponent {
    pub fn new() -> Self {
        Self {
            state: TableState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Back to the first row (after a tab switch).
    pub fn reset(&mut self) {
        self.state.select(Some(0));
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<TableAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End => {
                self.state.select(Some(data_len.saturating_sub(1)));
                None
            }
            KeyCode::Char('t') => self.current(data_len).map(TableAction::Trash),
            KeyCode::Char('d') | KeyCode::Delete => self.current(data_len).map(TableAction::Delete),
            _ => None,
        }
    }

    /// Render with the selection clamped to the data.
    pub fn render(&mut self, f: &mut Frame, area: Rect, rows: &[ArticleRowViewModel]) {
        self.clamp(rows.len());
        let table = ArticleTableView::new(rows).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn current(&self, data_len: usize) -> Option<usize> {
        self.state.selected().filter(|i| *i < data_len)
    }

    fn clamp(&mut self, data_len: usize) {
        match self.state.selected() {
            _ if data_len == 0 => self.state.select(None),
            Some(i) if i >= data_len => self.state.select(Some(data_len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + 1).min(data_len - 1));
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }
}

impl Default for ArticleTableComponent {
    fn default() -> Self {
        Self::new()
    }
}
