use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::ArticleRowViewModel;

/// Rows of the selected tab. Stateful rendering is done by the component.
pub struct ArticleTableView<'a> {
    rows: &'a [ArticleRowViewModel],
}

impl<'a> ArticleTableView<'a> {
    pub fn new(rows: &'a [ArticleRowViewModel]) -> Self {
        Self { rows }
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["ID", "TITLE", "CATEGORY", "CREATED"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    row.id.to_string(),
                    truncate(&row.title, 60),
                    row.category.clone(),
                    row.created_date.clone(),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(20),
                Constraint::Length(14),
                Constraint::Length(22),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
    }
}
