use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::excerpt;
use crate::presentation::view_models::PreviewScreenViewModel;

const CARD_EXCERPT_CHARS: usize = 200;

/// Article cards of the current preview page.
pub struct PreviewView<'a> {
    model: &'a PreviewScreenViewModel,
}

impl<'a> PreviewView<'a> {
    pub fn new(model: &'a PreviewScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for PreviewView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();

        if self.model.articles.is_empty() && !self.model.loading {
            lines.push(Line::from("No published articles on this page."));
        }

        for card in &self.model.articles {
            lines.push(Line::from(Span::styled(
                card.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                card.category.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            )));
            lines.push(Line::from(excerpt(&card.content, CARD_EXCERPT_CHARS)));
            lines.push(Line::from(""));
        }

        let title = if self.model.loading {
            format!("Preview - page {} - loading...", self.model.page)
        } else {
            format!("Preview - page {}", self.model.page)
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(title).borders(Borders::ALL))
            .render(area, buf);
    }
}
