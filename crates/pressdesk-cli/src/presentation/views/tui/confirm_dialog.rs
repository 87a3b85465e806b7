use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ConfirmDialogViewModel;

/// Centered modal asking for a yes/no answer.
pub struct ConfirmDialogView<'a> {
    model: &'a ConfirmDialogViewModel,
}

impl<'a> ConfirmDialogView<'a> {
    pub fn new(model: &'a ConfirmDialogViewModel) -> Self {
        Self { model }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

impl<'a> Widget for ConfirmDialogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog = centered(area, 60.min(area.width), 7.min(area.height));
        Clear.render(dialog, buf);

        let accent = if self.model.destructive {
            Color::Red
        } else {
            Color::Yellow
        };

        let lines = vec![
            Line::from(self.model.message.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" confirm   "),
                Span::styled("[n]", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" cancel"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.model.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            )
            .render(dialog, buf);
    }
}
