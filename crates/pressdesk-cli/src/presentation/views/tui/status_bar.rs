use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Key hints for the current screen.
pub struct StatusBarView<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> StatusBarView<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self
            .hints
            .iter()
            .map(|(key, action)| format!("{} {}", key, action))
            .collect::<Vec<_>>()
            .join("  ");

        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
