use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::BannerViewModel;

use super::status_level_to_color;

pub struct BannerView<'a> {
    model: &'a BannerViewModel,
}

impl<'a> BannerView<'a> {
    pub fn new(model: &'a BannerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for BannerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);
        Paragraph::new(self.model.message.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}
