//! Title line and tab strip with per-tab counts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::DashboardScreenViewModel;

pub struct HeaderView<'a> {
    model: &'a DashboardScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a DashboardScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .tabs
            .iter()
            .map(|tab| Line::from(format!("{} ({})", tab.label, tab.count)))
            .collect();
        let selected = self.model.tabs.iter().position(|tab| tab.selected).unwrap_or(0);

        let title = if self.model.loading {
            format!("pressdesk - {} - loading...", self.model.user_label)
        } else {
            format!("pressdesk - {}", self.model.user_label)
        };

        Tabs::new(titles)
            .select(selected)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(area, buf);
    }
}
