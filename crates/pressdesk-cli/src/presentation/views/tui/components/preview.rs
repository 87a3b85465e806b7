//! Preview screen: page navigation keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::PreviewScreenViewModel;
use crate::presentation::views::tui::PreviewView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    NextPage,
    PreviousPage,
    Reload,
    Close,
}

#[derive(Default)]
pub struct PreviewComponent;

impl PreviewComponent {
    pub fn new() -> Self {
        Self
    }

    /// Page moves are only emitted when the screen says they are available.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &PreviewScreenViewModel,
    ) -> Option<PreviewAction> {
        match key.code {
            KeyCode::Char('n') | KeyCode::Right if screen.has_next => Some(PreviewAction::NextPage),
            KeyCode::Char('b') | KeyCode::Left if screen.has_previous => {
                Some(PreviewAction::PreviousPage)
            }
            KeyCode::Char('r') => Some(PreviewAction::Reload),
            KeyCode::Esc | KeyCode::Char('p') => Some(PreviewAction::Close),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, screen: &PreviewScreenViewModel) {
        f.render_widget(PreviewView::new(screen), area);
    }
}
