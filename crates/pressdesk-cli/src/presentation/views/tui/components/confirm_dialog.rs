//! Modal holding a pending [`ConfirmationRequest`] until the user answers.

use crossterm::event::{KeyCode, KeyEvent};
use pressdesk_runtime::{ConfirmationRequest, Decision};
use ratatui::Frame;

use crate::presentation::presenters;
use crate::presentation::views::tui::ConfirmDialogView;

#[derive(Default)]
pub struct ConfirmDialogComponent {
    pending: Option<ConfirmationRequest>,
}

impl ConfirmDialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn open(&mut self, request: ConfirmationRequest) {
        self.pending = Some(request);
    }

    /// `y`/Enter confirms, `n`/Esc cancels. Either closes the dialog and
    /// hands the request back with the answer.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<(ConfirmationRequest, Decision)> {
        let decision = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Decision::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Decision::Cancel,
            _ => return None,
        };
        self.pending.take().map(|request| (request, decision))
    }

    pub fn render(&self, f: &mut Frame) {
        if let Some(request) = &self.pending {
            let model = presenters::present_confirm_dialog(request);
            f.render_widget(ConfirmDialogView::new(&model), f.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pressdesk_runtime::PendingAction;
    use pressdesk_types::ArticleId;

    fn request() -> ConfirmationRequest {
        ConfirmationRequest {
            action: PendingAction::Trash(ArticleId::from(2)),
            message: "Are you sure you want to move this article to the trash?".to_string(),
        }
    }

    #[test]
    fn test_answer_closes_dialog() {
        let mut dialog = ConfirmDialogComponent::new();
        dialog.open(request());

        assert!(dialog.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)).is_none());
        assert!(dialog.is_open());

        let (answered, decision) = dialog
            .handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(answered, request());
        assert_eq!(decision, Decision::Cancel);
        assert!(!dialog.is_open());
    }
}
