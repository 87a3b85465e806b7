use std::fmt;

use crate::presentation::view_models::{
    MutationKind, MutationResultViewModel, MutationStatus, ViewMode,
};

pub struct MutationResultView<'a> {
    data: &'a MutationResultViewModel,
    mode: ViewMode,
}

impl<'a> MutationResultView<'a> {
    pub fn new(data: &'a MutationResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for MutationResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let what = match self.data.action {
            MutationKind::Trash => "moved to trash",
            MutationKind::Delete => "deleted permanently",
        };

        match (self.data.outcome, self.mode) {
            (MutationStatus::Cancelled, ViewMode::Minimal) => Ok(()),
            (MutationStatus::Cancelled, _) => {
                writeln!(f, "Cancelled; article {} left unchanged.", self.data.id)
            }
            (MutationStatus::Applied, ViewMode::Minimal) => writeln!(f, "{}", self.data.id),
            (MutationStatus::Applied, _) => {
                writeln!(f, "Article {} {}.", self.data.id, what)?;
                if let Some(c) = &self.data.counts
                    && self.mode != ViewMode::Compact
                {
                    writeln!(
                        f,
                        "Now: {} published, {} drafts, {} trashed",
                        c.published, c.drafts, c.trashed
                    )?;
                }
                if let Some(err) = &self.data.refresh_error {
                    writeln!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}
