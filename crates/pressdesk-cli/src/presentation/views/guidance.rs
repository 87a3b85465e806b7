use std::fmt;

use crate::presentation::view_models::{GuidanceViewModel, ViewMode};

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    mode: ViewMode,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "pressdesk - article dashboard for {}\n", self.data.api_url)?;
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  pressdesk list --tab drafts       # Articles of one tab")?;
        writeln!(f, "  pressdesk preview --page 1        # Public preview")?;
        writeln!(f, "  pressdesk create --title ...      # New article")?;
        writeln!(f, "  pressdesk dashboard               # Interactive dashboard\n")?;

        if !self.data.config_exists {
            writeln!(f, "No config file at {}; using defaults.", self.data.config_path)?;
            writeln!(f, "Point at another service with --api-url or [api] base_url.\n")?;
        }

        writeln!(f, "For more commands:")?;
        writeln!(f, "  pressdesk --help")
    }
}
