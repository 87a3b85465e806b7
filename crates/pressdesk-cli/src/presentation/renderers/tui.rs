//! Interactive dashboard: terminal setup, event loop and screen routing.
//!
//! The app owns the runtime state containers and routes keys to components.
//! Components answer with actions; anything that needs the service becomes an
//! [`Effect`] that the loop runs on the tokio runtime between two frames, so
//! the loading state is drawn before the call blocks.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pressdesk_client::ArticleRepository;
use pressdesk_engine::LIST_LIMIT;
use pressdesk_runtime::{
    ConfirmationRequest, Dashboard, Decision, MutationOutcome, PageLoad, Preview,
};
use pressdesk_types::Tab;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tokio::runtime::Runtime;

use crate::presentation::presenters::{present_dashboard_screen, present_preview_screen};
use crate::presentation::views::tui::components::{PreviewAction, TableAction};
use crate::presentation::views::tui::{
    ArticleTableComponent, BannerView, ConfirmDialogComponent, HeaderView, PreviewComponent,
    StatusBarView,
};

const ARTICLE_HINTS: &[(&str, &str)] = &[
    ("←/→", "tab"),
    ("↑/↓", "select"),
    ("t", "trash"),
    ("d", "delete"),
    ("r", "refresh"),
    ("p", "preview"),
    ("q", "quit"),
];

const PREVIEW_HINTS: &[(&str, &str)] = &[
    ("b", "previous"),
    ("n", "next"),
    ("r", "reload"),
    ("esc", "back"),
    ("q", "quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Articles,
    Preview,
}

/// Work that talks to the service.
#[derive(Debug)]
enum Effect {
    Refresh,
    Resolve(ConfirmationRequest, Decision),
    LoadPage(usize),
    ReloadPreview,
}

pub struct DashboardApp<R> {
    dashboard: Dashboard<R>,
    preview: Preview<R>,
    user_label: String,
    screen: Screen,
    table: ArticleTableComponent,
    dialog: ConfirmDialogComponent,
    preview_component: PreviewComponent,
    /// Preview content predates the last mutation (or was never loaded).
    preview_stale: bool,
    should_quit: bool,
}

impl<R: ArticleRepository> DashboardApp<R> {
    pub fn new(dashboard: Dashboard<R>, preview: Preview<R>, user_label: impl Into<String>) -> Self {
        Self {
            dashboard,
            preview,
            user_label: user_label.into(),
            screen: Screen::Articles,
            table: ArticleTableComponent::new(),
            dialog: ConfirmDialogComponent::new(),
            preview_component: PreviewComponent::new(),
            preview_stale: true,
            should_quit: false,
        }
    }

    pub fn run(mut self, runtime: &Runtime) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, runtime);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        runtime: &Runtime,
    ) -> Result<()> {
        let mut pending = Some(Effect::Refresh);

        loop {
            if let Some(effect) = pending.take() {
                self.perform(effect, terminal, runtime)?;
            }

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                pending = self.handle_key_event(key);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn perform(
        &mut self,
        effect: Effect,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        runtime: &Runtime,
    ) -> Result<()> {
        tracing::debug!(?effect, "running effect");
        match effect {
            Effect::Refresh => {
                let ticket = self.dashboard.begin_fetch();
                terminal.draw(|f| self.render(f))?;
                let result = runtime.block_on(self.dashboard.repository().list(LIST_LIMIT, 0));
                self.dashboard.apply_fetch(ticket, result);
            }
            Effect::Resolve(request, decision) => {
                let outcome = runtime.block_on(self.dashboard.resolve(request, decision));
                if outcome == MutationOutcome::Applied {
                    self.preview_stale = true;
                }
            }
            Effect::LoadPage(page) => {
                if let PageLoad::Fetch(request) = self.preview.begin_load(page) {
                    terminal.draw(|f| self.render(f))?;
                    let result = runtime.block_on(
                        self.preview
                            .repository()
                            .list(request.limit(), request.offset()),
                    );
                    self.preview.apply_load(request, result);
                }
            }
            Effect::ReloadPreview => {
                // Failures land in the preview banner.
                let _ = runtime.block_on(self.preview.reload());
                self.preview_stale = false;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // The dialog is modal.
        if self.dialog.is_open() {
            return self
                .dialog
                .handle_input(key)
                .map(|(request, decision)| Effect::Resolve(request, decision));
        }

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return None;
        }

        match self.screen {
            Screen::Articles => self.handle_articles_key(key),
            Screen::Preview => self.handle_preview_key(key),
        }
    }

    fn handle_articles_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let tab = match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(self.dashboard.tab().next()),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                Some(self.dashboard.tab().previous())
            }
            KeyCode::Char('1') => Some(Tab::Published),
            KeyCode::Char('2') => Some(Tab::Drafts),
            KeyCode::Char('3') => Some(Tab::Trashed),
            _ => None,
        };
        if let Some(tab) = tab {
            self.dashboard.select_tab(tab);
            self.table.reset();
            return None;
        }

        match key.code {
            KeyCode::Char('r') => return Some(Effect::Refresh),
            KeyCode::Esc => {
                self.dashboard.clear_error();
                return None;
            }
            KeyCode::Char('p') => {
                self.screen = Screen::Preview;
                return if self.preview_stale {
                    Some(Effect::ReloadPreview)
                } else {
                    None
                };
            }
            _ => {}
        }

        let rows = self.dashboard.visible();
        let action = self.table.handle_input(key, rows.len())?;
        let request = match action {
            TableAction::Trash(i) => self.dashboard.request_trash(rows.get(i)?.id.clone()),
            TableAction::Delete(i) => self.dashboard.request_delete(rows.get(i)?.id.clone()),
        };
        self.dialog.open(request);
        None
    }

    fn handle_preview_key(&mut self, key: KeyEvent) -> Option<Effect> {
        let screen = present_preview_screen(&self.preview);
        match self.preview_component.handle_input(key, &screen)? {
            PreviewAction::NextPage => Some(Effect::LoadPage(screen.page + 1)),
            PreviewAction::PreviousPage => Some(Effect::LoadPage(screen.page - 1)),
            PreviewAction::Reload => Some(Effect::ReloadPreview),
            PreviewAction::Close => {
                self.screen = Screen::Articles;
                None
            }
        }
    }

    fn render(&mut self, f: &mut Frame) {
        match self.screen {
            Screen::Articles => self.render_articles(f),
            Screen::Preview => self.render_preview(f),
        }
        self.dialog.render(f);
    }

    fn render_articles(&mut self, f: &mut Frame) {
        let screen = present_dashboard_screen(&self.dashboard, &self.user_label);
        let banner_height = if screen.banner.is_some() { 3 } else { 0 };

        let [header, banner, body, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(f.area());

        f.render_widget(HeaderView::new(&screen), header);
        if let Some(model) = &screen.banner {
            f.render_widget(BannerView::new(model), banner);
        }
        self.table.render(f, body, &screen.rows);
        f.render_widget(StatusBarView::new(ARTICLE_HINTS), status);
    }

    fn render_preview(&mut self, f: &mut Frame) {
        let screen = present_preview_screen(&self.preview);
        let banner_height = if screen.banner.is_some() { 3 } else { 0 };

        let [banner, body, status] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(f.area());

        if let Some(model) = &screen.banner {
            f.render_widget(BannerView::new(model), banner);
        }
        self.preview_component.render(f, body, &screen);
        f.render_widget(StatusBarView::new(PREVIEW_HINTS), status);
    }
}
