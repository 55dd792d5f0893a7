//! Dashboard runner
//!
//! Terminal setup, the draw/poll loop and teardown.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    CHROME_HEIGHT, DataTable, FilterMenu, Header, HelpBar, HelpOverlay, PreviewPane, SearchBar,
    StatusBar,
};
use crate::ui::error::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive creatives dashboard
#[derive(Debug, Default)]
pub struct Dashboard {
    theme: Theme,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over the terminal and run until the user quits
    ///
    /// The terminal is restored even when the loop fails.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Terminal` if terminal setup, drawing or event
    /// polling fails.
    pub fn run(&self, state: &mut AppState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, state);

        if let Err(e) = Self::cleanup_terminal() {
            tracing::error!(error = %e, "terminal cleanup failed");
            if result.is_ok() {
                return Err(e);
            }
        }

        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        tracing::info!(rows = state.view.total(), "dashboard started");

        while !state.should_exit {
            state.cleanup_messages();
            terminal.draw(|frame| self.render(frame, state))?;

            if poll_and_handle(state, POLL_INTERVAL)? == EventResult::Exit {
                state.should_exit = true;
            }
        }

        tracing::info!("dashboard closed");
        Ok(())
    }

    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let theme = &self.theme;
        let [header_area, search_area, content_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Header::new(&state.greeting, state.view.len(), state.view.total(), theme),
            header_area,
        );
        frame.render_widget(
            SearchBar::new(
                &state.query,
                state.query_cursor,
                state.dropdown.committed().len(),
                theme,
            )
            .focused(state.mode == Mode::Normal),
            search_area,
        );

        self.render_content(frame, state, content_area);

        frame.render_widget(
            StatusBar::new(
                state.latest_message(),
                state.view.sort(),
                state.view.filter().tokens(),
                theme,
            ),
            status_area,
        );
        let hints = HelpBar::hints_for(state.mode);
        frame.render_widget(HelpBar::new(&hints, theme), help_area);

        match state.mode {
            Mode::Filter => frame.render_widget(
                FilterMenu::new(&state.dropdown, state.menu_cursor, theme),
                FilterMenu::area(frame.area()),
            ),
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::Normal => {}
        }
    }

    /// Table, with the preview on the right when one is open
    fn render_content(&self, frame: &mut Frame, state: &mut AppState, area: Rect) {
        let (table_area, preview_area) = match &state.preview {
            Some(preview) => {
                let table_share = if preview.expanded { 30 } else { 60 };
                let [table, side] = Layout::horizontal([
                    Constraint::Percentage(table_share),
                    Constraint::Percentage(100 - table_share),
                ])
                .areas(area);
                (table, Some(side))
            }
            None => (area, None),
        };

        state.visible_height = usize::from(table_area.height.saturating_sub(CHROME_HEIGHT)).max(1);

        frame.render_widget(
            DataTable::new(
                &state.view,
                state.cursor,
                state.scroll_offset,
                state.focused_column,
                &self.theme,
            ),
            table_area,
        );

        if let (Some(preview), Some(side)) = (&state.preview, preview_area) {
            frame.render_widget(
                PreviewPane::new(preview, &self.theme).scroll(state.preview_scroll),
                side,
            );
        }
    }
}
