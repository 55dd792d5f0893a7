//! Event handling for the dashboard
//!
//! Maps key events to state changes, per mode.

use super::state::{AppState, Mode};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running the event loop
    Continue,
    /// Leave the dashboard
    Exit,
    /// No action taken
    Ignored,
}

/// Handle events in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Esc, _) => {
            if state.preview.is_some() {
                state.close_preview();
                EventResult::Continue
            } else {
                EventResult::Exit
            }
        }

        // Navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Filters
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            state.toggle_filter();
            EventResult::Continue
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            state.clear_filter();
            EventResult::Continue
        }

        // Sorting
        (KeyCode::Tab, _) => {
            state.focus_next_column();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus_prev_column();
            EventResult::Continue
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            state.cycle_sort();
            EventResult::Continue
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            state.reverse_sort();
            EventResult::Continue
        }

        // Preview
        (KeyCode::Enter, _) => {
            state.open_preview();
            EventResult::Continue
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.toggle_preview_expanded();
            EventResult::Continue
        }
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            state.preview_scroll = state.preview_scroll.saturating_sub(1);
            EventResult::Continue
        }
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            state.preview_scroll += 1;
            EventResult::Continue
        }

        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if state.query.is_empty() {
                EventResult::Ignored
            } else {
                state.query_backspace();
                EventResult::Continue
            }
        }
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.query_clear();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the filter dropdown is open
fn handle_filter_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Exit,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            state.toggle_filter();
            EventResult::Continue
        }
        (KeyCode::Esc, _) => {
            state.close_filter();
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.menu_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.menu_down();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.menu_enter();
            EventResult::Continue
        }
        (KeyCode::Char(' '), _) if state.dropdown.current_category().is_some() => {
            state.menu_toggle();
            EventResult::Continue
        }
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            state.toggle_select_all();
            EventResult::Continue
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            state.clear_filter();
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.menu_search_backspace();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.menu_search_push(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Any key closes help
const fn handle_help_mode(state: &mut AppState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Dispatch a key event for the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Filter => handle_filter_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Creative;
    use crate::table::Column;
    use crate::tags::parse;

    fn make_state() -> AppState {
        let rows = ["US", "DE", "US"]
            .iter()
            .enumerate()
            .map(|(i, country)| {
                let mut row = Creative::complete(format!("id-{i}"));
                row.country = Some((*country).to_string());
                row.tags = Some(format!("Concept:{}", if i == 1 { "UGC" } else { "Gameplay" }));
                row
            })
            .collect();
        AppState::new(rows, parse("Concept:UGC;Concept:Gameplay").unwrap(), "Welcome back")
    }

    fn press(state: &mut AppState, code: KeyCode) -> EventResult {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut AppState, c: char) -> EventResult {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state();
        assert_eq!(press(&mut state, KeyCode::Down), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        assert_eq!(press(&mut state, KeyCode::Up), EventResult::Continue);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_typing_edits_search() {
        let mut state = make_state();
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.query, "de");
        assert_eq!(state.view.len(), 1);
        ctrl(&mut state, 'u');
        assert_eq!(state.view.len(), 3);
    }

    #[test]
    fn test_filter_keys() {
        let mut state = make_state();
        ctrl(&mut state, 'f');
        assert_eq!(state.mode, Mode::Filter);

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.view.len(), 1);

        ctrl(&mut state, 'x');
        assert_eq!(state.view.len(), 3);
    }

    #[test]
    fn test_ctrl_f_toggles_dropdown() {
        let mut state = make_state();
        ctrl(&mut state, 'f');
        assert_eq!(state.mode, Mode::Filter);
        press(&mut state, KeyCode::Enter);
        assert!(state.dropdown.current_category().is_some());

        ctrl(&mut state, 'f');
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.dropdown.is_open());
        assert!(state.dropdown.committed().is_empty());

        ctrl(&mut state, 'f');
        assert_eq!(state.mode, Mode::Filter);
        assert_eq!(state.dropdown.current_category(), None);
    }

    #[test]
    fn test_space_searches_category_list() {
        let mut state = make_state();
        ctrl(&mut state, 'f');
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.dropdown.search(), " ");
    }

    #[test]
    fn test_select_all_shortcut() {
        let mut state = make_state();
        ctrl(&mut state, 'f');
        press(&mut state, KeyCode::Enter);
        ctrl(&mut state, 'a');
        assert!(state.dropdown.all_selected());
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.dropdown.committed().is_empty());
    }

    #[test]
    fn test_sort_keys() {
        let mut state = make_state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focused_column, Column::CreativeName);
        ctrl(&mut state, 's');
        assert!(state.view.sort().is_some());
        ctrl(&mut state, 'r');
        ctrl(&mut state, 'r');
        assert!(state.view.sort().is_some());
    }

    #[test]
    fn test_esc_closes_preview_then_exits() {
        let mut state = make_state();
        press(&mut state, KeyCode::Enter);
        assert!(state.preview.is_some());
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Continue);
        assert!(state.preview.is_none());
        assert_eq!(press(&mut state, KeyCode::Esc), EventResult::Exit);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut state = make_state();
        press(&mut state, KeyCode::F(1));
        assert_eq!(state.mode, Mode::Help);
        press(&mut state, KeyCode::Char('z'));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.query.is_empty());
    }
}
