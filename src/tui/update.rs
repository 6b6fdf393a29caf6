//! State transitions: (App, AppEvent) → Transition.
//!
//! This is the navigation state machine. Fully testable without a
//! terminal. The quit key is checked before any routing so no component
//! can swallow it; every other key goes to exactly one owner, chosen by
//! the current mode. Keys an owner does not handle are no-ops.

use tracing::{debug, error, info};

use crate::key::Key;
use crate::wizard::WizardEvent;

use super::state::{App, AppEvent, Mode, Pane, Transition};

/// Apply one event to the app.
pub fn update(app: &mut App, event: AppEvent) -> Transition {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize { width, height } => {
            debug!(width, height, "viewport resized");
            app.viewport = Some((width, height));
            Transition::Continue
        }
    }
}

/// Route one key to the component that owns input in the current mode.
pub fn handle_key(app: &mut App, key: Key) -> Transition {
    if key.is_quit() {
        info!(mode = ?app.nav.mode, "quit requested");
        return Transition::Quit;
    }

    match app.nav.mode {
        Mode::TabFocus => update_tab_focus(app, key),
        Mode::TableActive => update_table(app, key),
        Mode::WizardActive => update_wizard(app, key),
    }
    Transition::Continue
}

// ============================================================================
// PER-MODE HANDLERS
// ============================================================================

/// TabFocus: Tab / Shift+Tab cycle panes, Enter activates the pane.
fn update_tab_focus(app: &mut App, key: Key) {
    match key {
        Key::Tab => {
            app.nav.active_tab = app.nav.active_tab.next();
            debug!(pane = ?app.nav.active_tab, "tab moved");
        }
        Key::BackTab => {
            app.nav.active_tab = app.nav.active_tab.prev();
            debug!(pane = ?app.nav.active_tab, "tab moved");
        }
        Key::Enter => {
            app.nav.mode = match app.nav.active_tab {
                Pane::Table => {
                    app.table.focus();
                    Mode::TableActive
                }
                Pane::Wizard => Mode::WizardActive,
            };
            info!(mode = ?app.nav.mode, "pane entered");
        }
        _ => {}
    }
}

/// TableActive: arrows move, Enter locks, Esc releases back to TabFocus.
fn update_table(app: &mut App, key: Key) {
    match key {
        Key::Up | Key::Char('k') => app.table.move_up(),
        Key::Down | Key::Char('j') => app.table.move_down(),
        Key::Enter => {
            if let Some(row) = app.table.confirm() {
                info!(row, "row confirmed");
            }
        }
        Key::Esc => {
            app.table.escape();
            app.nav.mode = Mode::TabFocus;
            info!("table released");
        }
        _ => {}
    }
}

/// WizardActive: every key goes to the wizard. The mode never changes,
/// even after the wizard finishes.
fn update_wizard(app: &mut App, key: Key) {
    match app.wizard.handle_key(&key) {
        Ok(Some(WizardEvent::Committed { index })) => info!(index, "question answered"),
        Ok(Some(WizardEvent::Finished)) => info!("questionnaire complete"),
        Ok(None) => {}
        Err(e) => error!(error = %e, key = %key, "wizard rejected key"),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::dataset::pokedex_columns;
    use crate::types::Dataset;
    use crate::wizard::Question;

    fn app() -> App {
        let data = Dataset::from_raw(
            pokedex_columns(),
            [["1", "Bulbasaur", "Grass", "Poison"], ["2", "Ivysaur", "Grass", "Poison"]],
        );
        App::new(
            vec![Question::short("Name?"), Question::long("Quest?")],
            Arc::new(data),
        )
    }

    fn press(app: &mut App, keys: &[&str]) {
        for name in keys {
            let key = Key::parse(name).expect("known key");
            assert_eq!(handle_key(app, key), Transition::Continue, "key {name}");
        }
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, Key::Char(c));
        }
    }

    // -- TabFocus --

    #[test]
    fn tab_cycles_panes_without_changing_mode() {
        let mut app = app();
        press(&mut app, &["tab"]);
        assert_eq!(app.nav.active_tab, Pane::Table);
        press(&mut app, &["tab"]);
        assert_eq!(app.nav.active_tab, Pane::Wizard);
        assert_eq!(app.nav.mode, Mode::TabFocus);
    }

    #[test]
    fn shift_tab_cycles_backwards() {
        let mut app = app();
        press(&mut app, &["shift+tab"]);
        assert_eq!(app.nav.active_tab, Pane::Table);
    }

    #[test]
    fn enter_on_table_pane_activates_table() {
        let mut app = app();
        press(&mut app, &["tab", "enter"]);
        assert_eq!(app.nav.mode, Mode::TableActive);
        assert!(app.table.is_focused());
        assert_eq!(app.table.highlighted(), Some(0));
    }

    #[test]
    fn enter_on_wizard_pane_activates_wizard() {
        let mut app = app();
        press(&mut app, &["enter"]);
        assert_eq!(app.nav.mode, Mode::WizardActive);
        assert_eq!(app.wizard.cursor(), 0);
    }

    #[test]
    fn other_keys_are_noops_in_tab_focus() {
        let mut app = app();
        press(&mut app, &["down", "x", "esc"]);
        assert_eq!(app.nav.mode, Mode::TabFocus);
        assert_eq!(app.nav.active_tab, Pane::Wizard);
        assert_eq!(app.table.highlighted(), None);
    }

    // -- TableActive --

    #[test]
    fn table_scenario_clamps_at_last_row() {
        let mut app = app();
        assert_eq!(app.table.highlighted(), None);
        press(&mut app, &["tab", "enter", "down", "down"]);
        assert_eq!(app.table.highlighted(), Some(1));
    }

    #[test]
    fn vim_keys_move_the_table_cursor() {
        let mut app = app();
        press(&mut app, &["tab", "enter", "j"]);
        assert_eq!(app.table.highlighted(), Some(1));
        press(&mut app, &["k", "k"]);
        assert_eq!(app.table.highlighted(), Some(0));
    }

    #[test]
    fn enter_in_table_locks_and_stays() {
        let mut app = app();
        press(&mut app, &["tab", "enter", "down", "enter"]);
        assert_eq!(app.nav.mode, Mode::TableActive);
        assert_eq!(app.table.locked(), Some(1));
        press(&mut app, &["up", "enter"]);
        assert_eq!(app.table.locked(), Some(0));
    }

    #[test]
    fn esc_in_table_returns_to_tab_focus() {
        let mut app = app();
        press(&mut app, &["tab", "enter", "down", "enter", "esc"]);
        assert_eq!(app.nav.mode, Mode::TabFocus);
        assert_eq!(app.nav.active_tab, Pane::Table);
        assert_eq!(app.table.highlighted(), None);
        assert_eq!(app.table.locked(), None);
    }

    #[test]
    fn tab_is_ignored_inside_table() {
        let mut app = app();
        press(&mut app, &["tab", "enter", "tab"]);
        assert_eq!(app.nav.mode, Mode::TableActive);
        assert_eq!(app.nav.active_tab, Pane::Table);
    }

    // -- WizardActive --

    #[test]
    fn wizard_receives_all_keys_including_tab_and_esc() {
        let mut app = app();
        press(&mut app, &["enter"]);
        type_str(&mut app, "q");
        press(&mut app, &["tab", "esc"]);
        assert_eq!(app.nav.mode, Mode::WizardActive);
        assert_eq!(app.wizard.current_question().unwrap().field().value(), "q");
    }

    #[test]
    fn wizard_stays_active_after_finishing() {
        let mut app = app();
        press(&mut app, &["enter"]);
        type_str(&mut app, "Arthur");
        press(&mut app, &["enter"]);
        type_str(&mut app, "Grail");
        press(&mut app, &["enter"]);

        assert!(app.wizard.is_finished());
        press(&mut app, &["esc", "tab", "enter", "x"]);
        assert!(app.wizard.is_finished());
        assert_eq!(app.nav.mode, Mode::WizardActive);
        assert_eq!(app.wizard.summary(), "Name?: Arthur\nQuest?: Grail\n");
    }

    // -- Quit --

    #[test]
    fn quit_is_recognised_in_every_mode() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, Key::CtrlC), Transition::Quit);

        press(&mut app, &["tab", "enter"]);
        assert_eq!(handle_key(&mut app, Key::CtrlC), Transition::Quit);

        let mut app = self::app();
        press(&mut app, &["enter"]);
        assert_eq!(handle_key(&mut app, Key::CtrlC), Transition::Quit);
    }

    #[test]
    fn quit_is_never_delegated_to_the_wizard() {
        let mut app = app();
        press(&mut app, &["enter"]);
        type_str(&mut app, "ab");
        handle_key(&mut app, Key::CtrlC);
        assert_eq!(app.wizard.current_question().unwrap().field().value(), "ab");
    }

    // -- Resize --

    #[test]
    fn resize_records_viewport_only() {
        let mut app = app();
        let result = update(&mut app, AppEvent::Resize { width: 120, height: 40 });
        assert_eq!(result, Transition::Continue);
        assert_eq!(app.viewport, Some((120, 40)));
        assert_eq!(app.nav.mode, Mode::TabFocus);
    }
}
