//! TUI state algebra.
//!
//! These types define the whole TUI state space. The transition function
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! Design principle: the navigator decides who owns the keyboard; the
//! components (wizard, table) own their own per-component state. The
//! dataset is shared read-only through an `Arc`.

use std::sync::Arc;

use crate::dataset;
use crate::key::Key;
use crate::table::SelectableTable;
use crate::types::Dataset;
use crate::wizard::{Question, Wizard};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A mapped key press.
    Key(Key),
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
}

// ============================================================================
// NAVIGATION
// ============================================================================

/// A region of the screen that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Left third: the questionnaire.
    #[default]
    Wizard,
    /// Right two thirds: the data table.
    Table,
}

impl Pane {
    /// Panes in tab order.
    pub const ALL: [Pane; 2] = [Pane::Wizard, Pane::Table];

    pub fn index(self) -> usize {
        match self {
            Pane::Wizard => 0,
            Pane::Table => 1,
        }
    }

    /// Next pane in tab order, wrapping around.
    pub fn next(self) -> Pane {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous pane in tab order, wrapping around.
    pub fn prev(self) -> Pane {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Pane::Wizard => "Questions",
            Pane::Table => "Pokédex",
        }
    }
}

/// Which component owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tab switches panes, Enter activates the active pane.
    #[default]
    TabFocus,
    /// The table owns arrows, Enter and Esc.
    TableActive,
    /// The wizard owns every key but quit.
    WizardActive,
}

/// Navigation state: mode plus the pane the tab cursor is on.
///
/// Together they name exactly one input owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    pub mode: Mode,
    pub active_tab: Pane,
}

impl Navigator {
    /// Whether `pane` should be drawn with the active accent.
    pub fn is_highlighted(&self, pane: Pane) -> bool {
        self.active_tab == pane
    }
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running and redraw.
    Continue,
    /// Quit the application.
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model. Exclusively owns all mutable session state.
#[derive(Debug)]
pub struct App {
    pub nav: Navigator,
    pub wizard: Wizard,
    pub table: SelectableTable,
    /// Last known terminal size. `None` until the first size is known.
    pub viewport: Option<(u16, u16)>,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(questions: Vec<Question>, dataset: Arc<Dataset>) -> Self {
        App {
            nav: Navigator::default(),
            wizard: Wizard::new(questions),
            table: SelectableTable::new(dataset),
            viewport: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    /// Built-in questionnaire and the Pokédex table.
    fn default() -> Self {
        App::new(Wizard::default_questions(), Arc::new(dataset::pokedex()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_in_tab_focus_on_first_pane() {
        let app = App::default();
        assert_eq!(app.nav.mode, Mode::TabFocus);
        assert_eq!(app.nav.active_tab, Pane::Wizard);
        assert!(app.viewport.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn pane_cycle_wraps_both_ways() {
        assert_eq!(Pane::Wizard.next(), Pane::Table);
        assert_eq!(Pane::Table.next(), Pane::Wizard);
        assert_eq!(Pane::Wizard.prev(), Pane::Table);
        assert_eq!(Pane::Table.prev(), Pane::Wizard);
    }

    #[test]
    fn default_app_focuses_first_question_on_the_pokedex() {
        let app = App::default();
        assert_eq!(app.table.dataset().row_count(), 28);
        assert_eq!(app.wizard.questions().len(), 3);
        assert!(app.wizard.current_question().unwrap().field().is_focused());
    }

    #[test]
    fn highlight_follows_active_tab() {
        let nav = Navigator {
            mode: Mode::TabFocus,
            active_tab: Pane::Table,
        };
        assert!(nav.is_highlighted(Pane::Table));
        assert!(!nav.is_highlighted(Pane::Wizard));
    }

    #[test]
    fn table_shares_the_dataset_it_was_given() {
        let data = Arc::new(dataset::pokedex());
        let app = App::new(Vec::new(), Arc::clone(&data));
        assert_eq!(Arc::strong_count(&data), 2);
        assert_eq!(app.table.dataset(), &*data);
        assert!(app.wizard.is_finished());
    }
}
