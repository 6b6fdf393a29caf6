//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: data types (App, Navigator, AppEvent, Transition)
//! - `update`: the navigation state machine
//! - `view`: pure rendering
//! - `run`: effects (terminal, event source, loop)
//! - `theme`: colors and styles

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
pub use state::{App, AppEvent, Mode, Navigator, Pane, Transition};
