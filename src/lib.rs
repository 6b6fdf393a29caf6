//! quest-table: a terminal questionnaire wizard next to a keyboard-navigable,
//! color-coded data table.

pub mod dataset;
pub mod error;
pub mod input;
pub mod key;
pub mod logging;
pub mod report;
pub mod table;
pub mod tui;
pub mod types;
pub mod wizard;

pub use error::{Error, Result};
