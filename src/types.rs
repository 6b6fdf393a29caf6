//! Domain types for quest-table.
//!
//! The dataset is a column schema plus rows of typed cells. It is built
//! once and shared read-only for the whole session.

use std::fmt;

use serde::Serialize;

// ============================================================================
// CELLS
// ============================================================================

/// A typed table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(i64),
    Text(String),
    Empty,
}

impl Cell {
    /// Parse raw text according to the column it belongs to.
    ///
    /// Numeric columns fall back to text when the value does not parse.
    pub fn parse(raw: &str, kind: ColumnKind) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }
        match kind {
            ColumnKind::Numeric => raw
                .parse()
                .map(Cell::Number)
                .unwrap_or_else(|_| Cell::Text(raw.to_string())),
            ColumnKind::Text | ColumnKind::Categorical => Cell::Text(raw.to_string()),
        }
    }

    /// Category key for categorical coloring. Empty cells have none.
    pub fn category(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) | Cell::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Empty => Ok(()),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// How a column's values are interpreted and styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
    /// Values name a category; each category gets its own color.
    Categorical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

pub type Row = Vec<Cell>;

// ============================================================================
// DATASET
// ============================================================================

/// Fixed tabular data: a schema and rows matching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from raw string rows, typing each cell by its column.
    ///
    /// Short rows are padded with empty cells; extra values are dropped.
    pub fn from_raw<R, S>(columns: Vec<Column>, raw_rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = raw_rows
            .into_iter()
            .map(|raw| {
                let mut values = raw.into_iter();
                columns
                    .iter()
                    .map(|col| {
                        values
                            .next()
                            .map(|v| Cell::parse(v.as_ref(), col.kind))
                            .unwrap_or(Cell::Empty)
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    pub fn column_kind(&self, col: usize) -> Option<ColumnKind> {
        self.columns.get(col).map(|c| c.kind)
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for the session report printed after the TUI exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// What the user produced during a session: answers and the locked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub finished: bool,
    pub answers: Vec<AnswerRecord>,
    pub selection: Option<SelectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub prompt: String,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRecord {
    pub index: usize,
    pub columns: Vec<String>,
    pub cells: Vec<Cell>,
}

// ============================================================================
// TESTS
// ============================================================================
