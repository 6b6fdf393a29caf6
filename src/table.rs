//! Keyboard-navigable table over a shared, read-only dataset.
//!
//! Two row markers are tracked: the *highlighted* row (the cursor) and the
//! *locked* row (the confirmed selection). Styling is a pure function of
//! this state, recomputed every frame by [`style_for`].

use std::sync::Arc;

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{self, Block, BorderType, HighlightSpacing, Table, TableState};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme;
use crate::types::{ColumnKind, Dataset, Row};

/// Row coordinate for styling: the header or a data row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPos {
    Header,
    Data(usize),
}

#[derive(Debug, Clone)]
pub struct SelectableTable {
    dataset: Arc<Dataset>,
    highlighted: Option<usize>,
    locked: Option<usize>,
    focused: bool,
}

impl SelectableTable {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            highlighted: None,
            locked: None,
            focused: false,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn locked(&self) -> Option<usize> {
        self.locked
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Take keyboard input. The cursor starts on the first row.
    pub fn focus(&mut self) {
        self.focused = true;
        if self.highlighted.is_none() && !self.dataset.is_empty() {
            self.highlighted = Some(0);
        }
    }

    pub fn move_up(&mut self) {
        if self.dataset.is_empty() {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn move_down(&mut self) {
        let count = self.dataset.row_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1).min(count - 1)));
    }

    /// Lock the highlighted row as the selection. Returns the locked index.
    pub fn confirm(&mut self) -> Option<usize> {
        let index = self.highlighted?;
        self.locked = Some(index);
        debug!(row = index, "row locked");
        Some(index)
    }

    /// Drop the cursor, the lock and focus.
    pub fn escape(&mut self) {
        if self.highlighted.is_some() || self.locked.is_some() || self.focused {
            debug!("table selection cleared");
        }
        self.highlighted = None;
        self.locked = None;
        self.focused = false;
    }

    /// The locked row, if any.
    pub fn selection(&self) -> Option<&Row> {
        self.locked.and_then(|i| self.dataset.rows().get(i))
    }

    /// Build the widget. `active` picks the border accent.
    pub fn widget(&self, active: bool) -> Table<'static> {
        let columns = self.dataset.columns();

        let header = widgets::Row::new(columns.iter().enumerate().map(|(col, c)| {
            widgets::Cell::from(c.name.to_uppercase()).style(style_for(self, RowPos::Header, col))
        }));

        let rows = self.dataset.rows().iter().enumerate().map(|(i, row)| {
            widgets::Row::new(row.iter().enumerate().map(move |(col, cell)| {
                widgets::Cell::from(cell.to_string()).style(style_for(self, RowPos::Data(i), col))
            }))
        });

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::new().fg(theme::border_color(active)))
            .title(Line::from(" Pokédex ").style(theme::STYLE_IMPORTANT));

        Table::new(rows.collect::<Vec<_>>(), self.column_widths())
            .header(header)
            .block(block)
            .column_spacing(2)
            .highlight_symbol(theme::HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
    }

    /// Viewport state for this frame; scrolling follows the cursor.
    pub fn state(&self) -> TableState {
        TableState::default().with_selected(self.highlighted)
    }

    fn column_widths(&self) -> Vec<Constraint> {
        self.dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(col, c)| {
                let widest = self
                    .dataset
                    .rows()
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.to_string().width())
                    .max()
                    .unwrap_or(0);
                Constraint::Length(widest.max(c.name.width()) as u16)
            })
            .collect()
    }
}

/// Style of one cell.
///
/// Precedence: locked row > header > category color > row parity.
/// Rows are counted from 1 below the header; even rows get the dimmed
/// category color and the darker gray.
pub fn style_for(table: &SelectableTable, row: RowPos, col: usize) -> Style {
    let index = match row {
        RowPos::Header => return theme::STYLE_HEADER,
        RowPos::Data(i) => i,
    };

    if table.locked == Some(index) {
        return theme::STYLE_SELECTED;
    }

    let even = (index + 1) % 2 == 0;

    if table.dataset.column_kind(col) == Some(ColumnKind::Categorical) {
        let color = table
            .dataset
            .cell(index, col)
            .and_then(|cell| cell.category())
            .and_then(|category| theme::category_color(category, even));
        if let Some(color) = color {
            return Style::new().fg(color);
        }
    }

    if even { theme::STYLE_ROW_EVEN } else { theme::STYLE_ROW_ODD }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{pokedex, pokedex_columns};
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn two_rows() -> SelectableTable {
        let data = Dataset::from_raw(
            pokedex_columns(),
            [["1", "Bulbasaur", "Grass", "Poison"], ["2", "Ivysaur", "Grass", "Poison"]],
        );
        SelectableTable::new(Arc::new(data))
    }

    fn empty() -> SelectableTable {
        SelectableTable::new(Arc::new(Dataset::from_raw(
            pokedex_columns(),
            Vec::<Vec<&str>>::new(),
        )))
    }

    #[test]
    fn starts_without_highlight_or_lock() {
        let table = two_rows();
        assert_eq!(table.highlighted(), None);
        assert_eq!(table.locked(), None);
        assert!(!table.is_focused());
    }

    #[test]
    fn focus_highlights_first_row() {
        let mut table = two_rows();
        table.focus();
        assert!(table.is_focused());
        assert_eq!(table.highlighted(), Some(0));
    }

    #[test]
    fn move_down_clamps_at_last_row() {
        let mut table = SelectableTable::new(Arc::new(pokedex()));
        table.focus();
        for _ in 0..100 {
            table.move_down();
        }
        assert_eq!(table.highlighted(), Some(27));
    }

    #[test]
    fn move_up_stays_at_zero() {
        let mut table = two_rows();
        table.focus();
        for _ in 0..5 {
            table.move_up();
        }
        assert_eq!(table.highlighted(), Some(0));
    }

    #[test]
    fn movement_from_none_lands_on_first_row() {
        let mut table = two_rows();
        table.move_down();
        assert_eq!(table.highlighted(), Some(0));

        let mut table = two_rows();
        table.move_up();
        assert_eq!(table.highlighted(), Some(0));
    }

    #[test]
    fn empty_dataset_is_inert() {
        let mut table = empty();
        table.focus();
        table.move_down();
        table.move_up();
        assert_eq!(table.confirm(), None);
        assert_eq!(table.highlighted(), None);
        assert_eq!(table.locked(), None);
    }

    #[test]
    fn confirm_locks_and_moves_the_lock() {
        let mut table = two_rows();
        table.focus();
        assert_eq!(table.confirm(), Some(0));
        table.move_down();
        assert_eq!(table.locked(), Some(0));
        assert_eq!(table.confirm(), Some(1));
        assert_eq!(table.locked(), Some(1));
        assert_eq!(table.selection().map(|r| r[1].to_string()), Some("Ivysaur".into()));
    }

    #[test]
    fn escape_is_idempotent() {
        let mut table = two_rows();
        table.focus();
        table.move_down();
        table.confirm();

        table.escape();
        let once = (table.highlighted(), table.locked(), table.is_focused());
        table.escape();
        let twice = (table.highlighted(), table.locked(), table.is_focused());

        assert_eq!(once, (None, None, false));
        assert_eq!(once, twice);
    }

    #[test]
    fn header_is_bold_header_style() {
        let table = two_rows();
        assert_eq!(style_for(&table, RowPos::Header, 2), theme::STYLE_HEADER);
    }

    #[test]
    fn category_columns_use_category_colors() {
        let table = two_rows();
        let bright = theme::category_color("Grass", false).map(|c| Style::new().fg(c));
        let dimmed = theme::category_color("Grass", true).map(|c| Style::new().fg(c));
        // Bulbasaur is the first row under the header and stays bright.
        assert_eq!(Some(style_for(&table, RowPos::Data(0), 2)), bright);
        assert_eq!(Some(style_for(&table, RowPos::Data(1), 2)), dimmed);
    }

    #[test]
    fn plain_columns_alternate_by_parity() {
        let table = two_rows();
        assert_eq!(style_for(&table, RowPos::Data(0), 1), theme::STYLE_ROW_ODD);
        assert_eq!(style_for(&table, RowPos::Data(1), 1), theme::STYLE_ROW_EVEN);
    }

    #[test]
    fn empty_category_falls_back_to_parity() {
        let table = SelectableTable::new(Arc::new(pokedex()));
        // Charmander (fourth row) has no second type.
        assert_eq!(style_for(&table, RowPos::Data(3), 3), theme::STYLE_ROW_EVEN);
        // Bulbasaur has one.
        assert_ne!(style_for(&table, RowPos::Data(0), 3), theme::STYLE_ROW_ODD);
    }

    #[test]
    fn locked_row_beats_dimmed_category() {
        let mut table = two_rows();
        table.focus();
        table.move_down();
        table.confirm();
        for col in 0..4 {
            assert_eq!(style_for(&table, RowPos::Data(1), col), theme::STYLE_SELECTED);
        }
        assert_ne!(style_for(&table, RowPos::Data(0), 2), theme::STYLE_SELECTED);
    }

    #[test]
    fn locked_row_renders_with_selected_colors() {
        let mut table = two_rows();
        table.focus();
        table.confirm();

        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_stateful_widget(table.widget(true), area, &mut table.state());
            })
            .expect("render should not panic");

        let buffer = terminal.backend().buffer();
        // Row 0 sits below the top border and the header.
        let row_y = 2;
        let grass = (0..buffer.area.width)
            .map(|x| &buffer[(x, row_y)])
            .find(|cell| cell.symbol() == "G")
            .expect("Grass cell rendered");
        assert_eq!(grass.fg, Color::Rgb(0x01, 0xBE, 0x85));
        assert_eq!(grass.bg, Color::Rgb(0x00, 0x43, 0x2F));
    }

    #[test]
    fn border_uses_active_accent_when_focused_pane() {
        let table = two_rows();
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_stateful_widget(table.widget(true), frame.area(), &mut table.state());
            })
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, theme::ACCENT_ACTIVE);

        terminal
            .draw(|frame| {
                frame.render_stateful_widget(table.widget(false), frame.area(), &mut table.state());
            })
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].fg, theme::ACCENT_NEUTRAL);
    }

    #[test]
    fn zero_sized_area_renders_nothing() {
        let table = two_rows();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|frame| {
                let area = ratatui::layout::Rect::new(0, 0, 0, 0);
                frame.render_stateful_widget(table.widget(false), area, &mut table.state());
            })
            .expect("zero-sized render should not panic");
    }
}
