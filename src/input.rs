//! Answer-capture widgets.
//!
//! [`InputField`] is the single contract the wizard drives. Two
//! implementations exist: [`SingleLineField`] for short answers and
//! [`MultiLineField`] for free text. Both share the cursor-aware
//! [`TextBuffer`] and render into a ratatui [`Text`] block sized by the
//! caller.

use std::fmt;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::key::Key;

/// Placeholder shown by an empty field.
pub const DEFAULT_PLACEHOLDER: &str = "Type your answer here";

const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
const STYLE_PLACEHOLDER: Style = Style::new().add_modifier(Modifier::DIM);

// ============================================================================
// CONTRACT
// ============================================================================

/// Side effect a field asks its owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEffect {
    /// Commit the current value and move focus on.
    Submit,
}

/// Uniform contract over heterogeneous answer-capture widgets.
pub trait InputField: fmt::Debug {
    /// Consume one key. Unfocused fields and unknown keys are no-ops.
    fn capture(&mut self, key: &Key) -> Option<FieldEffect>;

    /// Current text.
    fn value(&self) -> &str;

    /// Lay the field out into a `width` x `height` block.
    ///
    /// A zero-sized request yields an empty block.
    fn render(&self, width: u16, height: u16) -> Text<'static>;

    /// Drop all text and reset the cursor.
    fn clear(&mut self);

    fn set_focus(&mut self, focused: bool);

    fn is_focused(&self) -> bool;

    /// Rows this field wants when laid out.
    fn preferred_height(&self) -> u16;

    fn blur(&mut self) {
        self.set_focus(false);
    }
}

// ============================================================================
// TEXT BUFFER
// ============================================================================

/// Text plus a byte-offset cursor that always sits on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if let Some(c) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Start of the current line.
    pub fn home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// End of the current line.
    pub fn end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Same column on the previous line, clamped to its length.
    pub fn up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_end = start - 1;
        let prev_start = self.line_start(prev_end);
        self.cursor = self.advance(prev_start, column, prev_end);
    }

    /// Same column on the next line, clamped to its length.
    pub fn down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = self.advance(next_start, column, next_end);
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    fn advance(&self, from: usize, chars: usize, limit: usize) -> usize {
        self.text[from..limit]
            .char_indices()
            .nth(chars)
            .map(|(i, _)| from + i)
            .unwrap_or(limit)
    }

    /// Display width of the text before the cursor on its line.
    pub fn visual_column(&self) -> usize {
        self.text[self.line_start(self.cursor)..self.cursor].width()
    }
}

// ============================================================================
// SINGLE LINE
// ============================================================================

/// One-line answer. Newline input is never stored; it requests a submit.
#[derive(Debug, Clone)]
pub struct SingleLineField {
    buffer: TextBuffer,
    focused: bool,
}

impl SingleLineField {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            focused: false,
        }
    }
}

impl Default for SingleLineField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField for SingleLineField {
    fn capture(&mut self, key: &Key) -> Option<FieldEffect> {
        if !self.focused {
            return None;
        }
        match key {
            Key::Newline => return Some(FieldEffect::Submit),
            Key::Char(c) if !c.is_control() => self.buffer.insert(*c),
            Key::Backspace => self.buffer.backspace(),
            Key::Delete => self.buffer.delete(),
            Key::Left => self.buffer.left(),
            Key::Right => self.buffer.right(),
            Key::Home => self.buffer.home(),
            Key::End => self.buffer.end(),
            _ => {}
        }
        None
    }

    fn value(&self) -> &str {
        self.buffer.as_str()
    }

    fn render(&self, width: u16, height: u16) -> Text<'static> {
        if width == 0 || height == 0 {
            return Text::default();
        }
        if self.buffer.is_empty() {
            return Text::from(placeholder_line(DEFAULT_PLACEHOLDER, self.focused));
        }

        // Scroll horizontally so the cursor cell stays inside the block.
        let width = usize::from(width);
        let overflow = (self.buffer.visual_column() + 1).saturating_sub(width);
        let text = self.buffer.as_str();
        let mut skipped = 0;
        let mut start = 0;
        for (idx, ch) in text.char_indices() {
            if skipped >= overflow {
                start = idx;
                break;
            }
            skipped += ch.width().unwrap_or(0);
            start = idx + ch.len_utf8();
        }

        let cursor = self.focused.then(|| self.buffer.cursor() - start);
        let (mut lines, _) = layout_lines(&text[start..], cursor, usize::MAX);
        Text::from(lines.swap_remove(0))
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn preferred_height(&self) -> u16 {
        1
    }
}

// ============================================================================
// MULTI LINE
// ============================================================================

/// Free-text answer. Newline input is stored literally.
#[derive(Debug, Clone)]
pub struct MultiLineField {
    buffer: TextBuffer,
    focused: bool,
}

impl MultiLineField {
    /// Default visible rows.
    pub const DEFAULT_ROWS: u16 = 6;

    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            focused: false,
        }
    }
}

impl Default for MultiLineField {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField for MultiLineField {
    fn capture(&mut self, key: &Key) -> Option<FieldEffect> {
        if !self.focused {
            return None;
        }
        match key {
            Key::Newline => self.buffer.insert('\n'),
            Key::Char(c) if !c.is_control() => self.buffer.insert(*c),
            Key::Backspace => self.buffer.backspace(),
            Key::Delete => self.buffer.delete(),
            Key::Left => self.buffer.left(),
            Key::Right => self.buffer.right(),
            Key::Up => self.buffer.up(),
            Key::Down => self.buffer.down(),
            Key::Home => self.buffer.home(),
            Key::End => self.buffer.end(),
            _ => {}
        }
        None
    }

    fn value(&self) -> &str {
        self.buffer.as_str()
    }

    fn render(&self, width: u16, height: u16) -> Text<'static> {
        if width == 0 || height == 0 {
            return Text::default();
        }
        if self.buffer.is_empty() {
            return Text::from(placeholder_line(DEFAULT_PLACEHOLDER, self.focused));
        }

        let cursor = self.focused.then(|| self.buffer.cursor());
        let (lines, cursor_line) = layout_lines(self.buffer.as_str(), cursor, usize::from(width));

        // Keep the cursor line inside the visible window.
        let height = usize::from(height);
        let end = (cursor_line + 1).max(height).min(lines.len());
        let start = end.saturating_sub(height);
        Text::from(lines[start..end].to_vec())
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn preferred_height(&self) -> u16 {
        Self::DEFAULT_ROWS
    }
}

// ============================================================================
// LAYOUT HELPERS
// ============================================================================

fn placeholder_line(placeholder: &str, focused: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(2);
    if focused {
        spans.push(Span::styled(" ", STYLE_CURSOR));
    }
    spans.push(Span::styled(placeholder.to_string(), STYLE_PLACEHOLDER));
    Line::from(spans)
}

fn flush(plain: &mut String, spans: &mut Vec<Span<'static>>) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}

/// Break `text` into display lines no wider than `width`, marking the
/// cursor cell. Returns the lines and the index of the line holding the
/// cursor.
fn layout_lines(text: &str, cursor: Option<usize>, width: usize) -> (Vec<Line<'static>>, usize) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut plain = String::new();
    let mut line_width = 0;
    let mut cursor_line = 0;

    for (idx, ch) in text.char_indices() {
        let at_cursor = cursor == Some(idx);

        if ch == '\n' {
            if at_cursor {
                flush(&mut plain, &mut spans);
                spans.push(Span::styled(" ", STYLE_CURSOR));
                cursor_line = lines.len();
            }
            flush(&mut plain, &mut spans);
            lines.push(Line::from(std::mem::take(&mut spans)));
            line_width = 0;
            continue;
        }

        let ch_width = ch.width().unwrap_or(0);
        if line_width > 0 && line_width + ch_width > width {
            flush(&mut plain, &mut spans);
            lines.push(Line::from(std::mem::take(&mut spans)));
            line_width = 0;
        }

        if at_cursor {
            flush(&mut plain, &mut spans);
            spans.push(Span::styled(ch.to_string(), STYLE_CURSOR));
            cursor_line = lines.len();
        } else {
            plain.push(ch);
        }
        line_width += ch_width;
    }

    if cursor == Some(text.len()) {
        if line_width > 0 && line_width + 1 > width {
            flush(&mut plain, &mut spans);
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
        flush(&mut plain, &mut spans);
        spans.push(Span::styled(" ", STYLE_CURSOR));
        cursor_line = lines.len();
    }

    flush(&mut plain, &mut spans);
    lines.push(Line::from(spans));
    (lines, cursor_line)
}

// ============================================================================
// TESTS
// ============================================================================
