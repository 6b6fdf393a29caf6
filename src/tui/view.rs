//! Pure rendering: map App state to ratatui widget trees.
//!
//! The screen is a title bar, two side-by-side panes and a help line.
//! The wizard pane takes the left third, the table the remaining two
//! thirds. Border accents follow the navigator's active tab.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

use crate::wizard::{DONE_LABEL, EXIT_HINT, Question, Wizard};

use super::state::{App, Mode, Pane};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    if app.viewport.is_none() {
        frame.render_widget(Paragraph::new("loading..."), area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // panes
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app), chunks[0]);
    frame.render_widget(render_help(app), chunks[2]);

    let panes = Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(chunks[1]);

    render_wizard_pane(app, frame, panes[0]);
    render_table_pane(app, frame, panes[1]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar: app name, active pane, and the locked row if any.
fn render_title(app: &App) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled("quest-table", theme::STYLE_TITLE),
        Span::styled(format!("  [{}]", app.nav.active_tab.label()), theme::STYLE_DIM),
    ];

    if let Some(row) = app.table.selection() {
        let label = row
            .iter()
            .take(2)
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        spans.push(Span::raw("  selected: "));
        spans.push(Span::styled(label, theme::STYLE_IMPORTANT));
    }

    Paragraph::new(Line::from(spans))
}

/// Help line showing the keybindings of the current mode.
fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = match app.nav.mode {
        Mode::TabFocus => "[Tab] switch pane  [Enter] select  [^C] quit",
        Mode::TableActive => "[↑/↓ j/k] move  [Enter] confirm  [Esc] back  [^C] quit",
        Mode::WizardActive if app.wizard.is_finished() => "[^C] quit",
        Mode::WizardActive => "[Enter] submit  [Alt+Enter] new line  [^C] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn pane_block(title: &'static str, active: bool) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(theme::border_color(active)))
        .title(Line::from(format!(" {} ", title)).style(theme::STYLE_IMPORTANT))
}

// ============================================================================
// PANE: WIZARD
// ============================================================================

fn render_wizard_pane(app: &App, frame: &mut Frame, area: Rect) {
    let block = pane_block(Pane::Wizard.label(), app.nav.is_highlighted(Pane::Wizard));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.wizard.is_finished() {
        render_summary(&app.wizard, frame, inner);
        return;
    }

    match app.wizard.current_question() {
        Ok(question) => render_question(&app.wizard, question, frame, inner),
        Err(e) => {
            let text = Paragraph::new(Span::styled(e.to_string(), theme::STYLE_DIM))
                .wrap(Wrap { trim: false });
            frame.render_widget(text, inner);
        }
    }
}

fn render_question(wizard: &Wizard, question: &Question, frame: &mut Frame, area: Rect) {
    let field = question.field();
    let chunks = Layout::vertical([
        Constraint::Length(1),                             // progress
        Constraint::Length(2),                             // prompt
        Constraint::Length(field.preferred_height() + 2), // bordered field
        Constraint::Min(0),
    ])
    .split(area);

    let progress = format!(
        "Question {} of {}",
        wizard.cursor() + 1,
        wizard.questions().len()
    );
    frame.render_widget(Paragraph::new(Span::styled(progress, theme::STYLE_DIM)), chunks[0]);

    let prompt = Paragraph::new(Span::styled(question.prompt().to_string(), theme::STYLE_PROMPT))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[1]);

    let field_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(theme::ACCENT_NEUTRAL));
    let field_area = field_block.inner(chunks[2]);
    frame.render_widget(field_block, chunks[2]);
    frame.render_widget(
        Paragraph::new(field.render(field_area.width, field_area.height)),
        field_area,
    );
}

fn render_summary(wizard: &Wizard, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(DONE_LABEL, theme::STYLE_IMPORTANT),
            Span::raw(" "),
            Span::raw(EXIT_HINT),
        ]),
        Line::from(""),
    ];
    lines.extend(wizard.summary().lines().map(|l| Line::from(l.to_string())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// PANE: TABLE
// ============================================================================

fn render_table_pane(app: &App, frame: &mut Frame, area: Rect) {
    let table = app.table.widget(app.nav.is_highlighted(Pane::Table));
    let mut state = app.table.state();
    frame.render_stateful_widget(table, area, &mut state);
}

// ============================================================================
// TESTS
// ============================================================================
