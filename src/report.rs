//! Session report printed after the TUI exits.
//!
//! Pure functions: (App) → SessionReport, (SessionReport, OutputFormat) →
//! String. Nothing is written to disk.

use crate::error::Result;
use crate::tui::App;
use crate::types::{AnswerRecord, OutputFormat, SelectionRecord, SessionReport};

/// Snapshot the answers and the locked row.
pub fn session_report(app: &App) -> SessionReport {
    let answers = app
        .wizard
        .answers()
        .map(|(prompt, answer)| AnswerRecord {
            prompt: prompt.to_string(),
            answer: answer.map(str::to_string),
        })
        .collect();

    let selection = app.table.locked().zip(app.table.selection()).map(|(index, row)| {
        SelectionRecord {
            index,
            columns: app
                .table
                .dataset()
                .columns()
                .iter()
                .map(|c| c.name.clone())
                .collect(),
            cells: row.clone(),
        }
    });

    SessionReport {
        finished: app.wizard.is_finished(),
        answers,
        selection,
    }
}

/// Format a session report for output.
pub fn format_report(report: &SessionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &SessionReport) -> String {
    let mut out = String::new();

    out.push_str("=== Answers ===\n");
    for record in &report.answers {
        match &record.answer {
            Some(answer) => {
                let mut lines = answer.lines();
                out.push_str(&format!(
                    "{}: {}\n",
                    record.prompt,
                    lines.next().unwrap_or_default()
                ));
                for line in lines {
                    out.push_str(&format!("  {}\n", line));
                }
            }
            None => out.push_str(&format!("{}: (no answer)\n", record.prompt)),
        }
    }
    if !report.finished {
        out.push_str("(questionnaire not finished)\n");
    }
    out.push('\n');

    out.push_str("=== Selection ===\n");
    match &report.selection {
        Some(selection) => {
            for (column, cell) in selection.columns.iter().zip(&selection.cells) {
                out.push_str(&format!("{}: {}\n", column, cell));
            }
        }
        None => out.push_str("(no row selected)\n"),
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
