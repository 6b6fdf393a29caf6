//! quest-table CLI
//!
//! Answer a short questionnaire and pick a row from the Pokédex table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use quest_table::error::warn_non_fatal;
use quest_table::logging;
use quest_table::report::{format_report, session_report};
use quest_table::tui::{self, App};
use quest_table::types::OutputFormat;

#[derive(Parser)]
#[command(name = "quest-table")]
#[command(about = "Terminal questionnaire wizard with a navigable data table")]
#[command(version)]
struct Cli {
    /// Write a debug log to this file
    #[arg(long, env = "QUEST_TABLE_DEBUG_LOG")]
    debug_log: Option<PathBuf>,

    /// Log at DEBUG level instead of INFO
    #[arg(short, long)]
    verbose: bool,

    /// Print the session report to stdout after exiting
    #[arg(long, value_enum)]
    report: Option<OutputFormatArg>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> quest_table::Result<()> {
    // A broken log path only costs the log.
    let _guard = warn_non_fatal(logging::init(cli.debug_log.as_deref(), cli.verbose))?.flatten();
    info!(version = env!("CARGO_PKG_VERSION"), "quest-table starting");

    let app = tui::run(App::default())?;
    info!(finished = app.wizard.is_finished(), "session ended");

    if let Some(format) = cli.report {
        let report = session_report(&app);
        if let Some(out) = warn_non_fatal(format_report(&report, format.into()))? {
            print!("{}", out);
        }
    }

    Ok(())
}
