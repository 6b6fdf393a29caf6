//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! A reader thread forwards crossterm events over an mpsc channel. The
//! loop takes one event at a time, applies it, and redraws before taking
//! the next, so events are handled strictly in arrival order.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::key::Key;

use super::state::{App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a [`Key`].
///
/// Returns None for releases, repeats of non-press kinds, and keys with no
/// meaning to the app.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Key::CtrlC),
        KeyCode::Char('j') if ctrl => Some(Key::Newline),
        KeyCode::Enter if alt => Some(Key::Newline),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Map any crossterm event to an [`AppEvent`]. Unmapped events are dropped.
pub fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key(key).map(AppEvent::Key),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT SOURCE
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards mapped ones.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(raw) => {
                    let Some(event) = map_event(raw) else {
                        continue;
                    };
                    if tx.send(event).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Err(e) => {
                    warn!(error = %e, "event source failed");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the quit key, then hand the final state back.
///
/// Terminal failures are fatal and propagate; the terminal is restored
/// either way.
pub fn run(mut app: App) -> Result<App> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!("terminal ready");

    let outcome = event_loop(&mut terminal, &mut app);
    settle(outcome, restore_terminal())?;

    info!("terminal restored");
    Ok(app)
}

/// Combine the loop outcome with the restore result.
///
/// A loop error wins; a restore failure behind it is only logged.
fn settle(outcome: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (outcome, restored) {
        (Err(e), Err(restore)) => {
            warn!(error = %restore, "terminal restore failed after loop error");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => Ok(restored?),
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.viewport = Some((size.width, size.height));

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx);

    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on the next event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // event source gone
        };
        debug!(?event, "event");

        if update(app, event) == Transition::Quit {
            app.should_quit = true;
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
