use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event as ct;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use treepad::app::Workbench;
use treepad::kernel::services::adapters::{ensure_settings_file, load_settings};
use treepad::tui::crossterm::into_input_event;
use treepad::tui::terminal_guard::{install_panic_restore, TerminalGuard, TerminationSignal};
use treepad::tui::view::View;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const USAGE: &str = "\
Usage: treepad [--version] [--help]

A terminal mock IDE over an in-memory file tree.

Keys:
  Ctrl+B  toggle sidebar      Ctrl+S  save
  Ctrl+W  close file          Ctrl+Q  quit
  Tab     focus editor        Esc     focus explorer
  n / N   new file / folder   r / d   rename / delete
  m       context menu        Alt+Left/Right  resize sidebar";

fn main() -> io::Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" => {
                println!("treepad {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => {
                eprintln!("treepad: unexpected argument '{other}'\n\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let settings = load_settings();

    let mut workbench = Workbench::new(&settings);
    workbench.theme_mut().adapt_to_terminal_capabilities();

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    forward_termination_signals(&guard, signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = run(&mut terminal, &mut workbench, &signal_rx);

    workbench.teardown();
    let _ = terminal.show_cursor();
    drop(guard);

    let exit_code = match &result {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "exiting on signal");
            Some(signal.exit_code())
        }
        Ok(None) => {
            tracing::info!("exiting");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "event loop failed");
            None
        }
    };

    // Flushes the log writer; `process::exit` skips destructors.
    drop(logging);
    if let Some(code) = exit_code {
        std::process::exit(code);
    }
    result.map(|_| ())
}

#[cfg(unix)]
fn forward_termination_signals(guard: &TerminalGuard, tx: mpsc::Sender<TerminationSignal>) {
    use treepad::tui::terminal_guard::install_termination_signals;

    if let Err(e) = install_termination_signals(guard.restorer(), tx) {
        tracing::warn!(error = %e, "cannot install signal handlers");
    }
}

#[cfg(not(unix))]
fn forward_termination_signals(_guard: &TerminalGuard, _tx: mpsc::Sender<TerminationSignal>) {}

/// Runs until the workbench asks to quit or a termination signal arrives.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;

    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some(pos) = workbench.cursor_position() {
                    frame.set_cursor_position(pos);
                }
            })?;
            dirty = false;
        }

        if ct::poll(POLL_INTERVAL)? {
            if let Some(event) = into_input_event(ct::read()?) {
                if workbench.handle_input(&event).is_quit() {
                    return Ok(None);
                }
                // Resizes and ignored events may still change layout-derived state.
                dirty = true;
            }
        }

        // Timers advance even while input keeps arriving.
        dirty |= workbench.tick(Instant::now());
    }
}
