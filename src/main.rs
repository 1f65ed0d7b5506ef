use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use clipstash::app::App;
use clipstash::clipboard::Clipboard;
use clipstash::config::{self, Config};
use clipstash::error::{ClipstashError, StartupError};
use clipstash::history::{ClipboardEntry, HistoryStore, IndexError, InsertOutcome};
use clipstash::monitor::Monitor;

/// Width of the one-line summaries printed by `list` and after a copy.
const SUMMARY_WIDTH: usize = 80;

/// Clipboard history daemon and picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Record clipboard history in the background and pick old entries back"
)]
struct Args {
    /// History file (default: ~/.clipboard_history)
    #[arg(long, global = true, value_name = "PATH")]
    history_file: Option<PathBuf>,

    /// Number of entries to keep (at least 1)
    #[arg(long, global = true, value_name = "N", value_parser = parse_max_entries)]
    max_entries: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Watch the clipboard and record every new value until interrupted
    Monitor,
    /// Browse and search the history interactively (default)
    Show,
    /// Print the history, newest first
    List {
        /// Print full entries as a JSON array of strings
        #[arg(long)]
        json: bool,
    },
    /// Copy entry N (1-based, as shown by `list`) back to the clipboard
    Select { number: usize },
    /// Print entry N in full
    Preview { number: usize },
    /// Record the current clipboard value once
    Add,
    /// Delete every entry
    Clear,
}

fn parse_max_entries(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Show);

    init_logging(command);
    color_eyre::install()?;

    let config_result = config::load_config();
    let config = config_result
        .config
        .with_overrides(args.history_file, args.max_entries);

    // The viewer shows the warning as a notification instead
    if command != Command::Show
        && let Some(warning) = &config_result.warning
    {
        log::warn!("{}", warning);
    }

    match command {
        Command::Monitor => run_monitor(&config),
        Command::Show => run_viewer(&config, config_result.warning),
        Command::List { json } => list(&config, json),
        Command::Select { number } => select(&config, number),
        Command::Preview { number } => preview(&config, number),
        Command::Add => add(&config),
        Command::Clear => clear(&config),
    }
}

/// Daemon logs to stderr at info, the viewer to a debug file (debug builds
/// only), one-shot commands to stderr at warn. `RUST_LOG` overrides the level.
fn init_logging(command: Command) {
    let mut builder = env_logger::Builder::new();
    builder.format(|buf, record| {
        let datetime = chrono::Local::now();
        writeln!(
            buf,
            "[{}] [{}] {}",
            datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    });

    match command {
        Command::Show => {
            #[cfg(debug_assertions)]
            {
                // Writes to /tmp/clipstash-debug.log at DEBUG level
                let Ok(log_file) = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open("/tmp/clipstash-debug.log")
                else {
                    return;
                };
                builder
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)));
                let _ = builder.try_init();
                log::debug!("=== CLIPSTASH VIEWER SESSION STARTED ===");
            }
        }
        Command::Monitor => {
            builder.filter_level(log::LevelFilter::Info).parse_default_env();
            let _ = builder.try_init();
        }
        _ => {
            builder.filter_level(log::LevelFilter::Warn).parse_default_env();
            let _ = builder.try_init();
        }
    }
}

fn open_store(config: &Config) -> HistoryStore {
    HistoryStore::load(config.history.path(), config.history.max_entries)
        .with_promotion(config.history.promote_on_select)
}

/// Map a 1-based entry number to a store index.
fn entry_index(store: &HistoryStore, number: usize) -> Result<usize, IndexError> {
    match number.checked_sub(1) {
        Some(index) if index < store.len() => Ok(index),
        _ => Err(IndexError {
            index: number,
            len: store.len(),
        }),
    }
}

fn summarize(content: &str) -> String {
    ClipboardEntry::new(content)
        .map(|entry| entry.summary(SUMMARY_WIDTH))
        .unwrap_or_default()
}

fn run_monitor(config: &Config) -> Result<()> {
    let clipboard = Clipboard::from_config(&config.clipboard)?;
    if !clipboard.can_read() {
        return Err(StartupError::WriteOnlyBackend(clipboard.backend_name()).into());
    }

    let store = open_store(config);
    let mut monitor = Monitor::new(clipboard, store, config.monitor.poll_interval());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let shutdown = CancellationToken::new();
        tokio::spawn(cancel_on_signal(shutdown.clone()));
        monitor.run(shutdown).await;
    });

    Ok(())
}

/// Cancel `shutdown` on SIGINT (or SIGTERM on unix).
async fn cancel_on_signal(shutdown: CancellationToken) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = terminate.recv() => {}
                }
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    log::info!("Shutdown requested");
    shutdown.cancel();
}

fn run_viewer(config: &Config, warning: Option<String>) -> Result<()> {
    let clipboard = Clipboard::from_config(&config.clipboard)?;
    let mut app = App::new(open_store(config), clipboard);
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(content) = &app.copied {
        println!("Copied: {}", summarize(content));
    }

    #[cfg(debug_assertions)]
    log::debug!("=== CLIPSTASH VIEWER SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

fn list(config: &Config, json: bool) -> Result<()> {
    let store = open_store(config);

    if json {
        println!("{}", serde_json::to_string_pretty(store.list())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("Clipboard history is empty");
        return Ok(());
    }

    for (i, entry) in store.list().iter().enumerate() {
        println!("{}. {}", i + 1, entry.summary(SUMMARY_WIDTH));
    }
    Ok(())
}

fn select(config: &Config, number: usize) -> Result<()> {
    let mut store = open_store(config);
    let index = entry_index(&store, number)?;

    let clipboard = Clipboard::from_config(&config.clipboard)?;
    let content = store.get(index)?.content().to_string();
    clipboard.write(&content).map_err(ClipstashError::from)?;

    // Promotion only after the clipboard holds the value
    store.select(index)?;
    println!("Copied: {}", summarize(&content));
    Ok(())
}

fn preview(config: &Config, number: usize) -> Result<()> {
    let store = open_store(config);
    let index = entry_index(&store, number)?;
    println!("{}", store.get(index)?.content());
    Ok(())
}

fn add(config: &Config) -> Result<()> {
    let clipboard = Clipboard::from_config(&config.clipboard)?;
    if !clipboard.can_read() {
        return Err(StartupError::WriteOnlyBackend(clipboard.backend_name()).into());
    }

    let content = clipboard.read().map_err(ClipstashError::from)?;
    let mut store = open_store(config);

    match store.insert(&content)? {
        InsertOutcome::Ignored => println!("Clipboard is empty; nothing added"),
        InsertOutcome::Unchanged => println!("Already the newest entry"),
        InsertOutcome::Added { .. } => println!("Added: {}", summarize(&content)),
        InsertOutcome::Promoted { from } => {
            println!("Moved entry {} to the top: {}", from + 1, summarize(&content))
        }
    }
    Ok(())
}

fn clear(config: &Config) -> Result<()> {
    let mut store = open_store(config);
    let removed = store.len();
    store.clear()?;
    println!("Cleared {} entries", removed);
    Ok(())
}
