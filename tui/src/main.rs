//! MEDIDASH — interactive terminal dashboard
//!
//! Sign in with a demo account or continue as a guest, then move between the
//! dashboard, patients, appointments and medical records from the sidebar.
//! The signed-in identity persists in the storage directory; guest mode and
//! everything added during the run last until the program exits.
//!
//! Usage:
//!   medidash-tui [--config medidash.toml] [--storage-dir .medidash]

mod app;
mod form;
mod ui;

use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;
use tracing_subscriber::EnvFilter;

use medidash_clinic::Clinic;
use medidash_contracts::error::{MedidashError, MedidashResult};
use medidash_core::{DashboardConfig, SessionManager};
use medidash_router::TomlRouteTable;
use medidash_storage::{InMemoryStore, JsonFileStore};

use app::App;

/// MEDIDASH — hospital dashboard TUI.
#[derive(Parser)]
#[command(name = "medidash-tui", about = "MEDIDASH hospital dashboard (terminal UI)")]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the stored sign-in and the log file. Overrides the
    /// configuration.
    #[arg(long)]
    storage_dir: Option<PathBuf>,
}

// ── Startup ───────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> MedidashResult<DashboardConfig> {
    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = dir.clone();
    }
    Ok(config)
}

/// Logs go to a file; the alternate screen owns stdout.
fn init_logging(config: &DashboardConfig) -> MedidashResult<()> {
    let path = config.tui_log_path();
    let file = fs::create_dir_all(&config.storage_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path))
        .map_err(|e| MedidashError::ConfigError {
            reason: format!("failed to open log file '{}': {}", path.display(), e),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

fn build_app(config: &DashboardConfig) -> MedidashResult<App> {
    let routes = TomlRouteTable::load(config.routes_file.as_deref())?;
    // Guest mode is scoped to this process, like a browser tab's session.
    let session = SessionManager::restore(
        Box::new(JsonFileStore::new(config.local_store_path())),
        Box::new(InMemoryStore::new()),
    )?;
    let today = chrono::Local::now().date_naive();
    App::start(session, routes, Clinic::load()?, today)
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.quit {
        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Err(e) = app.handle_key(key) {
                    error!(error = %e, "key handling failed");
                    app.status = Some(e.to_string());
                }
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut app = match load_config(&cli).and_then(|config| {
        init_logging(&config)?;
        build_app(&config)
    }) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("medidash-tui: {}", e);
            std::process::exit(1);
        }
    };

    // Restore the terminal before the panic message prints.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}
