//! folio: a scroll-synchronised terminal portfolio.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{
    app_state::{AppState, Flow},
    clipboard::SystemClipboard,
    config::Config,
    platform::TerminalTitle,
    registry::SectionRegistry,
    theme::{self, ThemeMode, ThemeService},
    ui,
};
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Scroll-synchronised terminal portfolio", long_about = None)]
struct Args {
    /// Route to open, e.g. /projects
    #[arg(value_name = "ROUTE", default_value = "/")]
    route: String,

    /// Theme preference to apply and save (system, light or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Configuration file to load instead of ./folio.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Jump to sections instead of animating the scroll
    #[arg(long)]
    reduced_motion: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> folio::Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut cfg = Config::load(args.config.as_deref())?;

    // Override config with command line args
    if args.reduced_motion {
        cfg.reduced_motion = true;
    }

    let mut theme = ThemeService::load(theme::default_store_path(), theme::detect_system_theme());
    theme.subscribe(Box::new(|resolved| {
        tracing::info!(?resolved, "theme changed");
    }));
    if let Some(mode) = args.theme {
        if let Err(e) = theme.set(mode) {
            tracing::warn!(error = %e, "could not save theme preference");
        }
    }

    let (_, rows) = terminal::size()?;
    let state = AppState::new(
        &cfg,
        SectionRegistry::portfolio(),
        &args.route,
        theme,
        ui::body_height(rows),
    );

    tracing::info!(route = %args.route, "starting folio");
    run_tui(state)
}

fn setup_tracing(verbose: bool) {
    use std::fs::OpenOptions;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // The terminal belongs to the UI, so logs only ever go to a file.
    let Some(log_dir) = std::env::var("FOLIO_LOG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::cache_dir().map(|dir| dir.join("folio")))
    else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_path = log_dir.join("folio.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("folio=trace,info")
        } else {
            EnvFilter::new("folio=info,warn")
        }
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::debug!(path = ?log_path, "tracing initialized");
}

fn run_tui(mut app: AppState) -> folio::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    app.tracker.unmount();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> folio::Result<()> {
    let mut title = TerminalTitle::stdout();
    let mut clipboard = SystemClipboard::default();

    loop {
        let now = Instant::now();
        app.sync_route(now, &mut title);
        app.frame(now);
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(app.poll_timeout(Instant::now()))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key, Instant::now(), &mut clipboard) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(_, rows) => app.resize(ui::body_height(rows)),
            _ => {}
        }
    }
}
