use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use market_mood::api::MoodClient;
use market_mood::app::fetch::spawn_request;
use market_mood::app::{App, InputMode, Route};
use market_mood::config::Config;
use market_mood::ui;
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "market-mood")]
#[command(about = "Terminal dashboard for composite market mood scores", long_about = None)]
struct Cli {
    /// Base URL of the analysis service (overrides config and MOOD_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Route to open on start, e.g. /analyse or /historical/AAPL
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Days of history to request on the detail screen
    #[arg(short, long)]
    days: Option<u32>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("market-mood").join("logs"))
}

/// Log to a daily file; the terminal belongs to the UI.
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "market-mood.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_mood=debug,info".into()),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    info!(?log_dir, "logging initialised");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = cli.log_dir.clone().or_else(default_log_dir)
        && let Err(e) = init_logging(&dir)
    {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut config = Config::load()?;
    config.apply_api_base_override(cli.api_base.clone());
    if let Some(days) = cli.days.filter(|d| *d > 0) {
        config.lookback_days = days;
    }
    info!(api_base = %config.api_base, lookback_days = config.lookback_days, "starting");

    let client = Arc::new(MoodClient::new(&config)?);
    let mut app = App::new(config, Route::parse(&cli.route));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "event loop failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: Arc<MoodClient>,
) -> Result<()> {
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);

    loop {
        // Completed fetches first; applying one can queue the next screen's fetch
        while let Ok(outcome) = receiver.try_recv() {
            app.apply(outcome);
        }
        for request in app.take_requests() {
            spawn_request(Arc::clone(&client), request, sender.clone());
        }

        let size = terminal.size()?;
        app.grid_columns = ui::grid_columns(ui::content_width(size.width));

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !handle_key(app, key) {
                    return Ok(());
                }
            }
        } else {
            app.on_tick();
        }
    }
}

/// Returns false when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Normal => {
            // The loading overlay blocks everything except leaving
            if app.overlay_visible() {
                match key.code {
                    KeyCode::Char('q') => return false,
                    KeyCode::Esc | KeyCode::Backspace => app.back(),
                    _ => {}
                }
                return true;
            }
            match key.code {
                KeyCode::Char('q') => return false,
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char(':') => app.start_goto(),
                KeyCode::Esc | KeyCode::Backspace => app.back(),
                KeyCode::Char('H') => app.go_home(),
                KeyCode::Char('r') => app.reload(),
                code => match app.route().clone() {
                    Route::Dashboard => {
                        if matches!(code, KeyCode::Enter | KeyCode::Char('a')) {
                            app.run_analysis();
                        }
                    }
                    Route::Analysis => match code {
                        KeyCode::Enter => app.open_selected(),
                        code => move_selection(app, code),
                    },
                    Route::Historical(_) => match code {
                        KeyCode::Char(']') => app.next_symbol(),
                        KeyCode::Char('[') => app.prev_symbol(),
                        code => move_selection(app, code),
                    },
                },
            }
        }
        InputMode::Goto => match key.code {
            KeyCode::Enter => app.confirm_goto(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                if !c.is_whitespace() {
                    app.input_buffer.push(c);
                }
            }
            _ => {}
        },
        InputMode::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
                app.close_help();
            }
        }
    }
    true
}

fn move_selection(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
        _ => {}
    }
}
