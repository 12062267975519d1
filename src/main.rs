use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, GameMode};
use connect_four::game::{GameEngine, PlayerId};
use connect_four::ui::headless::{self, LineSink};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a friend or the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the game mode: hvh or hvc
    #[arg(long)]
    mode: Option<String>,

    /// Override the computer's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override who moves first: first or second
    #[arg(long)]
    starting_player: Option<String>,

    /// Read commands from stdin and print events instead of the TUI
    #[arg(long)]
    headless: bool,

    /// Write logs to this file (headless mode logs to stderr by default)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    init_tracing(&cli)?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode.as_deref() {
        config.game.mode = match mode {
            "hvh" => GameMode::HumanVsHuman,
            "hvc" => GameMode::HumanVsComputer,
            other => bail!("unknown mode '{}' (expected 'hvh' or 'hvc')", other),
        };
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(first) = cli.starting_player.as_deref() {
        config.game.starting_player = match first {
            "first" => PlayerId::First,
            "second" => PlayerId::Second,
            other => bail!("unknown starting player '{}' (expected 'first' or 'second')", other),
        };
    }
    config.validate().context("invalid configuration")?;

    if cli.headless {
        let mut engine = GameEngine::from_config(&config, LineSink::new(io::stdout()))
            .context("setting up players")?;
        headless::run(&mut engine, io::stdin().lock()).context("reading commands")?;
        return Ok(());
    }

    let engine = GameEngine::from_config(&config, Vec::new()).context("setting up players")?;
    run_tui(App::new(engine)).context("running terminal UI")
}

/// Log to `--log-file` when given, otherwise to stderr in headless mode only
/// (stderr would corrupt the TUI).
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
