use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::{Difficulty, SearchEngine};
use connect_four::config::{AppConfig, GameMode};
use connect_four::game::{GameOutcome, Player};
use connect_four::ui::{console::Console, App};

/// Play Connect Four against the computer or a second human.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Computer strength: trivial, low, medium or high
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Colour the human plays against the computer: red or yellow
    #[arg(long)]
    color: Option<Player>,

    /// Two humans at the same keyboard, no computer
    #[arg(long)]
    two_player: bool,

    /// Seed the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Plain line-based play on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        app_config.game.difficulty = difficulty;
    }
    if let Some(color) = cli.color {
        app_config.game.human = color;
    }
    if cli.two_player {
        app_config.game.mode = GameMode::Two;
    }
    if cli.seed.is_some() {
        app_config.engine.seed = cli.seed;
    }

    if cli.print_config {
        let toml = toml::to_string_pretty(&app_config).context("serializing configuration")?;
        print!("{toml}");
        return Ok(());
    }

    log::info!(
        "starting: {} | human {} | difficulty {}",
        app_config.game.mode,
        app_config.game.human,
        app_config.game.difficulty
    );

    if cli.headless {
        run_console(&app_config)
    } else {
        run_tui(&app_config).context("running terminal UI")
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let engine = match config.engine.seed {
        Some(seed) => SearchEngine::from_seed(seed),
        None => SearchEngine::from_os_rng(),
    };
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.game.clone(), engine);
    match console.run().context("console game")? {
        Some(GameOutcome::Winner(player)) => log::info!("game over: {player} won"),
        Some(GameOutcome::Draw) => log::info!("game over: draw"),
        None => log::info!("game abandoned"),
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
