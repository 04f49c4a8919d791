use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::GameSession;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override first player's name
    #[arg(long)]
    player_one: Option<String>,

    /// Override second player's name
    #[arg(long)]
    player_two: Option<String>,

    /// Override board rows (5-9)
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns (5-9)
    #[arg(long)]
    cols: Option<usize>,

    /// Override number of games in the session
    #[arg(long)]
    games: Option<usize>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player_one {
        config.players.first_name = name;
    }
    if let Some(name) = cli.player_two {
        config.players.second_name = name;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(games) = cli.games {
        config.session.games = games;
    }
    config.validate().context("invalid configuration")?;

    let (player_one, player_two) = config.players();
    let session = GameSession::new(
        player_one,
        player_two,
        config.board.rows,
        config.board.cols,
        config.session.games,
    );

    run_tui(session)?;
    Ok(())
}

fn run_tui(session: GameSession) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
