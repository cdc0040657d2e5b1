use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use gravity_grid::ai::RandomAgent;
use gravity_grid::config::AppConfig;
use gravity_grid::game::{evaluation, BoardEngine, GameStatus, Player};
use gravity_grid::playout::{play_out, run_playouts, PlayoutStats};

/// Play random games of the gravity-drop grid game and report the outcomes.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run random play-outs of the gravity-drop grid game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gravity_grid.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Play one game and print the final board instead of a batch summary
    #[arg(long)]
    show_board: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("initialising logger")?;

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.playout.games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.playout.seed = Some(seed);
    }
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        app_config.board.cols = cols;
    }
    app_config.validate().context("validating configuration")?;

    if cli.show_board {
        return show_single_game(&app_config);
    }

    let stats = run_playouts(&app_config.board, &app_config.playout)
        .context("running play-outs")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&app_config, &stats);
    }
    Ok(())
}

fn show_single_game(config: &AppConfig) -> Result<()> {
    let mut agent = match config.playout.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };
    let mut engine = BoardEngine::from_config(&config.board);
    let result = play_out(&mut engine, &mut agent, config.playout.max_drops)
        .context("playing a single game")?;
    let runs = evaluation::longest_runs(engine.board());

    print!("{engine}");
    println!("-------------------------------------------");
    println!(
        "Longest run: X {} / O {}",
        runs.best(Player::X),
        runs.best(Player::O)
    );
    println!(
        "Placements: {}  Forfeited turns: {}",
        result.placements, result.forfeits
    );
    match result.status {
        GameStatus::Winner(player) => println!("Winner: {player}"),
        GameStatus::Tie => println!("Tie"),
        GameStatus::InProgress => println!("Unfinished"),
    }
    Ok(())
}

fn print_summary(config: &AppConfig, stats: &PlayoutStats) {
    println!(
        "Played {} games on a {}x{} board",
        stats.games, config.board.rows, config.board.cols
    );
    println!("-------------------------------------------");
    println!(
        "X wins: {:>6} ({:.1}%)",
        stats.x_wins,
        stats.win_rate(Player::X) * 100.0
    );
    println!(
        "O wins: {:>6} ({:.1}%)",
        stats.o_wins,
        stats.win_rate(Player::O) * 100.0
    );
    println!("Ties:   {:>6} ({:.1}%)", stats.ties, stats.tie_rate() * 100.0);
    if stats.unfinished > 0 {
        println!("Unfinished (drop limit): {:>6}", stats.unfinished);
    }
    println!(
        "Average placements per game: {:.2}",
        stats.average_placements()
    );
    println!(
        "Average forfeited turns per game: {:.2}",
        stats.average_forfeits()
    );
}
