use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the leaderboard (default if no subcommand)
    Board,
    /// Show every player's pick per division
    Picks {
        /// Limit output to one division (case-insensitive)
        division: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pickboard")]
#[command(about = "Top-5 pick 'em leaderboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pickboard/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Snapshot source: a data file path or http(s) URL (overrides config)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Emit the leaderboard as tab-separated values (no colors, no headers)
    #[arg(long, global = true)]
    tsv: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Board);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pickboard::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let source = cli.data.as_deref().unwrap_or_else(|| config.source());

    if cli.verbose {
        eprintln!("Snapshot source: {}", source);
    }

    // Acquire the snapshot. Any failure here is terminal: the board is never
    // computed from a partially acquired snapshot.
    let snapshot = match pickboard::snapshot::load_snapshot(source).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading data: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} players, {} ranked divisions, {} pick divisions in {:?}",
            snapshot.players.len(),
            snapshot.rankings_top5.len(),
            snapshot.picks.len(),
            start_time.elapsed()
        );
    }

    // The scoring engine assumes a de-duplicated roster; check it here, at
    // the boundary that supplies it.
    if let Err(errors) = pickboard::snapshot::validate_snapshot(&snapshot) {
        eprintln!("Snapshot errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_DATA);
    }

    let use_colors = pickboard::output::should_use_colors();

    match command {
        Commands::Board => {
            let board = pickboard::scoring::compute_leaderboard(
                &snapshot.players,
                &snapshot.rankings_top5,
                &snapshot.picks,
            );

            if cli.tsv {
                let tsv = pickboard::output::format_tsv(&board);
                if !tsv.is_empty() {
                    println!("{}", tsv);
                }
            } else {
                println!(
                    "{}",
                    pickboard::output::format_leader_summary(&board, use_colors)
                );
                println!();
                println!(
                    "{}",
                    pickboard::output::format_leaderboard_table(&board, use_colors)
                );
                println!();
                println!(
                    "Next fight: {}",
                    pickboard::output::format_next_fight(snapshot.next_important_fight.as_ref())
                );

                let updated = pickboard::output::format_updated_at(snapshot.updated_at.as_deref());
                if !updated.is_empty() {
                    println!("{}", updated);
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} players in {:?}",
                    board.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Picks { division } => {
            println!(
                "{}",
                pickboard::output::format_picks(
                    &snapshot,
                    division.as_deref(),
                    config.placeholder_image(),
                    use_colors
                )
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
