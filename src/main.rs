use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;
use tracing::info;

use daily_wordle::{
    args::Args,
    config::Config,
    db,
    logging::init_logging,
    stats::{GameStats, StatsStore},
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;
    let _log_guard = init_logging(&config.log_dir, &config.log_level)?;

    info!("Starting daily-wordle {}", env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if args.reset_stats || args.stats {
        let pool = runtime
            .block_on(db::create_pool(&config.db_path))
            .with_context(|| format!("Cannot open stats database {}", config.db_path.display()))?;
        return run_maintenance(&runtime, StatsStore::new(pool), &args);
    }

    let source = config.build_word_source()?;
    let pool = runtime.block_on(db::create_pool_or_memory(&config.db_path))?;
    let store = StatsStore::new(pool);

    run_ui(source, store, runtime.handle().clone(), config.strict)
}

/// `--reset-stats` and `--stats` work on the real database only.
fn run_maintenance(runtime: &Runtime, store: StatsStore, args: &Args) -> Result<()> {
    if args.reset_stats {
        let removed = runtime.block_on(store.clear())?;
        println!(
            "{}",
            if removed {
                "Statistics cleared"
            } else {
                "No statistics stored"
            }
        );
        return Ok(());
    }

    let stats = runtime.block_on(store.load());
    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &GameStats) {
    println!("Played:          {}", stats.games_played);
    println!("Win %:           {}", stats.win_percentage());
    println!("Current streak:  {}", stats.current_streak);
    println!("Max streak:      {}", stats.max_streak);
    if let Some(date) = stats.last_played_date {
        println!("Last played:     {}", date);
    }
    println!();
    println!("Guess distribution:");

    let bars = stats.distribution_bars(30);
    for (i, (bar, count)) in bars.iter().zip(stats.guess_distribution.iter()).enumerate() {
        println!("  {} {:<30} {}", i + 1, "#".repeat(*bar), count);
    }
}
