use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pellet_core::{
    Autopilot, Game, Level, NullRenderer, Renderer, RunSummary, Session, SimConfig, TextRenderer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in level (small, medium, large) or a path to a level file
    #[arg(short, long, default_value = "small")]
    level: String,
    /// TOML file with simulation settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Pause between ticks; defaults to 0 unless rendering
    #[arg(long)]
    delay_ms: Option<u64>,
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Draw every tick to stdout
    #[arg(long)]
    render: bool,
    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let level = resolve_level(&args.level)?;
    info!(level = level.name(), seed = config.seed, "starting run");

    let pilot = Autopilot::new(config.policy);
    let game = Game::new(level, config).context("Failed to place spawns")?;
    let summary = if args.render {
        run(game, pilot, TextRenderer::new(io::stdout()))
    } else {
        run(game, pilot, NullRenderer)
    }
    .context("Renderer failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Run complete.");
        println!("Outcome: {:?}", summary.outcome);
        println!("Ticks: {}", summary.ticks);
        println!("Score: {}", summary.score);
        println!("Lives: {}", summary.lives);
        println!("Snapshot Hash: {}", summary.snapshot_hash);
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.max_ticks = max_ticks;
    }
    config.tick_delay_ms = match args.delay_ms {
        Some(delay) => delay,
        None if args.render => config.tick_delay_ms,
        None => 0,
    };
    Ok(config)
}

fn resolve_level(name: &str) -> Result<Level> {
    if Level::builtin_names().iter().any(|builtin| *builtin == name) {
        return Level::builtin(name).with_context(|| format!("Bad built-in level: {name}"));
    }
    Level::load(Path::new(name)).with_context(|| format!("Failed to load level: {name}"))
}

fn run<R: Renderer>(game: Game, pilot: Autopilot, renderer: R) -> io::Result<RunSummary> {
    Session::new(game, pilot, renderer).run()
}
