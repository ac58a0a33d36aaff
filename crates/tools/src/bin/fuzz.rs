use anyhow::{Result, bail};
use clap::Parser;
use pellet_core::{Autopilot, Game, Level, SimConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of runs, each on a fresh seed drawn from `seed`
    #[arg(short, long, default_value_t = 20)]
    runs: u32,
    #[arg(short, long, default_value_t = 3000)]
    ticks: u64,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn fuzz_once(level_name: &str, seed: u64, max_ticks: u64) -> Result<u64> {
    let config = SimConfig { seed, max_ticks, ..SimConfig::headless() };
    let mut pilot = Autopilot::new(config.policy);
    let mut game = Game::new(Level::builtin(level_name)?, config)?;

    let mut last_score = 0;
    while !game.is_finished() {
        game.advance(&mut pilot, 1);

        // Assert invariants
        let state = game.state();
        let tick = game.current_tick();
        if state.grid().is_wall(state.agent().pos()) {
            bail!("Invariant failed: agent inside wall ({level_name}, seed {seed}, tick {tick})");
        }
        if state.hostiles().any(|(_, hostile)| state.grid().is_wall(hostile.pos())) {
            bail!("Invariant failed: hostile inside wall ({level_name}, seed {seed}, tick {tick})");
        }
        if state.score() < last_score {
            bail!("Invariant failed: score dropped ({level_name}, seed {seed}, tick {tick})");
        }
        last_score = state.score();
    }
    Ok(game.current_tick())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for run in 0..args.runs {
        let level = choose(&mut rng, Level::builtin_names());
        let seed = rng.next_u64();
        let ticks = fuzz_once(level, seed, args.ticks)?;
        println!("Run {run}: {level} seed {seed} finished after {ticks} ticks");
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
