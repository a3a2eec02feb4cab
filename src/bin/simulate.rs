use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pacsearch::agents::{Agent, GhostAgent};
use pacsearch::game::{layouts, Game, Outcome};
use pacsearch::logging;
use pacsearch::simulate::play;

#[derive(Parser)]
#[command(name = "pacsearch simulator", about = "Simulate games with different agents.")]
struct Opts {
    /// Built in layout or layout file.
    #[arg(long, default_value = "minimaxClassic")]
    layout: String,
    /// Policy of the ghosts.
    #[arg(long, value_enum, default_value_t)]
    ghosts: GhostAgent,
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
    /// Seed for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
    /// Pacman configuration, like '{"Expectimax":{"depth":3}}'.
    #[arg(default_value_t)]
    agent: Agent,
}

fn main() {
    logging();

    if let Err(e) = run(Opts::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> pacsearch::Result<()> {
    let Opts {
        layout,
        ghosts,
        game_count,
        max_turns,
        seed,
        verbose,
        agent,
    } = opts;

    let game = layouts::load(&layout)?;
    let seed = seed.unwrap_or_else(|| SmallRng::from_entropy().gen());
    info!("{} on {} with {:?} ghosts, seed {}", agent, layout, ghosts, seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let start = Instant::now();
    let mut wins = 0;
    let mut scores = 0;

    for i in 0..game_count {
        let mut pacman = agent.build::<Game>(SmallRng::seed_from_u64(rng.gen()))?;
        let summary = play(game.clone(), pacman.as_mut(), ghosts, &mut rng, max_turns, verbose)?;

        wins += (summary.outcome == Outcome::Win) as usize;
        scores += summary.score;
        println!(
            "{}: {} {:?} score {} after {} turns {}ms",
            "Finish Game".bright_green(),
            i,
            summary.outcome,
            summary.score,
            summary.turns,
            start.elapsed().as_millis()
        );
    }

    println!(
        "Result: {}/{} wins, average score {:.2}",
        wins,
        game_count,
        scores as f64 / game_count.max(1) as f64
    );
    Ok(())
}
