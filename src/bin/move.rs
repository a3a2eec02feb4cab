use clap::Parser;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use pacsearch::agents::Agent;
use pacsearch::game::{layouts, Game};
use pacsearch::logging;

#[derive(Parser)]
#[command(name = "pacsearch move", about = "Compute the next move of an agent.")]
struct Opts {
    /// Built in layout or layout file.
    #[arg(long, default_value = "minimaxClassic")]
    layout: String,
    /// Pacman configuration, like '{"AlphaBeta":{"depth":3}}'.
    #[arg(default_value_t)]
    agent: Agent,
}

fn main() {
    logging();

    let Opts { layout, agent } = Opts::parse();

    let game = match layouts::load(&layout) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("{:?}", game);

    let mut pacman = match agent.build::<Game>(SmallRng::from_entropy()) {
        Ok(pacman) => pacman,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let step = pacman.choose_action(&game);
    info!("Step: {:?}", step);
}
