use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use parade::config::GameConfig;
use parade::game::Game;
use parade::session::{ConsoleMessenger, SessionId};

mod args;
use self::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let config = args.to_config();
            config.validate()?;
            config
        }
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.timed |= args.timed;
    config.color &= !args.no_color;

    let seed = config.seed_or_random();
    log::info!("seed {seed}, {} players", config.seats.len());
    let mut rng = StdRng::seed_from_u64(seed);
    let players = config.players(seed);
    // Private messages for humans at this console are printed along with the broadcasts.
    let local: Vec<SessionId> = players
        .iter()
        .filter(|p| p.strategy().is_human())
        .map(|p| p.session())
        .collect();
    let mut game = Game::shuffled(players, ConsoleMessenger::new(local), &mut rng)?
        .with_timed(config.timed)
        .with_seed(Some(seed));
    game.run()?;

    if let Some(path) = &args.log {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), game.transcript())?;
        log::info!("wrote transcript to {}", path.display());
    }
    Ok(())
}
