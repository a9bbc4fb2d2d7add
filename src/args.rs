//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use parade::config::{GameConfig, SeatConfig, SeatKind};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Reads the game configuration from a JSON file. Seat flags are ignored.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Human players at this console.
    #[arg(long, default_value_t = 1)]
    pub humans: usize,

    /// Robots that play at random.
    #[arg(long, default_value_t = 0)]
    pub random: usize,

    /// Robots that always play their highest card.
    #[arg(long, default_value_t = 1)]
    pub greedy: usize,

    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Awards a speed bonus for quick decisions.
    #[arg(short, long)]
    pub timed: bool,

    #[arg(long)]
    pub no_color: bool,

    /// Writes a JSON transcript of the game to this path.
    #[arg(short, long)]
    pub log: Option<PathBuf>,
}

impl Args {
    /// Builds a configuration from the seat flags.
    pub fn to_config(&self) -> GameConfig {
        let humans = (1..=self.humans).map(|i| {
            let name = if self.humans == 1 {
                "You".to_string()
            } else {
                format!("Player {i}")
            };
            SeatConfig::new(name, SeatKind::Human)
        });
        let random =
            (1..=self.random).map(|i| SeatConfig::new(format!("Random {i}"), SeatKind::Random));
        let greedy =
            (1..=self.greedy).map(|i| SeatConfig::new(format!("Greedy {i}"), SeatKind::Greedy));
        GameConfig {
            seats: humans.chain(random).chain(greedy).collect(),
            seed: self.seed,
            timed: self.timed,
            color: !self.no_color,
            ..GameConfig::default()
        }
    }
}
