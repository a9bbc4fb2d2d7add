//! Game configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SetupError};
use crate::game::{MAX_PLAYERS, MIN_PLAYERS};
use crate::input::Postbox;
use crate::player::{
    Console, Greedy, Player, Random, Remote, Strategy, DEFAULT_GRACE, DEFAULT_TIMEOUT,
};
use crate::session::SessionId;

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    Human,
    Random,
    Greedy,
}

/// A configured seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub kind: SeatKind,
}

impl SeatConfig {
    pub fn new<S: Into<String>>(name: S, kind: SeatKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

fn default_input_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_closed_grace() -> u64 {
    DEFAULT_GRACE.as_millis() as u64
}

fn default_color() -> bool {
    true
}

/// Everything needed to set up a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub seats: Vec<SeatConfig>,
    /// Seeds the deck and the random robots. Drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Whether quick human decisions earn a speed bonus.
    #[serde(default)]
    pub timed: bool,
    /// How long to wait for a remote player's input, in seconds.
    #[serde(default = "default_input_timeout")]
    pub input_timeout: u64,
    /// How long to pause for a disconnected remote player, in milliseconds.
    #[serde(default = "default_closed_grace")]
    pub closed_grace: u64,
    /// How long random robots pause before deciding, in milliseconds.
    #[serde(default)]
    pub think_time: u64,
    /// Whether console output is colored.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                SeatConfig::new("You", SeatKind::Human),
                SeatConfig::new("Robot", SeatKind::Greedy),
            ],
            seed: None,
            timed: false,
            input_timeout: default_input_timeout(),
            closed_grace: default_closed_grace(),
            think_time: 0,
            color: true,
        }
    }
}

impl GameConfig {
    /// Loads and validates a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.seats.len();
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(())
        } else {
            Err(SetupError::PlayerCount(count))
        }
    }

    pub fn input_timeout(&self) -> Duration {
        Duration::from_secs(self.input_timeout)
    }

    pub fn closed_grace(&self) -> Duration {
        Duration::from_millis(self.closed_grace)
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time)
    }

    /// The seed to shuffle with, drawing one if none is configured.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }

    /// Seats the configured players. Random robots are seeded from `seed`, each differently.
    pub fn players(&self, seed: u64) -> Vec<Player> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, cfg)| {
                let strategy = match cfg.kind {
                    SeatKind::Human => Strategy::Console(Console::new(self.color)),
                    SeatKind::Greedy => Strategy::Greedy(Greedy),
                    SeatKind::Random => {
                        let rng = StdRng::seed_from_u64(seed.wrapping_add(1 + seat as u64));
                        Strategy::Random(Random::new(rng).with_think_time(self.think_time()))
                    }
                };
                Player::new(cfg.name.clone(), SessionId(seat), strategy)
            })
            .collect()
    }

    /// Seats a networked player, using the configured timeout and grace period. The transport
    /// feeds the player's input through the returned postbox.
    pub fn remote<S: Into<String>>(&self, name: S, session: SessionId) -> (Player, Postbox) {
        let (remote, postbox) = Remote::connect(self.input_timeout(), self.closed_grace());
        (
            Player::new(name, session, Strategy::Remote(remote)),
            postbox,
        )
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{"seats": [{"name": "Ann", "kind": "human"}, {"name": "Bo", "kind": "random"}]}"#,
        )
        .unwrap();
        assert_eq!(config.seed, None);
        assert!(!config.timed);
        assert!(config.color);
        assert_eq!(config.input_timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.closed_grace(), DEFAULT_GRACE);
        assert_eq!(config.input_timeout(), Duration::from_secs(30));
        assert_eq!(config.closed_grace(), Duration::from_secs(1));
        assert_eq!(
            config,
            GameConfig {
                seats: config.seats.clone(),
                ..GameConfig::default()
            }
        );
        assert_eq!(config.think_time(), Duration::ZERO);
        assert_eq!(config.seats[1], SeatConfig::new("Bo", SeatKind::Random));
    }

    #[test]
    fn test_validate() {
        let mut config = GameConfig::default();
        assert!(config.validate().is_ok());
        config.seats.truncate(1);
        assert_matches!(config.validate(), Err(SetupError::PlayerCount(1)));
        config.seats = (0..9)
            .map(|i| SeatConfig::new(format!("P{i}"), SeatKind::Greedy))
            .collect();
        assert_matches!(config.validate(), Err(SetupError::PlayerCount(9)));
    }

    #[test]
    fn test_load() {
        let path = std::env::temp_dir().join(format!("parade-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"seats": [{{"name": "A", "kind": "greedy"}}], "seed": 7}}"#
        )
        .unwrap();
        drop(file);
        assert_matches!(
            GameConfig::load(&path),
            Err(ConfigError::Setup(SetupError::PlayerCount(1)))
        );

        std::fs::write(&path, "{").unwrap();
        assert_matches!(GameConfig::load(&path), Err(ConfigError::Parse(_)));
        std::fs::remove_file(&path).unwrap();
        assert_matches!(GameConfig::load(&path), Err(ConfigError::Io(_)));
    }

    #[test]
    fn test_players() {
        let config = GameConfig {
            seats: vec![
                SeatConfig::new("Ann", SeatKind::Greedy),
                SeatConfig::new("Bo", SeatKind::Random),
                SeatConfig::new("Cy", SeatKind::Random),
            ],
            ..GameConfig::default()
        };
        let players = config.players(3);
        let names: Vec<&str> = players.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
        assert_eq!(players[2].session(), SessionId(2));
        assert!(players.iter().all(|p| !p.strategy().is_human()));

        let (remote, postbox) = config.remote("Di", SessionId(3));
        assert!(remote.strategy().is_human());
        assert_eq!(remote.session(), SessionId(3));
        assert!(postbox.offer("1"));
    }
}
