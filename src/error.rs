//! Error types

/// Structural violations raised while running a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The acting player has no card to play or discard.
    #[error("{0} has no cards in hand")]
    EmptyHand(String),

    /// The chosen index doesn't refer to a card in the player's hand.
    #[error("{name} has no card at index {index} (hand size {len})")]
    NoSuchCard {
        name: String,
        index: usize,
        len: usize,
    },

    /// The game has already been scored.
    #[error("game over")]
    GameOver,
}

/// Errors building a new game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a game needs 2 to 8 players, got {0}")]
    PlayerCount(usize),
    #[error("deck has {have} cards, the deal needs {need}")]
    DeckTooSmall { have: usize, need: usize },
}

/// Errors loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}
