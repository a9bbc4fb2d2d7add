//! Actions

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Types of actions that a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    /// Play a card into the parade.
    Play,
    /// Discard a card during the end of the game.
    Discard,
}
impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionType::Play => "play",
            ActionType::Discard => "discard",
        })
    }
}

/// An action taken by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The acting player's seat.
    pub seat: usize,
    /// The type of action.
    pub action: ActionType,
    /// The card played or discarded.
    pub card: Card,
    /// Cards collected from the parade.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collected: Vec<Card>,
}

impl Action {
    /// Create a new [`Action`].
    pub fn new(seat: usize, action: ActionType, card: Card) -> Self {
        Self {
            seat,
            action,
            card,
            collected: vec![],
        }
    }

    /// Attaches the collected cards.
    pub fn with_collected(mut self, collected: Vec<Card>) -> Self {
        self.collected = collected;
        self
    }
}
