//! A serializable record of a game.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::card::Card;

/// A seat, as dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub name: String,
    pub hand: Vec<Card>,
}

/// A final score, and the players who earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: i32,
    pub players: Vec<String>,
}

/// Everything needed to follow a game after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// The seed the deck was shuffled with, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Each seat and its opening hand.
    pub seats: Vec<SeatRecord>,
    /// The opening parade, front to back.
    pub parade: Vec<Card>,
    /// Every action, in order.
    pub actions: Vec<Action>,
    /// Final scores, best first.
    pub standings: Vec<ScoreRecord>,
}

impl Transcript {
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }
}
