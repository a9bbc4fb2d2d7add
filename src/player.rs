//! Players, and the strategies that choose their cards.

use crate::action::ActionType;
use crate::card::Card;
use crate::error::TurnError;
use crate::parade::Parade;
use crate::river::River;
use crate::session::SessionId;

mod console;
mod remote;
mod robot;
#[cfg(test)]
mod scripted;
pub use console::Console;
pub use remote::{Remote, DEFAULT_GRACE, DEFAULT_TIMEOUT};
pub use robot::{Greedy, Random};
#[cfg(test)]
pub use scripted::Scripted;

/// What a strategy is shown when asked to choose a card.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// The acting player's name.
    pub name: &'a str,
    /// Whether the card will be played or discarded.
    pub action: ActionType,
    /// The acting player's hand. Never empty.
    pub hand: &'a [Card],
    /// The acting player's river.
    pub river: &'a River,
    /// The parade, before the card is played.
    pub parade: &'a Parade,
}

/// A strategy's choice of card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Index into the hand.
    pub index: usize,
    /// True if no choice was made, and the default was substituted.
    pub fallback: bool,
}

impl Decision {
    /// The player chose the card at `index`.
    pub fn chosen(index: usize) -> Self {
        Self {
            index,
            fallback: false,
        }
    }

    /// The player made no usable choice; use the first card.
    pub fn fallback() -> Self {
        Self {
            index: 0,
            fallback: true,
        }
    }
}

/// A trait for choosing cards.
pub trait Decide {
    /// Called when the player's turn begins, before they are shown their hand.
    fn begin_turn(&mut self) {}

    /// Chooses a card from `request.hand`. The returned index must be in bounds.
    fn decide(&mut self, request: &Request<'_>) -> Decision;
}

/// The ways a player can make decisions.
pub enum Strategy {
    /// A computer player that picks at random.
    Random(Random),
    /// A computer player that always picks its highest card.
    Greedy(Greedy),
    /// A human at the local console.
    Console(Console),
    /// A human connected over the network.
    Remote(Remote),
    /// A predetermined sequence of choices.
    #[cfg(test)]
    Scripted(Scripted),
}

impl Strategy {
    /// Returns true if a human makes the decisions.
    pub fn is_human(&self) -> bool {
        matches!(self, Strategy::Console(_) | Strategy::Remote(_))
    }

    fn as_decide(&mut self) -> &mut dyn Decide {
        match self {
            Strategy::Random(s) => s,
            Strategy::Greedy(s) => s,
            Strategy::Console(s) => s,
            Strategy::Remote(s) => s,
            #[cfg(test)]
            Strategy::Scripted(s) => s,
        }
    }
}

impl Decide for Strategy {
    fn begin_turn(&mut self) {
        self.as_decide().begin_turn();
    }

    fn decide(&mut self, request: &Request<'_>) -> Decision {
        self.as_decide().decide(request)
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Random(_) => "Random",
            Strategy::Greedy(_) => "Greedy",
            Strategy::Console(_) => "Console",
            Strategy::Remote(_) => "Remote",
            #[cfg(test)]
            Strategy::Scripted(_) => "Scripted",
        })
    }
}

/// A seated player: identity, cards, and the strategy that plays them.
#[derive(Debug)]
pub struct Player {
    name: String,
    session: SessionId,
    hand: Vec<Card>,
    river: River,
    strategy: Strategy,
    bonus: u32,
}

impl Player {
    /// Creates a player with an empty hand and river.
    pub fn new<S: Into<String>>(name: S, session: SessionId, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            session,
            hand: vec![],
            river: River::default(),
            strategy,
            bonus: 0,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The session that receives the player's private messages.
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn river(&self) -> &River {
        &self.river
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Accumulated speed bonus, in timed games.
    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Opens the player's input window for a new turn.
    pub fn begin_turn(&mut self) {
        self.strategy.begin_turn();
    }

    /// Asks the strategy which card to play.
    pub fn choose_card_to_play(&mut self, parade: &Parade) -> Result<Decision, TurnError> {
        self.choose(ActionType::Play, parade)
    }

    /// Asks the strategy which card to discard.
    pub fn choose_card_to_discard(&mut self, parade: &Parade) -> Result<Decision, TurnError> {
        self.choose(ActionType::Discard, parade)
    }

    fn choose(&mut self, action: ActionType, parade: &Parade) -> Result<Decision, TurnError> {
        if self.hand.is_empty() {
            return Err(TurnError::EmptyHand(self.name.clone()));
        }
        let request = Request {
            name: &self.name,
            action,
            hand: &self.hand,
            river: &self.river,
            parade,
        };
        let decision = self.strategy.decide(&request);
        if decision.index < self.hand.len() {
            Ok(decision)
        } else {
            Err(TurnError::NoSuchCard {
                name: self.name.clone(),
                index: decision.index,
                len: self.hand.len(),
            })
        }
    }

    /// Removes and returns the card at `index` in the hand.
    pub fn play_card(&mut self, index: usize) -> Result<Card, TurnError> {
        if self.hand.is_empty() {
            return Err(TurnError::EmptyHand(self.name.clone()));
        }
        if index >= self.hand.len() {
            return Err(TurnError::NoSuchCard {
                name: self.name.clone(),
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Adds a card to the hand.
    pub fn draw_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Adds a card to the river, keeping it sorted.
    pub fn add_to_river(&mut self, card: Card) {
        self.add_all_to_river([card]);
    }

    /// Adds several cards to the river, keeping it sorted.
    pub fn add_all_to_river<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            self.river.push(card);
        }
        self.river.sort();
    }

    /// Empties the hand.
    pub fn take_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    pub fn add_bonus(&mut self, bonus: u32) {
        self.bonus += bonus;
    }
}

/// Parses a 1-based card choice, as typed by a human.
pub fn parse_choice(raw: &str, hand_size: usize) -> Option<usize> {
    let n: usize = raw.trim().parse().ok()?;
    (1..=hand_size).contains(&n).then(|| n - 1)
}
