//! Player-visible events.

use std::fmt::Display;

use itertools::Itertools;

use crate::card::Card;
use crate::parade::Parade;
use crate::river::River;

/// An event that occurs during the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A player's turn begins.
    Turn {
        number: u64,
        player: String,
        last: bool,
    },
    /// The acting player's hand, sent privately.
    Hand(Vec<Card>),
    /// A card was played into the parade.
    Played {
        player: String,
        card: Card,
        collected: Vec<Card>,
    },
    /// A player drew a card.
    Drew { player: String, remaining: usize },
    /// A player had nothing to draw.
    DeckExhausted { player: String },
    /// A player's river holds every color.
    AllColors { player: String },
    /// The current parade.
    Parade(Parade),
    /// A player's river.
    River { player: String, river: River },
    /// Every player but the trigger gets one last turn.
    LastRound { trigger: String },
    /// Every player discards two cards.
    DiscardRound,
    /// A player discarded a card.
    Discarded { player: String, card: Card },
    /// The cards left in a player's hand join their river.
    Flushed { player: String, cards: Vec<Card> },
    /// Final standings, from best to worst.
    Standings(Vec<(i32, Vec<String>)>),
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Turn {
                number,
                player,
                last,
            } => {
                let last = if *last { " (last turn)" } else { "" };
                write!(f, "== Turn {number}: {player}{last} ==")
            }
            Event::Hand(cards) => {
                let cards = cards
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("{}:{c}", i + 1))
                    .join(" ");
                write!(f, "Your hand: {cards}")
            }
            Event::Played {
                player,
                card,
                collected,
            } => {
                if collected.is_empty() {
                    write!(f, "{player} plays {card}, collecting nothing")
                } else {
                    write!(
                        f,
                        "{player} plays {card}, collecting {}",
                        collected.iter().join(" ")
                    )
                }
            }
            Event::Drew { player, remaining } => {
                write!(f, "{player} draws a card ({remaining} left in the deck)")
            }
            Event::DeckExhausted { player } => {
                write!(f, "The deck is empty; {player} ends the game")
            }
            Event::AllColors { player } => {
                write!(f, "{player} has collected every color; the game is ending")
            }
            Event::Parade(parade) => write!(f, "Parade: {parade}"),
            Event::River { player, river } => write!(f, "{player}'s river: {river}"),
            Event::LastRound { trigger } => {
                write!(f, "Last round: everyone but {trigger} plays one more card")
            }
            Event::DiscardRound => f.write_str("Everyone discards two cards"),
            Event::Discarded { player, card } => write!(f, "{player} discards {card}"),
            Event::Flushed { player, cards } => write!(
                f,
                "{player} adds {} to their river",
                cards.iter().join(" ")
            ),
            Event::Standings(standings) => {
                f.write_str("Final scores:")?;
                for (place, (score, players)) in standings.iter().enumerate() {
                    write!(f, "\n  {}. {} - {score}", place + 1, players.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
