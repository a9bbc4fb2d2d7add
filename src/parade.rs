//! The parade: the shared line of face-up cards.

use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::FromIterator;

use itertools::Itertools;

use crate::card::Card;

/// The parade. Index zero is the front of the line, which holds the most recently played card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parade {
    cards: VecDeque<Card>,
}

impl FromIterator<Card> for Parade {
    /// Builds a parade from cards listed front to back.
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Display for Parade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.cards.iter().join(" "))
    }
}

impl Parade {
    /// The number of cards in the parade.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the parade holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the parade, front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Places `card` at the front of the parade, and removes every card it collects.
    ///
    /// The `card.value()` cards directly behind the played card are safe. Past the safe zone, a
    /// card is collected if it shares the played card's color, or if its value does not exceed
    /// the played card's value. Collected cards are returned in parade order.
    pub fn play(&mut self, card: Card) -> Vec<Card> {
        self.cards.push_front(card);
        let first = 1 + usize::from(card.value());
        let collected: Vec<usize> = (first..self.cards.len())
            .filter(|&i| {
                let c = self.cards[i];
                c.color == card.color || c.value() <= card.value()
            })
            .collect();

        let mut cards = Vec::with_capacity(collected.len());
        for &i in collected.iter().rev() {
            cards.push(self.cards.remove(i).expect("index in bounds"));
        }
        cards.reverse();
        cards
    }
}
