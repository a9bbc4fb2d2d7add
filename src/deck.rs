//! A deck of cards.

use std::collections::VecDeque;
use std::iter::FromIterator;

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Color, Rank};

/// A deck of cards. The first card is the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck<C = Card> {
    cards: VecDeque<C>,
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl Default for Deck<Card> {
    /// The 66-card parade deck, in color and rank order.
    fn default() -> Self {
        iproduct!(Color::all_colors(), Rank::all_ranks())
            .map(|(&color, rank)| Card { color, rank })
            .collect()
    }
}

impl Deck<Card> {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 66;

    /// Creates a full deck, shuffled with `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if there are no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop_front()
    }

    /// Removes up to `n` cards from the top of the deck.
    pub fn take(&mut self, n: usize) -> Vec<C> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Cuts the deck at a random position, moving the bottom part to the top.
    pub fn cut<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cards.len() < 2 {
            return;
        }
        let at = rng.gen_range(1..self.cards.len());
        self.cards.rotate_left(at);
    }

    /// Discards every remaining card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterates over the remaining cards, from the top.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.cards.iter()
    }
}
