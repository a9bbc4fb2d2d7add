//! A player's river: the pile of collected cards that is scored at the end of the game.

use std::fmt::Display;

use delegate::delegate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Collected cards, kept sorted by color and then by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct River {
    cards: Vec<Card>,
}

impl Display for River {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.cards.iter().join(" "))
    }
}

impl River {
    delegate! {
        to self.cards {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Card>;
        }
    }

    /// Adds a card to the river. The river is re-sorted by [`River::sort`].
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Restores the river ordering.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|c| c.river_key());
    }

    /// Counts the cards of each color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for card in &self.cards {
            counts[card.color.index()] += 1;
        }
        counts
    }

    /// Returns true if the river holds at least one card of every color.
    pub fn has_all_colors(&self) -> bool {
        self.color_counts().iter().all(|&n| n > 0)
    }

    /// Counts the cards of a single color.
    pub fn count(&self, color: Color) -> usize {
        self.cards.iter().filter(|c| c.color == color).count()
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn river(cards: &[&str]) -> River {
        let mut river = River::default();
        for s in cards {
            river.push(Card::from_str(s).unwrap());
        }
        river.sort();
        river
    }

    #[test]
    fn test_sorted() {
        let r = river(&["K3", "R10", "B2", "R1", "K0", "Y5"]);
        assert_eq!(r.to_string(), "[R1 R10 B2 Y5 K0 K3]");
    }

    #[test]
    fn test_all_colors() {
        let mut r = river(&["R1", "B1", "G1", "Y1", "P1"]);
        assert!(!r.has_all_colors());
        r.push(Card::from_str("K9").unwrap());
        r.sort();
        assert!(r.has_all_colors());
        assert_eq!(r.color_counts(), [1; 6]);
        assert_eq!(r.count(Color::Black), 1);
    }
}
