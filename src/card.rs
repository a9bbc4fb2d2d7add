//! Parade cards.

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use ansi_term::{ANSIString, Colour};
use serde::{Deserialize, Serialize};

/// Card color, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Black,
}
impl Color {
    /// All colors, in scoring order.
    pub fn all_colors() -> &'static [Color; 6] {
        static COLORS: [Color; 6] = [
            Color::Red,
            Color::Blue,
            Color::Green,
            Color::Yellow,
            Color::Purple,
            Color::Black,
        ];
        &COLORS
    }

    /// Position of the color in scoring order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns an abbreviated name for the color.
    pub fn to_abbr(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Black => 'K',
        }
    }

    fn paint(self, s: String) -> ANSIString<'static> {
        match self {
            Color::Red => Colour::Red.paint(s),
            Color::Blue => Colour::Blue.paint(s),
            Color::Green => Colour::Green.paint(s),
            Color::Yellow => Colour::Yellow.paint(s),
            Color::Purple => Colour::Purple.paint(s),
            Color::Black => Colour::White.bold().paint(s),
        }
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Purple => "Purple",
            Color::Black => "Black",
        })
    }
}
impl TryFrom<char> for Color {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'R' | 'r' => Color::Red,
            'B' | 'b' => Color::Blue,
            'G' | 'g' => Color::Green,
            'Y' | 'y' => Color::Yellow,
            'P' | 'p' => Color::Purple,
            'K' | 'k' => Color::Black,
            _ => return Err(()),
        })
    }
}

/// Card rank, from 0 through 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);
impl Rank {
    pub const MAX: u8 = 10;

    /// Creates a rank, if `value` is within 0..=10.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// All ranks, ascending.
    pub fn all_ranks() -> impl Iterator<Item = Rank> + Clone {
        (0..=Self::MAX).map(Rank)
    }

    /// The face value of the rank.
    pub fn value(self) -> u8 {
        self.0
    }
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A parade card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card color.
    pub color: Color,
    /// Card rank.
    pub rank: Rank,
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.to_abbr(), self.rank)
    }
}
impl FromStr for Card {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let color = Color::try_from(chars.next().ok_or(())?)?;
        let rank = chars.as_str().parse::<u8>().map_err(|_| ())?;
        Card::new(color, rank).ok_or(())
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(|()| serde::de::Error::custom("not a parade card"))
    }
}
impl Card {
    /// Creates a new [`Card`], if `rank` is within 0..=10.
    pub fn new(color: Color, rank: u8) -> Option<Self> {
        Rank::new(rank).map(|rank| Self { color, rank })
    }

    /// The face value of the card.
    pub fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        self.color.paint(self.to_string())
    }

    /// The river ordering: color first, then face value ascending.
    pub fn river_key(self) -> (Color, Rank) {
        (self.color, self.rank)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for s in ["R0", "B7", "G10", "Y3", "P9", "K1"] {
            let card = Card::from_str(s).unwrap();
            assert_eq!(card.to_string(), s);
        }
    }

    #[test]
    fn test_parse_invalid() {
        for s in ["", "R", "X3", "R11", "Rx", "10R"] {
            assert!(Card::from_str(s).is_err(), "{s}");
        }
    }

    #[test]
    fn test_new() {
        assert_eq!(Card::new(Color::Black, 0).map(|c| c.value()), Some(0));
        assert_eq!(Card::new(Color::Red, 10).map(|c| c.to_string()), Some("R10".into()));
        assert_eq!(Card::new(Color::Red, 11), None);
    }

    #[test]
    fn test_color_order() {
        let colors = Color::all_colors();
        assert!(colors.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Color::Black.index(), 5);
    }

    #[test]
    fn test_serde() {
        let card = Card::new(Color::Purple, 10).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"P10\"");
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
