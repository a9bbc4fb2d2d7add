//! End of game scoring.
//!
//! For each color, whoever holds the most cards of that color in their river has the majority.
//! Ties share it. Majority cards are worth one point each; every other card is worth its face
//! value. The lowest score wins.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::card::Color;
use crate::river::River;

/// For each river, which colors it holds the majority in, indexed by [`Color::index`].
pub fn majorities(rivers: &[&River]) -> Vec<[bool; 6]> {
    let counts: Vec<[usize; 6]> = rivers.iter().map(|r| r.color_counts()).collect();
    let mut max = [0; 6];
    for c in &counts {
        for (m, &n) in max.iter_mut().zip(c) {
            *m = (*m).max(n);
        }
    }
    counts
        .iter()
        .map(|c| {
            let mut majority = [false; 6];
            for &color in Color::all_colors() {
                let i = color.index();
                majority[i] = c[i] > 0 && c[i] == max[i];
            }
            majority
        })
        .collect()
}

/// Scores a river, given the colors it holds the majority in.
pub fn river_score(river: &River, majority: &[bool; 6]) -> i32 {
    river
        .iter()
        .map(|c| {
            if majority[c.color.index()] {
                1
            } else {
                i32::from(c.value())
            }
        })
        .sum()
}

/// The deduction earned by an accumulated speed bonus: `floor(log2(bonus))`, or nothing for a
/// zero bonus.
pub fn deduction(bonus: u32) -> i32 {
    match bonus.checked_ilog2() {
        Some(n) => n as i32,
        None => 0,
    }
}

/// The speed bonus earned by a single decision in a timed game.
pub fn speed_bonus(latency: Duration) -> u32 {
    match latency.as_secs_f64() {
        t if t < 3.0 => 4,
        t if t < 6.0 => 2,
        t if t < 10.0 => 1,
        _ => 0,
    }
}

/// Final scores. Each score maps to the seats that earned it, best (lowest) first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    buckets: BTreeMap<i32, BTreeSet<usize>>,
}

impl Standings {
    /// Scores each river. Seats are numbered in iteration order.
    pub fn tally(rivers: &[&River]) -> Self {
        let mut buckets: BTreeMap<i32, BTreeSet<usize>> = BTreeMap::new();
        for (seat, (river, majority)) in rivers.iter().zip(majorities(rivers)).enumerate() {
            let score = river_score(river, &majority);
            buckets.entry(score).or_default().insert(seat);
        }
        Self { buckets }
    }

    /// Applies each seat's speed bonus deduction, indexed by seat.
    pub fn apply_speed_bonuses(&mut self, bonuses: &[u32]) {
        for (seat, &bonus) in bonuses.iter().enumerate() {
            let deduction = deduction(bonus);
            if deduction == 0 {
                continue;
            }
            let Some(score) = self.score(seat) else {
                continue;
            };
            if let Some(bucket) = self.buckets.get_mut(&score) {
                bucket.remove(&seat);
                if bucket.is_empty() {
                    self.buckets.remove(&score);
                }
            }
            self.buckets
                .entry(score - deduction)
                .or_default()
                .insert(seat);
        }
    }

    /// The score for a seat.
    pub fn score(&self, seat: usize) -> Option<i32> {
        self.buckets
            .iter()
            .find_map(|(&score, seats)| seats.contains(&seat).then_some(score))
    }

    /// The best score, and the seats that share it.
    pub fn winners(&self) -> Option<(i32, &BTreeSet<usize>)> {
        self.buckets.iter().next().map(|(&s, seats)| (s, seats))
    }

    /// Iterates over scores, best first.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &BTreeSet<usize>)> {
        self.buckets.iter().map(|(&s, seats)| (s, seats))
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::card::Card;

    fn river(cards: &[&str]) -> River {
        let mut river = River::default();
        for s in cards {
            river.push(Card::from_str(s).unwrap());
        }
        river.sort();
        river
    }

    #[test]
    fn test_tied_majority() {
        let a = river(&["R1", "R2", "R3"]);
        let b = river(&["R4", "R5", "R6"]);
        let c = river(&["R7", "B1"]);
        let m = majorities(&[&a, &b, &c]);
        let red = Color::Red.index();
        assert!(m[0][red]);
        assert!(m[1][red]);
        assert!(!m[2][red]);
        // Sole holder of blue.
        assert!(m[2][Color::Blue.index()]);
        // Nobody holds a majority in a color nobody collected.
        assert!(m.iter().all(|m| !m[Color::Green.index()]));
    }

    #[test]
    fn test_river_score() {
        let r = river(&["G7"]);
        let mut majority = [false; 6];
        assert_eq!(river_score(&r, &majority), 7);
        majority[Color::Green.index()] = true;
        assert_eq!(river_score(&r, &majority), 1);
    }

    #[test]
    fn test_tally() {
        let a = river(&["R1", "R2", "R3", "B9"]); // red majority: 3 + 9 = 12
        let b = river(&["R4", "R5", "R6", "B1", "B2"]); // red + blue majority: 5
        let c = river(&["R7", "G0", "K10"]); // green + black majority: 1 + 7 + 1 = 9
        let standings = Standings::tally(&[&a, &b, &c]);
        let scores: Vec<(i32, Vec<usize>)> = standings
            .iter()
            .map(|(s, seats)| (s, seats.iter().copied().collect()))
            .collect();
        assert_eq!(scores, vec![(5, vec![1]), (9, vec![2]), (12, vec![0])]);
        assert_eq!(standings.winners().map(|(s, _)| s), Some(5));
        assert_eq!(standings.score(2), Some(9));
    }

    #[test]
    fn test_tally_ties_share_bucket() {
        let a = river(&["B3"]);
        let b = river(&["G3"]);
        let standings = Standings::tally(&[&a, &b]);
        // Both hold the sole majority in their color.
        let (score, seats) = standings.winners().unwrap();
        assert_eq!(score, 1);
        assert_eq!(seats.len(), 2);
    }

    #[test]
    fn test_deduction() {
        assert_eq!(deduction(0), 0);
        assert_eq!(deduction(1), 0);
        assert_eq!(deduction(2), 1);
        assert_eq!(deduction(7), 2);
        assert_eq!(deduction(8), 3);
        assert_eq!(deduction(40), 5);
    }

    #[test]
    fn test_speed_bonus() {
        assert_eq!(speed_bonus(Duration::from_millis(500)), 4);
        assert_eq!(speed_bonus(Duration::from_secs(4)), 2);
        assert_eq!(speed_bonus(Duration::from_secs(9)), 1);
        assert_eq!(speed_bonus(Duration::from_secs(30)), 0);
    }

    #[test]
    fn test_apply_speed_bonuses() {
        let a = river(&["B3", "B4"]); // 2
        let b = river(&["G5", "Y6"]); // 2
        let c = river(&["K9", "P9", "R2"]); // 3
        let mut standings = Standings::tally(&[&a, &b, &c]);
        assert_eq!(standings.score(0), Some(2));
        assert_eq!(standings.score(1), Some(2));
        standings.apply_speed_bonuses(&[0, 8, 4]);
        assert_eq!(standings.score(0), Some(2));
        assert_eq!(standings.score(1), Some(-1));
        assert_eq!(standings.score(2), Some(1));
        let buckets: Vec<i32> = standings.iter().map(|(s, _)| s).collect();
        assert_eq!(buckets, vec![-1, 1, 2]);
    }
}
