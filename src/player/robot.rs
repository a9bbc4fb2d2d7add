//! Robot players

use std::thread;
use std::time::Duration;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Decide, Decision, Request};

/// Picks any card, at random.
#[derive(Debug)]
pub struct Random {
    rng: StdRng,
    think: Duration,
}

impl Default for Random {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Random {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            think: Duration::ZERO,
        }
    }

    /// Pauses for `think` before each decision, for the benefit of human onlookers.
    pub fn with_think_time(mut self, think: Duration) -> Self {
        self.think = think;
        self
    }
}

impl Decide for Random {
    fn decide(&mut self, request: &Request<'_>) -> Decision {
        if !self.think.is_zero() {
            thread::sleep(self.think);
        }
        Decision::chosen(self.rng.gen_range(0..request.hand.len()))
    }
}

/// Always picks the highest card in hand, both to play and to discard.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl Decide for Greedy {
    fn decide(&mut self, request: &Request<'_>) -> Decision {
        let index = request
            .hand
            .iter()
            .enumerate()
            .sorted_by_key(|(_, c)| c.rank)
            .last()
            .map_or(0, |(i, _)| i);
        Decision::chosen(index)
    }
}
