//! A scripted player, for testing.

use std::collections::VecDeque;

use super::{Decide, Decision, Request};

/// Plays a predetermined sequence of hand indices.
#[derive(Debug, Default)]
pub struct Scripted {
    choices: VecDeque<usize>,
}

impl Scripted {
    pub fn new<I: IntoIterator<Item = usize>>(choices: I) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl Decide for Scripted {
    fn decide(&mut self, request: &Request<'_>) -> Decision {
        let index = self
            .choices
            .pop_front()
            .unwrap_or_else(|| panic!("{}: script exhausted", request.name));
        Decision::chosen(index)
    }
}
