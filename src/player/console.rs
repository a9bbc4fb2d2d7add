//! Simple console interactive player.

use std::io::{BufRead, Write};

use ansi_term::{ANSIString, ANSIStrings};

use super::{parse_choice, Decide, Decision, Request};
use crate::action::ActionType;
use crate::card::Card;

pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console {
    /// Creates a console player on stdin and stdout.
    pub fn new(color: bool) -> Self {
        let input = Box::new(std::io::BufReader::new(std::io::stdin()));
        let output = Box::new(std::io::stdout());
        Self::with_io(input, output, color)
    }

    /// Creates a console player on arbitrary streams.
    pub fn with_io(
        input: Box<dyn BufRead + Send>,
        output: Box<dyn Write + Send>,
        color: bool,
    ) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_cards<'a, I: IntoIterator<Item = &'a Card>>(&self, cards: I) -> String {
        let mut parts: Vec<ANSIString> = vec!["[".into()];
        for (ii, card) in cards.into_iter().enumerate() {
            if ii > 0 {
                parts.push(" ".into());
            }
            parts.push(card.to_ansi_string());
        }
        parts.push("]".into());
        self.format(&ANSIStrings(&parts))
    }

    /// Prompts until a valid choice is entered. Returns `None` if input is closed.
    fn prompt(&mut self, prompt: &str, hand_size: usize) -> Option<usize> {
        loop {
            let mut buffer = String::new();
            write!(self.output, "{prompt} [1-{hand_size}] ").ok()?;
            self.output.flush().ok()?;
            if self.input.read_line(&mut buffer).ok()? == 0 {
                return None;
            }
            let trimmed = buffer.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(index) = parse_choice(trimmed, hand_size) {
                return Some(index);
            }
            writeln!(self.output, "Invalid input, try again").ok()?;
        }
    }
}

impl Decide for Console {
    fn decide(&mut self, request: &Request<'_>) -> Decision {
        // The numbered hand arrives as a private message, just before this prompt.
        let river = self.format_cards(request.river.iter());
        let _ = writeln!(self.output, "{}, your river: {river}", request.name);
        let prompt = match request.action {
            ActionType::Play => "Play which card?",
            ActionType::Discard => "Discard which card?",
        };
        match self.prompt(prompt, request.hand.len()) {
            Some(index) => Decision::chosen(index),
            None => {
                log::warn!("{}: console input closed, using first card", request.name);
                Decision::fallback()
            }
        }
    }
}
