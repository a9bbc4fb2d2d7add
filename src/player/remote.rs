//! Networked human player.

use std::thread;
use std::time::Duration;

use super::{parse_choice, Decide, Decision, Request};
use crate::input::{Delivery, Mailbox, Postbox, DEFAULT_CAPACITY};

/// How long to wait for a remote player's choice.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long to pause before choosing for a player whose session is closed.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(1);

/// A human player whose choices arrive through a [`Mailbox`].
///
/// The player is never waited on for longer than the configured timeout. If nothing usable
/// arrives in time, the first card in hand is chosen for them.
#[derive(Debug)]
pub struct Remote {
    mailbox: Mailbox,
    timeout: Duration,
    grace: Duration,
}

impl Remote {
    pub fn new(mailbox: Mailbox, timeout: Duration, grace: Duration) -> Self {
        Self {
            mailbox,
            timeout,
            grace,
        }
    }

    /// Creates a remote player, along with the [`Postbox`] its transport delivers input to.
    pub fn connect(timeout: Duration, grace: Duration) -> (Self, Postbox) {
        let (mailbox, postbox) = Mailbox::new(DEFAULT_CAPACITY);
        (Self::new(mailbox, timeout, grace), postbox)
    }
}

impl Decide for Remote {
    fn begin_turn(&mut self) {
        self.mailbox.open_turn();
    }

    fn decide(&mut self, request: &Request<'_>) -> Decision {
        match self.mailbox.wait(self.timeout) {
            Delivery::Input(raw) => match parse_choice(&raw, request.hand.len()) {
                Some(index) => Decision::chosen(index),
                None => {
                    log::warn!("{}: ignoring malformed input {raw:?}", request.name);
                    Decision::fallback()
                }
            },
            Delivery::Timeout => {
                log::warn!(
                    "{}: no input within {:?}, using first card",
                    request.name,
                    self.timeout
                );
                Decision::fallback()
            }
            Delivery::Closed => {
                log::info!("{}: session closed, using first card", request.name);
                thread::sleep(self.grace);
                Decision::fallback()
            }
        }
    }
}
