//! The turn engine.
//!
//! A play turn moves through these steps:
//!
//!  1. Awaiting input: the acting player is shown their hand and chooses a card.
//!  2. Card placed: the card leaves the hand and joins the front of the parade.
//!  3. Parade updated: collected cards move from the parade into the player's river. A river
//!     that holds every color ends the game.
//!  4. Draw or end: the player draws a replacement card. If the deck is empty, the game ends
//!     instead. Last-round turns skip this step.
//!
//! A discard turn only removes the chosen card from the player's hand.

use std::time::Instant;

use crate::action::{Action, ActionType};
use crate::card::Card;
use crate::error::TurnError;
use crate::event::Event;
use crate::game::{broadcast, Game};
use crate::player::Decision;
use crate::score::speed_bonus;
use crate::session::Messenger;

impl<M: Messenger> Game<M> {
    /// Plays one turn for the current player, and returns true if the game is now over.
    pub fn play_turn(&mut self) -> Result<bool, TurnError> {
        self.take_turn(false)
    }

    /// Plays a last-round turn for the current player, without drawing.
    pub(crate) fn final_turn(&mut self) -> Result<(), TurnError> {
        self.take_turn(true).map(|_| ())
    }

    /// Passes the turn to the next seat.
    pub fn advance(&mut self) {
        self.state.current = (self.state.current + 1) % self.state.players.len();
    }

    fn take_turn(&mut self, last: bool) -> Result<bool, TurnError> {
        let seat = self.state.current;
        self.begin(seat, last);

        let decision = self.await_input(seat, ActionType::Play)?;

        let player = &mut self.state.players[seat];
        let card = player.play_card(decision.index)?;

        let collected = self.state.parade.play(card);
        player.add_all_to_river(collected.iter().copied());
        log::debug!(
            "{} played {card}, collected {} card(s)",
            player.name(),
            collected.len()
        );
        let name = player.name().to_string();
        let all_colors = player.river().has_all_colors();
        let river = player.river().clone();

        self.transcript
            .push(Action::new(seat, ActionType::Play, card).with_collected(collected.clone()));
        broadcast(
            &self.messenger,
            &Event::Played {
                player: name.clone(),
                card,
                collected,
            },
        );
        broadcast(
            &self.messenger,
            &Event::River {
                player: name.clone(),
                river,
            },
        );
        broadcast(&self.messenger, &Event::Parade(self.state.parade.clone()));

        if all_colors && !self.state.game_over {
            self.state.game_over = true;
            broadcast(&self.messenger, &Event::AllColors { player: name });
        }

        if !last {
            self.draw_or_end(seat);
        }
        Ok(self.state.game_over)
    }

    /// Has the current player discard a card from their hand.
    pub fn discard_turn(&mut self) -> Result<Card, TurnError> {
        let seat = self.state.current;
        self.state.players[seat].begin_turn();
        let decision = self.await_input(seat, ActionType::Discard)?;
        let player = &mut self.state.players[seat];
        let card = player.play_card(decision.index)?;
        let name = player.name().to_string();
        self.transcript
            .push(Action::new(seat, ActionType::Discard, card));
        broadcast(&self.messenger, &Event::Discarded { player: name, card });
        Ok(card)
    }

    fn begin(&mut self, seat: usize, last: bool) {
        self.turn += 1;
        let player = &mut self.state.players[seat];
        player.begin_turn();
        log::debug!("turn {}: {}", self.turn, player.name());
        broadcast(
            &self.messenger,
            &Event::Turn {
                number: self.turn,
                player: player.name().to_string(),
                last,
            },
        );
    }

    fn await_input(&mut self, seat: usize, action: ActionType) -> Result<Decision, TurnError> {
        let player = &mut self.state.players[seat];
        let hand = Event::Hand(player.hand().to_vec());
        self.messenger.unicast(player.session(), &hand.to_string());

        let start = Instant::now();
        let decision = match action {
            ActionType::Play => player.choose_card_to_play(&self.state.parade)?,
            ActionType::Discard => player.choose_card_to_discard(&self.state.parade)?,
        };
        if self.timed && player.strategy().is_human() && !decision.fallback {
            let bonus = speed_bonus(start.elapsed());
            log::debug!("{}: speed bonus {bonus}", player.name());
            player.add_bonus(bonus);
        }
        Ok(decision)
    }

    fn draw_or_end(&mut self, seat: usize) {
        let player = &mut self.state.players[seat];
        match self.state.deck.draw() {
            Some(card) => {
                player.draw_card(card);
                broadcast(
                    &self.messenger,
                    &Event::Drew {
                        player: player.name().to_string(),
                        remaining: self.state.deck.len(),
                    },
                );
            }
            None => {
                self.state.game_over = true;
                broadcast(
                    &self.messenger,
                    &Event::DeckExhausted {
                        player: player.name().to_string(),
                    },
                );
            }
        }
    }
}
