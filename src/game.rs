//! Game management.
//!
//! A game is played by 2 to 8 players sharing one deck and one parade. Players take turns in
//! seat order until a river holds every color or the deck runs out. Then every other player
//! takes one last turn, everyone discards two cards, the rest of every hand joins its river,
//! and the rivers are scored.

use rand::Rng;

use crate::deck::Deck;
use crate::error::{SetupError, TurnError};
use crate::event::Event;
use crate::parade::Parade;
use crate::player::Player;
use crate::score::Standings;
use crate::session::Messenger;
use crate::transcript::{ScoreRecord, SeatRecord, Transcript};

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 5;
/// Cards dealt to the opening parade.
pub const PARADE_SIZE: usize = 6;
/// Cards each player discards at the end of the game.
pub const DISCARDS: usize = 2;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Everything that changes during a game.
#[derive(Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) parade: Parade,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) game_over: bool,
}

impl GameState {
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn parade(&self) -> &Parade {
        &self.parade
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The seat whose turn it is.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns true once the end of the game has been triggered.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

/// A game of parade.
pub struct Game<M> {
    pub(crate) state: GameState,
    pub(crate) messenger: M,
    pub(crate) timed: bool,
    pub(crate) turn: u64,
    pub(crate) transcript: Transcript,
    standings: Option<Standings>,
}

/// Notifies all players of an event.
pub(crate) fn broadcast<M: Messenger + ?Sized>(messenger: &M, event: &Event) {
    messenger.broadcast(&event.to_string());
}

impl<M: Messenger> Game<M> {
    /// Deals a new game from `deck`: a hand for each player in seat order, then the parade.
    pub fn new(mut players: Vec<Player>, mut deck: Deck, messenger: M) -> Result<Self, SetupError> {
        let count = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }
        let need = count * HAND_SIZE + PARADE_SIZE;
        if deck.len() < need {
            return Err(SetupError::DeckTooSmall {
                have: deck.len(),
                need,
            });
        }

        let mut transcript = Transcript::default();
        for player in &mut players {
            let hand = deck.take(HAND_SIZE);
            transcript.seats.push(SeatRecord {
                name: player.name().to_string(),
                hand: hand.clone(),
            });
            for card in hand {
                player.draw_card(card);
            }
        }
        let parade: Parade = deck.take(PARADE_SIZE).into_iter().collect();
        transcript.parade = parade.iter().copied().collect();

        Ok(Self {
            state: GameState {
                deck,
                parade,
                players,
                current: 0,
                game_over: false,
            },
            messenger,
            timed: false,
            turn: 0,
            transcript,
            standings: None,
        })
    }

    /// Deals a new game from a freshly shuffled and cut deck.
    pub fn shuffled<R: Rng + ?Sized>(
        players: Vec<Player>,
        messenger: M,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let mut deck = Deck::new(rng);
        deck.cut(rng);
        Self::new(players, deck, messenger)
    }

    /// Enables the speed bonus.
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Records the seed the deck was shuffled with.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.transcript.seed = seed;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The final standings, once the game has been scored.
    pub fn standings(&self) -> Option<&Standings> {
        self.standings.as_ref()
    }

    /// Empties the deck, so that the next draw ends the game.
    pub fn force_final_phase(&mut self) {
        log::info!("deck cleared with {} cards left", self.state.deck.len());
        self.state.deck.clear();
    }

    /// Plays the game to the end, and returns the standings.
    pub fn run(&mut self) -> Result<&Standings, TurnError> {
        if self.standings.is_some() {
            return Err(TurnError::GameOver);
        }
        broadcast(&self.messenger, &Event::Parade(self.state.parade.clone()));
        while !self.play_turn()? {
            self.advance();
        }
        self.finish()
    }

    /// Runs the end of the game, once it has been triggered by the current player.
    fn finish(&mut self) -> Result<&Standings, TurnError> {
        let count = self.state.players.len();
        let trigger = self.state.current;
        log::info!(
            "game over after {} turns, triggered by {}",
            self.turn,
            self.state.players[trigger].name()
        );
        broadcast(
            &self.messenger,
            &Event::LastRound {
                trigger: self.state.players[trigger].name().to_string(),
            },
        );
        for _ in 1..count {
            self.advance();
            self.final_turn()?;
        }

        broadcast(&self.messenger, &Event::DiscardRound);
        for _ in 0..count {
            self.advance();
            for _ in 0..DISCARDS {
                self.discard_turn()?;
            }
        }

        for player in &mut self.state.players {
            let cards = player.take_hand();
            player.add_all_to_river(cards.iter().copied());
            broadcast(
                &self.messenger,
                &Event::Flushed {
                    player: player.name().to_string(),
                    cards,
                },
            );
            broadcast(
                &self.messenger,
                &Event::River {
                    player: player.name().to_string(),
                    river: player.river().clone(),
                },
            );
        }

        Ok(self.score())
    }

    fn score(&mut self) -> &Standings {
        let rivers: Vec<_> = self.state.players.iter().map(|p| p.river()).collect();
        let mut standings = Standings::tally(&rivers);
        if self.timed {
            let bonuses: Vec<u32> = self.state.players.iter().map(|p| p.bonus()).collect();
            log::debug!("speed bonuses: {bonuses:?}");
            standings.apply_speed_bonuses(&bonuses);
        }

        let records: Vec<ScoreRecord> = standings
            .iter()
            .map(|(score, seats)| ScoreRecord {
                score,
                players: seats
                    .iter()
                    .map(|&s| self.state.players[s].name().to_string())
                    .collect(),
            })
            .collect();
        broadcast(
            &self.messenger,
            &Event::Standings(
                records
                    .iter()
                    .map(|r| (r.score, r.players.clone()))
                    .collect(),
            ),
        );
        self.transcript.standings = records;
        self.standings.insert(standings)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::action::ActionType;
    use crate::card::Card;
    use crate::player::{Greedy, Random, Scripted, Strategy};
    use crate::session::{Recorder, SessionId};

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn scripted(name: &str, seat: usize, choices: &[usize]) -> Player {
        Player::new(
            name,
            SessionId(seat),
            Strategy::Scripted(Scripted::new(choices.iter().copied())),
        )
    }

    /// Two players, one card left in the deck after the deal.
    fn scripted_game() -> Game<Recorder> {
        let deck: Deck = [
            // Ann
            "R5", "B1", "G2", "Y3", "P4",
            // Bo
            "K6", "R0", "B7", "G8", "Y9",
            // Parade
            "R1", "B2", "G3", "Y4", "P5", "K6",
            // Deck
            "K1",
        ]
        .iter()
        .map(|s| card(s))
        .collect();
        let players = vec![
            // Play B1, play K1 last, discard G2 and P4.
            scripted("Ann", 0, &[1, 4, 1, 2]),
            // Play R0, discard K6 and G8.
            scripted("Bo", 1, &[1, 0, 1]),
        ];
        Game::new(players, deck, Recorder::default()).unwrap()
    }

    #[test]
    fn test_scripted_game() {
        let mut game = scripted_game();
        let standings = game.run().unwrap().clone();

        let state = game.state();
        let ann = &state.players()[0];
        let bo = &state.players()[1];
        assert_eq!(ann.river().to_string(), "[R5 B1 B2 Y3 K6]");
        assert_eq!(bo.river().to_string(), "[R1 B7 Y9]");
        assert!(ann.hand().is_empty());
        assert!(bo.hand().is_empty());
        assert_eq!(state.parade().to_string(), "[K1 R0 G3 Y4 P5]");

        // Ann holds every majority she has a card in: 5 cards at one point each. Bo shares red
        // and yellow, but Ann has more blue, so B7 counts for its face value.
        assert_eq!(standings.score(0), Some(5));
        assert_eq!(standings.score(1), Some(9));
        let (best, winners) = standings.winners().unwrap();
        assert_eq!(best, 5);
        assert_eq!(winners.iter().copied().collect::<Vec<_>>(), vec![0]);
        assert_eq!(standings.iter().map(|(s, seats)| s * seats.len() as i32).sum::<i32>(), 14);
    }

    #[test]
    fn test_scripted_game_sequence() {
        let mut game = scripted_game();
        game.run().unwrap();

        let actions: Vec<(usize, ActionType, String)> = game
            .transcript()
            .actions
            .iter()
            .map(|a| (a.seat, a.action, a.card.to_string()))
            .collect();
        let expect = vec![
            (0, ActionType::Play, "B1"),
            (1, ActionType::Play, "R0"),
            // Bo emptied the deck; only Ann gets a last turn.
            (0, ActionType::Play, "K1"),
            // The trigger discards first.
            (1, ActionType::Discard, "K6"),
            (1, ActionType::Discard, "G8"),
            (0, ActionType::Discard, "G2"),
            (0, ActionType::Discard, "P4"),
        ];
        let expect: Vec<(usize, ActionType, String)> = expect
            .into_iter()
            .map(|(s, a, c)| (s, a, c.to_string()))
            .collect();
        assert_eq!(actions, expect);
        assert_eq!(game.transcript().actions[2].collected, vec![card("B1"), card("K6")]);

        let broadcasts = game.messenger().broadcasts();
        assert!(broadcasts.contains(&"Last round: everyone but Bo plays one more card".into()));
        assert_eq!(
            broadcasts.last().unwrap(),
            "Final scores:\n  1. Ann - 5\n  2. Bo - 9"
        );
        assert_eq!(game.transcript().standings[0].players, vec!["Ann".to_string()]);
    }

    #[test]
    fn test_run_twice() {
        let mut game = scripted_game();
        game.run().unwrap();
        assert_matches!(game.run(), Err(TurnError::GameOver));
    }

    #[test]
    fn test_final_phase_order() {
        // Four hands, the parade, and two spare cards: seats 0 and 1 draw, seat 2 runs the deck
        // dry and ends the game.
        let deck: Deck = Deck::<Card>::default().iter().copied().take(4 * 5 + 6 + 2).collect();
        let players = vec![
            scripted("Ann", 0, &[0; 4]),
            scripted("Bo", 1, &[0; 4]),
            scripted("Cy", 2, &[0; 3]),
            scripted("Di", 3, &[0; 4]),
        ];
        let mut game = Game::new(players, deck, Recorder::default()).unwrap();
        game.run().unwrap();

        let actions: Vec<(usize, ActionType)> = game
            .transcript()
            .actions
            .iter()
            .map(|a| (a.seat, a.action))
            .collect();
        use ActionType::{Discard, Play};
        assert_eq!(
            actions,
            vec![
                (0, Play),
                (1, Play),
                (2, Play),
                // Last round: everyone but the trigger, wrapping past the last seat.
                (3, Play),
                (0, Play),
                (1, Play),
                // Discards start with the trigger.
                (2, Discard),
                (2, Discard),
                (3, Discard),
                (3, Discard),
                (0, Discard),
                (0, Discard),
                (1, Discard),
                (1, Discard),
            ]
        );

        let broadcasts = game.messenger().broadcasts();
        assert!(broadcasts.contains(&"The deck is empty; Cy ends the game".into()));
        assert!(broadcasts.contains(&"Last round: everyone but Cy plays one more card".into()));
        let last_turns: Vec<&String> = broadcasts
            .iter()
            .filter(|m| m.ends_with("(last turn) =="))
            .collect();
        assert_eq!(
            last_turns,
            vec![
                "== Turn 4: Di (last turn) ==",
                "== Turn 5: Ann (last turn) ==",
                "== Turn 6: Bo (last turn) ==",
            ]
        );

        let state = game.state();
        assert!(state.players().iter().all(|p| p.hand().is_empty()));
        let seated: usize = game
            .standings()
            .unwrap()
            .iter()
            .map(|(_, seats)| seats.len())
            .sum();
        assert_eq!(seated, 4);
    }

    #[test]
    fn test_robot_games_finish() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let count = 2 + (seed as usize % 7);
            let players = (0..count)
                .map(|i| {
                    let strategy = if i % 2 == 0 {
                        Strategy::Greedy(Greedy)
                    } else {
                        Strategy::Random(Random::new(StdRng::seed_from_u64(seed * 10 + i as u64)))
                    };
                    Player::new(format!("P{i}"), SessionId(i), strategy)
                })
                .collect();
            let mut game = Game::shuffled(players, Recorder::default(), &mut rng)
                .unwrap()
                .with_seed(Some(seed));
            let standings = game.run().unwrap().clone();

            let seated: usize = standings.iter().map(|(_, seats)| seats.len()).sum();
            assert_eq!(seated, count);
            let state = game.state();
            assert!(state.players().iter().all(|p| p.hand().is_empty()));
            // Every card is somewhere.
            let total = state.deck().len()
                + state.parade().len()
                + state.players().iter().map(|p| p.river().len()).sum::<usize>()
                + count * DISCARDS;
            assert_eq!(total, Deck::<Card>::SIZE);
        }
    }
}
