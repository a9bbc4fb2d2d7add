//! Hand-off of remote input to the game thread.
//!
//! Each remote player owns a [`Mailbox`], which is drained by the game thread. The transport
//! holds the matching [`Postbox`], and offers raw messages to it as they arrive. Every message
//! is stamped with the turn that was open when it was offered, so a message that arrives outside
//! of the player's turn window is never mistaken for a move.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default capacity of a mailbox.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug)]
struct Letter {
    turn: u64,
    raw: String,
}

#[derive(Debug, Default)]
struct Shared {
    turn: AtomicU64,
    closed: AtomicBool,
}

/// The outcome of waiting on a [`Mailbox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// A message arrived during the open turn.
    Input(String),
    /// Nothing arrived in time.
    Timeout,
    /// The session is gone.
    Closed,
}

/// The consuming end of a remote player's input channel.
#[derive(Debug)]
pub struct Mailbox {
    rx: Receiver<Letter>,
    shared: Arc<Shared>,
}

/// The producing end of a remote player's input channel. Cheap to clone, and safe to use from
/// any thread; offering never blocks.
#[derive(Debug, Clone)]
pub struct Postbox {
    tx: SyncSender<Letter>,
    shared: Arc<Shared>,
}

impl Mailbox {
    /// Creates a mailbox holding at most `capacity` pending messages.
    pub fn new(capacity: usize) -> (Mailbox, Postbox) {
        let (tx, rx) = mpsc::sync_channel(capacity);
        let shared = Arc::new(Shared::default());
        let postbox = Postbox {
            tx,
            shared: shared.clone(),
        };
        (Mailbox { rx, shared }, postbox)
    }

    /// The sequence number of the open turn.
    pub fn turn(&self) -> u64 {
        self.shared.turn.load(Ordering::SeqCst)
    }

    /// Returns true once the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Opens a new turn window, discarding anything that arrived before it.
    ///
    /// Pending letters are drained before the turn number moves on. A letter offered in between
    /// carries the old stamp, and is skipped by [`Mailbox::wait`].
    pub fn open_turn(&self) -> u64 {
        let stale = self.rx.try_iter().count();
        let turn = self.shared.turn.fetch_add(1, Ordering::SeqCst) + 1;
        if stale > 0 {
            log::debug!("turn {turn}: discarded {stale} stale message(s)");
        }
        turn
    }

    /// Waits up to `timeout` for a message stamped with the open turn.
    pub fn wait(&self, timeout: Duration) -> Delivery {
        if self.is_closed() {
            return Delivery::Closed;
        }
        let turn = self.turn();
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(letter) if letter.turn == turn => return Delivery::Input(letter.raw),
                Ok(letter) => {
                    log::debug!(
                        "turn {turn}: ignored message from turn {}: {:?}",
                        letter.turn,
                        letter.raw
                    );
                }
                Err(RecvTimeoutError::Timeout) => return Delivery::Timeout,
                Err(RecvTimeoutError::Disconnected) => return Delivery::Closed,
            }
        }
    }
}

impl Postbox {
    /// Offers a raw message. Returns false if the message was dropped, because the session is
    /// closed or the mailbox is full.
    pub fn offer<S: Into<String>>(&self, raw: S) -> bool {
        if self.shared.closed.load(Ordering::SeqCst) {
            return false;
        }
        let letter = Letter {
            turn: self.shared.turn.load(Ordering::SeqCst),
            raw: raw.into(),
        };
        match self.tx.try_send(letter) {
            Ok(()) => true,
            Err(TrySendError::Full(letter)) => {
                log::warn!("mailbox full, dropped {:?}", letter.raw);
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Marks the session as closed. Pending and future waits give up immediately.
    pub fn close(&self) {
        self.shared.closed.store(true, Ordering::SeqCst);
    }
}
