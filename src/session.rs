//! Delivery of player-visible messages.
//!
//! The engine doesn't know whether a player sits at the local console or across a network
//! connection. It hands every message to a [`Messenger`], either addressed to one session or
//! broadcast to all of them.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::mpsc::Sender;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Identifies the session through which a player receives messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub usize);

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A message sink for player-visible output.
pub trait Messenger {
    /// Sends a message to a single session.
    fn unicast(&self, to: SessionId, message: &str);

    /// Sends a message to every session.
    fn broadcast(&self, message: &str);
}

/// Prints broadcasts, and private messages for local sessions, to standard output.
#[derive(Debug, Default)]
pub struct ConsoleMessenger {
    /// Sessions whose private messages are printed.
    local: Vec<SessionId>,
}

impl ConsoleMessenger {
    /// Creates a console messenger that prints private messages for the `local` sessions only.
    pub fn new(local: Vec<SessionId>) -> Self {
        Self { local }
    }

    fn is_local(&self, session: SessionId) -> bool {
        self.local.contains(&session)
    }
}

impl Messenger for ConsoleMessenger {
    fn unicast(&self, to: SessionId, message: &str) {
        if self.is_local(to) {
            println!("{message}");
        }
    }

    fn broadcast(&self, message: &str) {
        println!("{message}");
    }
}

/// Queues messages per session, for a transport to drain.
#[derive(Debug, Default)]
pub struct Outboxes {
    outboxes: Mutex<HashMap<SessionId, Sender<String>>>,
}

impl Outboxes {
    /// Registers the outgoing queue for a session, replacing any previous one.
    pub fn register(&self, session: SessionId, outbox: Sender<String>) {
        self.lock().insert(session, outbox);
    }

    /// Forgets a session.
    pub fn unregister(&self, session: SessionId) {
        self.lock().remove(&session);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, Sender<String>>> {
        self.outboxes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Messenger for Outboxes {
    fn unicast(&self, to: SessionId, message: &str) {
        let mut outboxes = self.lock();
        let failed = outboxes
            .get(&to)
            .map(|outbox| outbox.send(message.to_string()).is_err());
        match failed {
            Some(true) => {
                log::warn!("failed unicast to {to}, dropping session");
                outboxes.remove(&to);
            }
            Some(false) => (),
            None => log::debug!("no outbox for {to}"),
        }
    }

    fn broadcast(&self, message: &str) {
        let mut outboxes = self.lock();
        let failed: Vec<SessionId> = outboxes
            .iter()
            .filter(|(_, outbox)| outbox.send(message.to_string()).is_err())
            .map(|(&session, _)| session)
            .collect();
        for session in failed {
            log::warn!("failed broadcast to {session}, dropping session");
            outboxes.remove(&session);
        }
    }
}

/// Records every message, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<(Option<SessionId>, String)>>,
}

#[cfg(test)]
impl Recorder {
    /// All recorded messages, in order. Broadcasts have no session.
    pub fn messages(&self) -> Vec<(Option<SessionId>, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Recorded broadcasts, in order.
    pub fn broadcasts(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|(to, msg)| to.is_none().then_some(msg))
            .collect()
    }
}

#[cfg(test)]
impl Messenger for Recorder {
    fn unicast(&self, to: SessionId, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Some(to), message.to_string()));
    }

    fn broadcast(&self, message: &str) {
        self.messages.lock().unwrap().push((None, message.to_string()));
    }
}
