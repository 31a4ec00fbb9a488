//! Thread-safe handle for hosts that tick and take input on different threads
//!
//! Each method holds the lock for exactly one session operation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::session::{DropOutcome, LockEvent, Session};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn tick(&self, elapsed_ms: u32) -> Option<DropOutcome> {
        self.inner.lock().tick(elapsed_ms)
    }

    pub fn advance_to(&self, now: u64) -> Option<DropOutcome> {
        self.inner.lock().advance_to(now)
    }

    pub fn apply_action(&self, action: GameAction) -> bool {
        self.inner.lock().apply_action(action)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn score(&self) -> u32 {
        self.inner.lock().score()
    }

    pub fn take_last_event(&self) -> Option<LockEvent> {
        self.inner.lock().take_last_event()
    }

    /// Run `f` with the session locked
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}
