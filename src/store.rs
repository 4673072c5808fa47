#![cfg(feature = "std")]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;

use crate::session::{PlayerId, Session, SessionId};

/// Persistence for sessions. Sessions are never deleted through this trait.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Allocate an identifier for a new session.
    async fn next_id(&self) -> anyhow::Result<SessionId>;
    /// The player's `Active` session, if any.
    async fn load_active(&self, player: PlayerId) -> anyhow::Result<Option<Session>>;
    async fn load(&self, id: SessionId) -> anyhow::Result<Option<Session>>;
    /// Insert or overwrite by session id.
    async fn save(&self, session: &Session) -> anyhow::Result<()>;
    /// Every session of the player, newest first.
    async fn history(&self, player: PlayerId) -> anyhow::Result<Vec<Session>>;
}

/// Process-local store, used by the CLI, the simulator and tests.
pub struct InMemoryStore {
    next: AtomicU64,
    sessions: Mutex<BTreeMap<SessionId, Session>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Snapshot of every stored session in id order.
    pub fn sessions(&self) -> anyhow::Result<Vec<Session>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        Ok(sessions.values().cloned().collect())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemoryStore {
    async fn next_id(&self) -> anyhow::Result<SessionId> {
        Ok(SessionId(self.next.fetch_add(1, Ordering::SeqCst)))
    }

    async fn load_active(&self, player: PlayerId) -> anyhow::Result<Option<Session>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        Ok(sessions
            .values()
            .rev()
            .find(|s| s.player() == player && s.is_active())
            .cloned())
    }

    async fn load(&self, id: SessionId) -> anyhow::Result<Option<Session>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        Ok(sessions.get(&id).cloned())
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn history(&self, player: PlayerId) -> anyhow::Result<Vec<Session>> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| anyhow!("session store lock poisoned"))?;
        Ok(sessions
            .values()
            .rev()
            .filter(|s| s.player() == player)
            .cloned()
            .collect())
    }
}
