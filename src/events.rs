#![cfg(feature = "std")]
//! Lifecycle events for the behavioural scoring pipeline.
//!
//! Sinks are fire-and-forget: the session manager logs a failing sink and
//! carries on, so a scoring outage never undoes a move.

use std::sync::Mutex;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::resolver::OutcomeKind;
use crate::session::{PlayerId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        player: PlayerId,
        session: SessionId,
        campaign: Option<String>,
    },
    MovePlayed {
        player: PlayerId,
        session: SessionId,
        outcome: OutcomeKind,
    },
    GameWon {
        player: PlayerId,
        session: SessionId,
        moves: u32,
    },
}

impl GameEvent {
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::GameStarted { player, .. }
            | GameEvent::MovePlayed { player, .. }
            | GameEvent::GameWon { player, .. } => *player,
        }
    }

    pub fn session(&self) -> SessionId {
        match self {
            GameEvent::GameStarted { session, .. }
            | GameEvent::MovePlayed { session, .. }
            | GameEvent::GameWon { session, .. } => *session,
        }
    }

    /// Event name as the scoring engine knows it.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_start",
            GameEvent::MovePlayed { .. } => "game_play",
            GameEvent::GameWon { .. } => "game_win",
        }
    }
}

#[async_trait::async_trait]
pub trait EventSink: Send + Sync {
    async fn record(&self, event: GameEvent) -> anyhow::Result<()>;
}

/// Discards every event.
pub struct NullSink;

#[async_trait::async_trait]
impl EventSink for NullSink {
    async fn record(&self, _event: GameEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Keeps events in memory in arrival order.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl EventSink for RecordingSink {
    async fn record(&self, event: GameEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .map_err(|_| anyhow!("event log lock poisoned"))?
            .push(event);
        Ok(())
    }
}

/// Forwards events to a channel drained by a separate task.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl EventSink for ChannelSink {
    async fn record(&self, event: GameEvent) -> anyhow::Result<()> {
        self.tx
            .send(event)
            .map_err(|_| anyhow!("event channel closed"))
    }
}
