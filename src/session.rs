#![cfg(feature = "std")]
//! A single player's game and the errors raised while driving it.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::coord::CoordError;
use crate::generator::GenerationError;
use crate::grid::Grid;
use crate::resolver::{resolve, ShotOutcome};

/// Identity of the person playing, as issued by the messaging platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Store-assigned session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Finished,
}

/// Why a session left `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Won,
    Surrendered,
    /// Closed because the player started a new game.
    Superseded,
}

/// Errors from session operations.
///
/// Input errors (`InvalidCoordinate`, `NoActiveGame`) are expected during
/// normal play and carry a reply for the player. The rest point at a bug or
/// an unhealthy collaborator.
#[derive(Debug)]
pub enum SessionError {
    InvalidCoordinate(CoordError),
    NoActiveGame(PlayerId),
    SessionNotFound(SessionId),
    /// Attempt to change a session that already finished.
    SessionFinished(SessionId),
    Generation(GenerationError),
    Store(anyhow::Error),
}

impl SessionError {
    /// Recoverable by the player, as opposed to a defect.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidCoordinate(_) | SessionError::NoActiveGame(_)
        )
    }

    /// What to tell the player next. `None` for defects, which must not
    /// leak internals to the chat.
    pub fn user_message(&self) -> Option<String> {
        match self {
            SessionError::InvalidCoordinate(_) => Some(
                "I didn't catch that. Send a letter and a number, for example A1, B5 or J10."
                    .to_string(),
            ),
            SessionError::NoActiveGame(_) => {
                Some("You have no game in progress. Send \"start\" to begin.".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidCoordinate(e) => write!(f, "invalid coordinate: {}", e),
            SessionError::NoActiveGame(p) => write!(f, "{} has no active game", p),
            SessionError::SessionNotFound(id) => write!(f, "{} not found", id),
            SessionError::SessionFinished(id) => write!(f, "{} is already finished", id),
            SessionError::Generation(e) => write!(f, "board generation failed: {}", e),
            SessionError::Store(e) => write!(f, "session store failure: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidCoordinate(e) => Some(e),
            SessionError::Generation(e) => Some(e),
            SessionError::Store(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<CoordError> for SessionError {
    fn from(err: CoordError) -> Self {
        SessionError::InvalidCoordinate(err)
    }
}

impl From<GenerationError> for SessionError {
    fn from(err: GenerationError) -> Self {
        SessionError::Generation(err)
    }
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        SessionError::Store(err)
    }
}

/// One player's current or past game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    player: PlayerId,
    player_name: Option<String>,
    status: SessionStatus,
    finish_reason: Option<FinishReason>,
    grid: Grid,
    moves: u32,
    created_at: SystemTime,
    updated_at: SystemTime,
    campaign: Option<String>,
    summary: String,
}

impl Session {
    /// A fresh `Active` session with no moves.
    pub fn new(id: SessionId, player: PlayerId, grid: Grid, campaign: Option<String>) -> Self {
        let now = SystemTime::now();
        Self {
            id,
            player,
            player_name: None,
            status: SessionStatus::Active,
            finish_reason: None,
            grid,
            moves: 0,
            created_at: now,
            updated_at: now,
            campaign,
            summary: "Game started. Waiting for the first shot.".to_string(),
        }
    }

    pub fn with_player_name(mut self, name: Option<String>) -> Self {
        self.player_name = name;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    pub fn campaign(&self) -> Option<&str> {
        self.campaign.as_deref()
    }

    /// Human readable line describing the latest change.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Fire at zero-based (`col`, `row`).
    ///
    /// Rejected shots (`AlreadyShot`, `OutOfBounds`) leave the session
    /// untouched. A winning shot finishes the session.
    pub fn fire(&mut self, col: usize, row: usize) -> Result<ShotOutcome, SessionError> {
        if !self.is_active() {
            return Err(SessionError::SessionFinished(self.id));
        }
        let outcome = resolve(&mut self.grid, col, row);
        if !outcome.counts_as_move() {
            return Ok(outcome);
        }

        self.moves += 1;
        self.updated_at = SystemTime::now();
        if let Some(at) = outcome.at() {
            self.summary = format!("Move {} ({}): {}", self.moves, at, outcome.message());
        }
        if outcome.is_win() {
            self.finish(FinishReason::Won)?;
            self.summary = format!("Won in {} moves.", self.moves);
        }
        Ok(outcome)
    }

    /// Move to `Finished`. Finishing twice is an error.
    pub fn finish(&mut self, reason: FinishReason) -> Result<(), SessionError> {
        if !self.is_active() {
            return Err(SessionError::SessionFinished(self.id));
        }
        self.status = SessionStatus::Finished;
        self.finish_reason = Some(reason);
        self.updated_at = SystemTime::now();
        match reason {
            FinishReason::Won => {}
            FinishReason::Surrendered => {
                self.summary = format!("Surrendered after {} moves.", self.moves)
            }
            FinishReason::Superseded => {
                self.summary = format!("Abandoned after {} moves for a new game.", self.moves)
            }
        }
        Ok(())
    }

    /// Compact binary snapshot for blob storage.
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
