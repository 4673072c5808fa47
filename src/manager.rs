#![cfg(feature = "std")]
//! Session lifecycle: start, move, surrender and the admin force-move.
//!
//! Every operation that changes a player's game runs under that player's
//! lock, so two messages from one player are resolved one after another while
//! different players proceed in parallel. The lock covers the whole
//! load-resolve-save sequence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::{Mutex as TurnLock, OwnedMutexGuard};

use crate::config::EngineConfig;
use crate::coord;
use crate::directory::PlayerDirectory;
use crate::events::{EventSink, GameEvent};
use crate::generator;
use crate::resolver::ShotOutcome;
use crate::session::{FinishReason, PlayerId, Session, SessionError, SessionId};
use crate::store::SessionStore;

/// Idle lock entries are swept once the table grows past this size.
const LOCK_TABLE_SWEEP: usize = 1024;

/// Keyed table of per-player async locks.
#[derive(Default)]
struct PlayerLocks {
    table: Mutex<HashMap<PlayerId, Arc<TurnLock<()>>>>,
}

impl PlayerLocks {
    async fn acquire(&self, player: PlayerId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            if table.len() > LOCK_TABLE_SWEEP {
                // an entry referenced only by the table has no holder and no waiter
                table.retain(|_, lock| Arc::strong_count(lock) > 1);
            }
            table.entry(player).or_default().clone()
        };
        lock.lock_owned().await
    }
}

/// Result of a resolved move.
#[derive(Debug, Clone)]
pub struct MoveReport {
    /// Session after the shot.
    pub session: Session,
    pub outcome: ShotOutcome,
}

impl MoveReport {
    /// Reply text for the player.
    pub fn reply(&self) -> String {
        match &self.outcome {
            ShotOutcome::Win { .. } => format!(
                "{} You won in {} moves. Send \"start\" to play again.",
                self.outcome.message(),
                self.session.moves()
            ),
            other => other.message(),
        }
    }
}

/// Owns every mutation of sessions.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    events: Arc<dyn EventSink>,
    directory: Option<Arc<dyn PlayerDirectory>>,
    config: EngineConfig,
    rng: Mutex<SmallRng>,
    locks: PlayerLocks,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        events: Arc<dyn EventSink>,
        config: EngineConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        Self {
            store,
            events,
            directory: None,
            config,
            rng: Mutex::new(rng),
            locks: PlayerLocks::default(),
        }
    }

    /// Attach a directory used to put display names on new sessions.
    pub fn with_directory(mut self, directory: Arc<dyn PlayerDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    fn rng(&self) -> MutexGuard<'_, SmallRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn emit(&self, event: GameEvent) {
        let name = event.name();
        let player = event.player();
        if let Err(e) = self.events.record(event).await {
            warn!("dropping {} event for {}: {}", name, player, e);
        }
    }

    async fn display_name(&self, player: PlayerId) -> Option<String> {
        let directory = self.directory.as_ref()?;
        match directory.display_name(player).await {
            Ok(name) => name,
            Err(e) => {
                warn!("directory lookup for {} failed: {}", player, e);
                None
            }
        }
    }

    /// Start a new game, closing the player's current one first.
    pub async fn start(
        &self,
        player: PlayerId,
        campaign: Option<String>,
    ) -> Result<Session, SessionError> {
        let _turn = self.locks.acquire(player).await;

        if let Some(mut previous) = self.store.load_active(player).await? {
            previous.finish(FinishReason::Superseded)?;
            self.store.save(&previous).await?;
            info!("{} superseded {} after {} moves", player, previous.id(), previous.moves());
        }

        let grid = {
            let mut rng = self.rng();
            generator::generate_with(&mut *rng, &self.config)?
        };
        let id = self.store.next_id().await?;
        let name = self.display_name(player).await;
        let session = Session::new(id, player, grid, campaign.clone()).with_player_name(name);
        self.store.save(&session).await?;
        info!("{} started {}", player, id);

        self.emit(GameEvent::GameStarted {
            player,
            session: id,
            campaign,
        })
        .await;
        Ok(session)
    }

    /// Fire at zero-based (`col`, `row`) in the player's active game.
    pub async fn play(
        &self,
        player: PlayerId,
        col: usize,
        row: usize,
    ) -> Result<MoveReport, SessionError> {
        let _turn = self.locks.acquire(player).await;
        let session = self
            .store
            .load_active(player)
            .await?
            .ok_or(SessionError::NoActiveGame(player))?;
        self.apply(session, col, row).await
    }

    /// Decode `text` as a coordinate and fire. Decoding happens before the
    /// session lookup.
    pub async fn play_text(&self, player: PlayerId, text: &str) -> Result<MoveReport, SessionError> {
        let at = coord::decode(text)?;
        self.play(player, at.col(), at.row()).await
    }

    /// Fire into a specific session regardless of which player is asking.
    /// Support tooling only.
    pub async fn force_move(
        &self,
        id: SessionId,
        col: usize,
        row: usize,
    ) -> Result<MoveReport, SessionError> {
        let owner = self
            .store
            .load(id)
            .await?
            .ok_or(SessionError::SessionNotFound(id))?
            .player();
        let _turn = self.locks.acquire(owner).await;
        // reload under the lock; the first read may be stale
        let session = self
            .store
            .load(id)
            .await?
            .ok_or(SessionError::SessionNotFound(id))?;
        self.apply(session, col, row).await
    }

    async fn apply(
        &self,
        mut session: Session,
        col: usize,
        row: usize,
    ) -> Result<MoveReport, SessionError> {
        let outcome = session.fire(col, row)?;
        if !outcome.counts_as_move() {
            debug!("{} rejected shot at ({}, {}): {:?}", session.id(), col, row, outcome.kind());
            return Ok(MoveReport { session, outcome });
        }

        self.store.save(&session).await?;
        debug!("{}: {}", session.id(), session.summary());

        let player = session.player();
        let id = session.id();
        self.emit(GameEvent::MovePlayed {
            player,
            session: id,
            outcome: outcome.kind(),
        })
        .await;
        if outcome.is_win() {
            info!("{} won {} in {} moves", player, id, session.moves());
            self.emit(GameEvent::GameWon {
                player,
                session: id,
                moves: session.moves(),
            })
            .await;
        }
        Ok(MoveReport { session, outcome })
    }

    /// Give up the active game. No win is recorded.
    pub async fn surrender(&self, player: PlayerId) -> Result<Session, SessionError> {
        let _turn = self.locks.acquire(player).await;
        let mut session = self
            .store
            .load_active(player)
            .await?
            .ok_or(SessionError::NoActiveGame(player))?;
        session.finish(FinishReason::Surrendered)?;
        self.store.save(&session).await?;
        info!("{} surrendered {} after {} moves", player, session.id(), session.moves());
        Ok(session)
    }

    pub async fn active_session(&self, player: PlayerId) -> Result<Option<Session>, SessionError> {
        Ok(self.store.load_active(player).await?)
    }

    /// Most recently created finished game of the player.
    pub async fn last_finished(&self, player: PlayerId) -> Result<Option<Session>, SessionError> {
        let history = self.store.history(player).await?;
        Ok(history.into_iter().find(|s| !s.is_active()))
    }
}
