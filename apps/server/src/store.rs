//! In-memory game sessions.
//!
//! Nothing is persisted. A game lives until it is deleted, sits idle longer
//! than the store's time-to-live, or is the least recently used one when the
//! store is full. Each game has its own mutex, so requests for different games
//! never wait on each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use namecard_core::Game;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::{ApiError, Result};

pub const DEFAULT_MAX_GAMES: usize = 10_000;
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

struct Session {
    game: Mutex<Game>,
    last_access: Mutex<Instant>,
}

impl Session {
    fn new(game: Game, now: Instant) -> Self {
        Self {
            game: Mutex::new(game),
            last_access: Mutex::new(now),
        }
    }

    fn last_access(&self) -> Instant {
        *self.last_access.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn touch(&self, now: Instant) {
        let mut last = self.last_access.lock().unwrap_or_else(PoisonError::into_inner);
        *last = (*last).max(now);
    }
}

/// Live games keyed by id.
pub struct GameStore {
    games: RwLock<HashMap<Uuid, Arc<Session>>>,
    max_games: usize,
    idle_ttl: Duration,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_GAMES, DEFAULT_IDLE_TTL)
    }
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding at most `max_games`, forgetting games idle for `idle_ttl`.
    pub fn with_limits(max_games: usize, idle_ttl: Duration) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            max_games: max_games.max(1),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Insert a game, evicting the least recently used ones when full.
    pub fn insert(&self, game_id: Uuid, game: Game) {
        self.insert_at(game_id, game, Instant::now());
    }

    fn insert_at(&self, game_id: Uuid, game: Game, now: Instant) {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);

        while games.len() >= self.max_games && !games.contains_key(&game_id) {
            let oldest = games
                .iter()
                .min_by_key(|(_, session)| session.last_access())
                .map(|(id, _)| *id);
            let Some(oldest) = oldest else { break };
            games.remove(&oldest);
            tracing::info!(game_id = %oldest, "store full, evicted least recently used game");
        }

        games.insert(game_id, Arc::new(Session::new(game, now)));
    }

    pub fn contains(&self, game_id: &Uuid) -> bool {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(game_id)
    }

    /// Returns whether the game existed.
    pub fn remove(&self, game_id: &Uuid) -> bool {
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(game_id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against one game while holding its lock.
    pub fn with_game<T>(&self, game_id: &Uuid, f: impl FnOnce(&mut Game) -> Result<T>) -> Result<T> {
        self.with_game_at(game_id, Instant::now(), f)
    }

    fn with_game_at<T>(
        &self,
        game_id: &Uuid,
        now: Instant,
        f: impl FnOnce(&mut Game) -> Result<T>,
    ) -> Result<T> {
        let session = self
            .games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(game_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("game {}", game_id)))?;
        session.touch(now);
        let mut game = session.game.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *game)
    }

    /// Drop every game not accessed within the time-to-live. Returns how many went.
    pub fn sweep_idle(&self) -> usize {
        self.sweep_idle_at(Instant::now())
    }

    fn sweep_idle_at(&self, now: Instant) -> usize {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        let before = games.len();
        games.retain(|_, session| {
            now.saturating_duration_since(session.last_access()) < self.idle_ttl
        });
        let evicted = before - games.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = games.len(), "swept idle games");
        }
        evicted
    }

    /// Sweep idle games every `every` on the current runtime.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                store.sweep_idle();
            }
        })
    }
}
