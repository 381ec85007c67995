//! Learned-policy shell and the timeout/fallback combinator.
//!
//! The inference machinery that produces the automated opponent's action is
//! not part of this workspace; [`PolicyProvider`] wraps whatever the caller
//! supplies as an opaque decision function. [`FallbackProvider`] is what the
//! game loop actually talks to: it bounds the primary provider with a
//! deadline and answers from the baseline whenever the primary errors,
//! panics or stalls, so the human-facing turn is never left hanging.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use headsup_engine::player::Action;
use headsup_engine::provider::{DecisionProvider, ProviderError, TableView};

use crate::baseline::BaselineProvider;

type DecideFn = dyn Fn(&TableView) -> Result<Action, ProviderError> + Send + Sync;

/// Shell around an opaque learned policy. The function is a black box to
/// the engine: it either returns an action or fails, and failure handling
/// belongs to [`FallbackProvider`].
pub struct PolicyProvider {
    name: String,
    decide_fn: Box<DecideFn>,
}

impl PolicyProvider {
    pub fn new<F>(name: impl Into<String>, decide_fn: F) -> Self
    where
        F: Fn(&TableView) -> Result<Action, ProviderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            decide_fn: Box::new(decide_fn),
        }
    }
}

impl DecisionProvider for PolicyProvider {
    fn decide(&self, view: &TableView) -> Result<Action, ProviderError> {
        (self.decide_fn)(view)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for PolicyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyProvider")
            .field("name", &self.name)
            .finish()
    }
}

/// Default time the primary provider gets before the baseline answers.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Runs a primary provider under a deadline with the deterministic
/// baseline behind it. The combinator itself never fails: every code path
/// ends in an action.
pub struct FallbackProvider {
    primary: Arc<dyn DecisionProvider>,
    fallback: BaselineProvider,
    deadline: Duration,
    name: String,
}

impl FallbackProvider {
    pub fn new(primary: Arc<dyn DecisionProvider>) -> Self {
        Self::with_deadline(primary, DEFAULT_DEADLINE)
    }

    pub fn with_deadline(primary: Arc<dyn DecisionProvider>, deadline: Duration) -> Self {
        let name = format!("{}+baseline", primary.name());
        Self {
            primary,
            fallback: BaselineProvider::new(),
            deadline,
            name,
        }
    }
}

impl DecisionProvider for FallbackProvider {
    fn decide(&self, view: &TableView) -> Result<Action, ProviderError> {
        let primary = Arc::clone(&self.primary);
        let owned = view.clone();
        let (tx, rx) = mpsc::channel();
        // A panicking primary drops the sender without sending; that shows
        // up as a disconnect below and falls through to the baseline. The
        // worker is detached: a stalled primary cannot hold up the game.
        thread::spawn(move || {
            let _ = tx.send(primary.decide(&owned));
        });

        match rx.recv_timeout(self.deadline) {
            Ok(Ok(action)) => Ok(action),
            Ok(Err(_)) | Err(_) => self.fallback.decide(view),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for FallbackProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackProvider")
            .field("primary", &self.primary.name())
            .field("deadline", &self.deadline)
            .finish()
    }
}
