use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::betting::Street;
use crate::cards::Card;
use crate::player::{Action, PlayerId};

/// A decision provider failed to produce an action. Never surfaced to the
/// caller of the engine: the game falls back to the rule-based provider (or
/// a plain check/call) and the hand continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("decision provider unavailable: {0}")]
    Unavailable(String),
    #[error("decision provider timed out")]
    Timeout,
}

/// What the acting player may legitimately observe: their own hole cards
/// and all public state. The live opponent's hole cards are never present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableView {
    pub seat: PlayerId,
    pub street: Street,
    pub board: Vec<Card>,
    pub hole: Option<[Card; 2]>,
    pub pot: u32,
    pub bet_to_match: u32,
    pub to_call: u32,
    pub committed: u32,
    pub stack: u32,
    pub opponent_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub is_dealer: bool,
}

impl TableView {
    /// Largest total the seat can raise to: current commitment plus the
    /// whole remaining stack.
    pub fn max_raise_to(&self) -> u32 {
        self.committed + self.stack
    }
}

/// Supplies the automated opponent's action for one decision point.
///
/// Implementations live outside the engine; the engine only consumes the
/// capability. An `Err` from [`decide`](Self::decide) is treated as
/// "provider unavailable" and must never kill the hand.
pub trait DecisionProvider: Send + Sync {
    fn decide(&self, view: &TableView) -> Result<Action, ProviderError>;

    fn name(&self) -> &str;
}
