use thiserror::Error;

use crate::player::PlayerId;

/// Errors surfaced by the game engine.
///
/// The illegal-action variants are recoverable: the offending request is
/// rejected and the game state is left untouched. `DeckExhausted` and
/// `ChipImbalance` are invariant violations; a hand that trips one is
/// aborted rather than continued with inconsistent state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("it's not {actual}'s turn (awaiting {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("raise to {amount} is below the current bet to match {bet_to_match}")]
    RaiseTooSmall { amount: u32, bet_to_match: u32 },
    #[error("raise increment {increment} is below the minimum {minimum}")]
    RaiseBelowMinimum { increment: u32, minimum: u32 },
    #[error("raise to {amount} exceeds {player}'s chips ({available} available)")]
    InsufficientChips {
        player: PlayerId,
        amount: u32,
        available: u32,
    },
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("hand already complete")]
    HandAlreadyComplete,
    #[error("{player} cannot start a hand with an empty stack")]
    EmptyStack { player: PlayerId },
    #[error("deck exhausted mid-hand")]
    DeckExhausted,
    #[error("chip conservation violated: stacks {stacks} + pot {pot} != total {total}")]
    ChipImbalance { stacks: u32, pot: u32, total: u32 },
}

impl GameError {
    /// True for validation errors the caller may retry with a corrected
    /// action; false for invariant violations that end the hand.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GameError::DeckExhausted | GameError::ChipImbalance { .. }
        )
    }
}
