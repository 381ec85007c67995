use crate::betting::BettingRound;
use crate::errors::GameError;
use crate::player::{Action, Player};

/// An action that has passed legality checks, with the chips it moves
/// already resolved against the player's stack and street commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    /// Check (`pay == 0`) or call. A call a short stack cannot cover in
    /// full is capped and becomes an implicit all-in.
    Call { pay: u32 },
    /// Raise the street's bet to `to` in total, paying the difference over
    /// the player's current commitment.
    Raise { to: u32, pay: u32 },
}

/// Validates one action against the current betting round.
///
/// The minimum legal raise increment over the bet to match is one big
/// blind; the only exception is a raise that puts the player exactly
/// all-in, which is legal at any size as long as it still exceeds the bet
/// to match. Turn order is the game controller's concern, not checked here.
pub fn validate(
    action: Action,
    player: &Player,
    round: &BettingRound,
    big_blind: u32,
) -> Result<ValidatedAction, GameError> {
    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::CheckOrCall => {
            let owed = round.to_call(player.id());
            Ok(ValidatedAction::Call {
                pay: owed.min(player.stack()),
            })
        }
        Action::Raise(amount) => {
            let bet_to_match = round.bet_to_match();
            if amount <= bet_to_match {
                return Err(GameError::RaiseTooSmall {
                    amount,
                    bet_to_match,
                });
            }
            let pay = amount - round.committed(player.id());
            if pay > player.stack() {
                return Err(GameError::InsufficientChips {
                    player: player.id(),
                    amount,
                    available: player.stack(),
                });
            }
            let increment = amount - bet_to_match;
            if increment < big_blind && pay != player.stack() {
                return Err(GameError::RaiseBelowMinimum {
                    increment,
                    minimum: big_blind,
                });
            }
            Ok(ValidatedAction::Raise { to: amount, pay })
        }
    }
}
