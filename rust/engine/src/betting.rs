use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// A betting street. Streets only ever advance within a hand; `Showdown` is
/// terminal and carries no betting round of its own.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards revealed on entry to this street.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }
}

/// Street-scoped betting state: the amount to match, what each seat has
/// committed this street, and who has acted since the last (re)open.
///
/// Blind posts go through [`add`](Self::add) without marking the poster as
/// having acted, which is what gives the big blind its preflop option: with
/// commitments equal the round still waits for the big blind's own action.
#[derive(Debug, Clone, Default)]
pub struct BettingRound {
    bet_to_match: u32,
    committed: [u32; 2],
    acted: [bool; 2],
}

impl BettingRound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bet_to_match(&self) -> u32 {
        self.bet_to_match
    }

    pub fn committed(&self, id: PlayerId) -> u32 {
        self.committed[id.index()]
    }

    /// Chips `id` still owes to continue in the street.
    pub fn to_call(&self, id: PlayerId) -> u32 {
        self.bet_to_match.saturating_sub(self.committed(id))
    }

    /// Registers chips moved into the pot this street. Does not touch the
    /// acted flags; blinds and raises share this path.
    pub fn add(&mut self, id: PlayerId, amount: u32) {
        self.committed[id.index()] += amount;
    }

    pub fn mark_acted(&mut self, id: PlayerId) {
        self.acted[id.index()] = true;
    }

    /// A raise reopens the betting: the opponent must act again.
    pub fn reopen(&mut self, id: PlayerId) {
        self.acted[id.index()] = false;
    }

    pub fn set_bet_to_match(&mut self, amount: u32) {
        self.bet_to_match = amount;
    }

    /// The street is complete once every non-folded player is either all-in
    /// or has acted with their commitment matching the bet. Folded players
    /// are ignored; the hand ends through the fold path, not here.
    pub fn is_complete(&self, players: &[Player; 2]) -> bool {
        players.iter().all(|p| {
            p.folded()
                || p.all_in()
                || (self.acted[p.id().index()] && self.committed(p.id()) == self.bet_to_match)
        })
    }

    /// Resets for the next street: fresh bet to match, commitments and
    /// acted flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn players() -> [Player; 2] {
        [
            Player::new(PlayerId::User, 1_000),
            Player::new(PlayerId::Bot, 1_000),
        ]
    }

    #[test]
    fn blinds_alone_do_not_complete_the_round() {
        let players = players();
        let mut round = BettingRound::new();
        round.add(PlayerId::User, 10);
        round.add(PlayerId::Bot, 20);
        round.set_bet_to_match(20);
        assert!(!round.is_complete(&players));
    }

    #[test]
    fn big_blind_keeps_option_after_a_limp() {
        let players = players();
        let mut round = BettingRound::new();
        round.add(PlayerId::User, 10);
        round.add(PlayerId::Bot, 20);
        round.set_bet_to_match(20);

        // Dealer completes the small blind; commitments now equal, but the
        // big blind has not acted yet.
        round.add(PlayerId::User, 10);
        round.mark_acted(PlayerId::User);
        assert!(!round.is_complete(&players));

        round.mark_acted(PlayerId::Bot);
        assert!(round.is_complete(&players));
    }

    #[test]
    fn raise_reopens_the_round() {
        let players = players();
        let mut round = BettingRound::new();
        round.add(PlayerId::User, 50);
        round.mark_acted(PlayerId::User);
        round.set_bet_to_match(50);
        round.add(PlayerId::Bot, 50);
        round.mark_acted(PlayerId::Bot);
        assert!(round.is_complete(&players));

        round.add(PlayerId::Bot, 100);
        round.set_bet_to_match(150);
        round.reopen(PlayerId::User);
        assert!(!round.is_complete(&players));
    }

    #[test]
    fn all_in_player_is_not_awaited() {
        let mut players = players();
        let mut round = BettingRound::new();
        // Bot raises all-in short; user has matched and acted.
        players[1].commit(1_000);
        round.add(PlayerId::Bot, 1_000);
        round.mark_acted(PlayerId::Bot);
        round.set_bet_to_match(1_000);
        round.add(PlayerId::User, 1_000);
        round.mark_acted(PlayerId::User);
        assert!(round.is_complete(&players));
    }
}
