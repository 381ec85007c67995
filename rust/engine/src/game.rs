use serde::{Deserialize, Serialize};

use crate::betting::{BettingRound, Street};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_seven, HandRank};
use crate::logger::ActionRecord;
use crate::player::{Action, Player, PlayerId};
use crate::pot::PotManager;
use crate::provider::{DecisionProvider, TableView};
use crate::rules::{validate, ValidatedAction};

/// Stack each player starts a fresh game with.
pub const STARTING_STACK: u32 = 10_000;
/// Forced bet posted by the dealer (the button posts the small blind
/// heads-up).
pub const SMALL_BLIND: u32 = 10;
/// Forced bet posted by the non-dealer; also the minimum raise increment.
pub const BIG_BLIND: u32 = 20;

/// How a hand ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    Fold,
    Showdown,
}

/// Terminal result of a hand. `winner` is `None` for a split pot; the
/// payouts always sum to the pot that was played for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub winner: Option<PlayerId>,
    pub reason: WinReason,
    pub payouts: [u32; 2],
}

/// One seat as seen from outside the engine. `hole_cards` is populated for
/// the user's own seat, and for the bot only once a showdown has resolved;
/// a hand ended by a fold reveals nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub stack: u32,
    pub street_committed: u32,
    pub total_committed: u32,
    pub folded: bool,
    pub all_in: bool,
    pub hole_cards: Option<[Card; 2]>,
}

/// The caller-facing view of a game, safe to serialize to the user's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub dealer: PlayerId,
    pub street: Street,
    pub board: Vec<Card>,
    pub pot: u32,
    pub bet_to_match: u32,
    pub to_act: Option<PlayerId>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: [PlayerSnapshot; 2],
    pub outcome: Option<HandOutcome>,
}

/// One heads-up hand from blinds to settlement.
///
/// The value is mutated exclusively through [`apply_action`] (one validated
/// action at a time) and [`advance_auto`]; everything else is read-only.
/// Once `outcome` is set the hand is terminal and a successor is built with
/// [`next_hand`]. Chip conservation against the total fixed at hand start
/// is re-checked after every mutation; a mismatch aborts the hand.
///
/// [`apply_action`]: Game::apply_action
/// [`advance_auto`]: Game::advance_auto
/// [`next_hand`]: Game::next_hand
#[derive(Debug)]
pub struct Game {
    seed: u64,
    deck: Deck,
    players: [Player; 2],
    dealer: PlayerId,
    small_blind: u32,
    big_blind: u32,
    street: Street,
    board: Vec<Card>,
    round: BettingRound,
    pots: PotManager,
    to_act: Option<PlayerId>,
    outcome: Option<HandOutcome>,
    chip_total: u32,
    actions: Vec<ActionRecord>,
}

impl Game {
    /// Starts a brand new game: both stacks at [`STARTING_STACK`], dealer
    /// drawn at random, blinds posted and hole cards dealt. Pass a seed for
    /// a reproducible deal; `None` draws one and records it.
    pub fn create(seed: Option<u64>) -> Result<Game, GameError> {
        let dealer = if rand::random::<bool>() {
            PlayerId::User
        } else {
            PlayerId::Bot
        };
        Game::start(STARTING_STACK, STARTING_STACK, dealer, seed)
    }

    /// Starts the next hand of a running session: stacks carried over from
    /// the previous hand's end state, dealer flipped, fresh deal.
    pub fn next_hand(
        user_chips: u32,
        bot_chips: u32,
        last_dealer: PlayerId,
        seed: Option<u64>,
    ) -> Result<Game, GameError> {
        Game::start(user_chips, bot_chips, last_dealer.opponent(), seed)
    }

    fn start(
        user_chips: u32,
        bot_chips: u32,
        dealer: PlayerId,
        seed: Option<u64>,
    ) -> Result<Game, GameError> {
        if user_chips == 0 {
            return Err(GameError::EmptyStack {
                player: PlayerId::User,
            });
        }
        if bot_chips == 0 {
            return Err(GameError::EmptyStack {
                player: PlayerId::Bot,
            });
        }

        let seed = seed.unwrap_or_else(rand::random);
        let mut game = Game {
            seed,
            deck: Deck::new_with_seed(seed),
            players: [
                Player::new(PlayerId::User, user_chips),
                Player::new(PlayerId::Bot, bot_chips),
            ],
            dealer,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            street: Street::Preflop,
            board: Vec::with_capacity(5),
            round: BettingRound::new(),
            pots: PotManager::new(),
            to_act: None,
            outcome: None,
            chip_total: user_chips + bot_chips,
            actions: Vec::new(),
        };

        game.deal_hole_cards()?;
        game.post_blinds();

        // A blind can already close the betting when a stack is that short.
        if game.round.is_complete(&game.players) {
            game.finish_street()?;
        } else {
            game.to_act = game.first_to_act();
        }
        game.check_conservation()?;
        Ok(game)
    }

    fn deal_hole_cards(&mut self) -> Result<(), GameError> {
        // First card to the player left of the button.
        let order = [self.dealer.opponent(), self.dealer];
        for _ in 0..2 {
            for id in order {
                let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                self.players[id.index()].give_card(card);
            }
        }
        Ok(())
    }

    fn post_blinds(&mut self) {
        let bb_player = self.dealer.opponent();
        self.commit_chips(self.dealer, self.small_blind);
        self.commit_chips(bb_player, self.big_blind);
        let posted = self
            .round
            .committed(self.dealer)
            .max(self.round.committed(bb_player));
        self.round.set_bet_to_match(posted);
    }

    /// Moves up to `amount` chips from the stack into the street round and
    /// the hand pot, returning what was actually paid (short stacks pay
    /// less and are all-in).
    fn commit_chips(&mut self, id: PlayerId, amount: u32) -> u32 {
        let paid = self.players[id.index()].commit(amount);
        self.round.add(id, paid);
        self.pots.add(id, paid);
        paid
    }

    /// Validates and applies one action for `player`. Illegal requests are
    /// rejected with the state untouched; legal ones advance the turn, the
    /// street, or finish the hand.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<GameSnapshot, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::HandAlreadyComplete);
        }
        let expected = self.to_act.ok_or(GameError::NoHandInProgress)?;
        if expected != player {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: player,
            });
        }

        let validated = validate(
            action,
            &self.players[player.index()],
            &self.round,
            self.big_blind,
        )?;
        self.actions.push(ActionRecord {
            player,
            street: self.street,
            action,
        });

        match validated {
            ValidatedAction::Fold => {
                self.players[player.index()].fold();
                self.resolve_fold(player);
            }
            ValidatedAction::Call { pay } => {
                self.commit_chips(player, pay);
                self.round.mark_acted(player);
                self.after_action(player)?;
            }
            ValidatedAction::Raise { to, pay } => {
                self.commit_chips(player, pay);
                self.round.set_bet_to_match(to);
                self.round.mark_acted(player);
                self.round.reopen(player.opponent());
                self.after_action(player)?;
            }
        }
        self.check_conservation()?;
        Ok(self.snapshot())
    }

    /// Advances the bot's turn(s) by querying the decision provider until
    /// the user is awaited or the hand ends. Explicit and idempotent: when
    /// it is not the bot's turn, nothing changes. Provider failures and
    /// illegal answers degrade to a check/call; they never end the hand.
    pub fn advance_auto(
        &mut self,
        provider: &dyn DecisionProvider,
    ) -> Result<GameSnapshot, GameError> {
        while self.outcome.is_none() && self.to_act == Some(PlayerId::Bot) {
            let view = self.table_view(PlayerId::Bot);
            let action = provider.decide(&view).unwrap_or(Action::CheckOrCall);
            match self.apply_action(PlayerId::Bot, action) {
                Ok(_) => {}
                Err(e) if e.is_recoverable() => {
                    self.apply_action(PlayerId::Bot, Action::CheckOrCall)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.snapshot())
    }

    fn after_action(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.round.is_complete(&self.players) {
            self.finish_street()
        } else {
            self.to_act = Some(player.opponent());
            Ok(())
        }
    }

    fn finish_street(&mut self) -> Result<(), GameError> {
        self.to_act = None;
        let can_still_bet = self.players.iter().filter(|p| p.can_bet()).count();
        if can_still_bet < 2 {
            // No further betting is possible: run the board out and settle.
            self.deal_remaining_board()?;
            return self.showdown();
        }
        if self.street == Street::River {
            return self.showdown();
        }
        self.advance_street()
    }

    fn advance_street(&mut self) -> Result<(), GameError> {
        self.street = self.street.next();
        self.deck.burn();
        for _ in 0..self.street.cards_dealt() {
            let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
            self.board.push(card);
        }
        self.round.reset();
        self.to_act = self.first_to_act();
        Ok(())
    }

    fn deal_remaining_board(&mut self) -> Result<(), GameError> {
        while self.board.len() < 5 {
            let n = if self.board.is_empty() { 3 } else { 1 };
            self.deck.burn();
            for _ in 0..n {
                let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                self.board.push(card);
            }
        }
        Ok(())
    }

    /// First player to speak on the current street, skipping anyone who can
    /// no longer bet. The dealer acts first preflop and second on every
    /// later street.
    fn first_to_act(&self) -> Option<PlayerId> {
        let order = if self.street == Street::Preflop {
            [self.dealer, self.dealer.opponent()]
        } else {
            [self.dealer.opponent(), self.dealer]
        };
        order
            .into_iter()
            .find(|id| self.players[id.index()].can_bet())
    }

    fn resolve_fold(&mut self, folder: PlayerId) {
        let winner = folder.opponent();
        let total = self.pots.total();
        self.players[winner.index()].award(total);
        let mut payouts = [0u32; 2];
        payouts[winner.index()] = total;
        self.outcome = Some(HandOutcome {
            winner: Some(winner),
            reason: WinReason::Fold,
            payouts,
        });
        self.to_act = None;
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.street = Street::Showdown;
        let ranks = [
            self.rank_of(PlayerId::User)?,
            self.rank_of(PlayerId::Bot)?,
        ];
        let folded = [self.players[0].folded(), self.players[1].folded()];
        let payouts = self.pots.settle(ranks, folded, self.dealer);
        for id in PlayerId::BOTH {
            self.players[id.index()].award(payouts[id.index()]);
        }

        let winner = match ranks[0].cmp(&ranks[1]) {
            std::cmp::Ordering::Greater => Some(PlayerId::User),
            std::cmp::Ordering::Less => Some(PlayerId::Bot),
            std::cmp::Ordering::Equal => None,
        };
        self.outcome = Some(HandOutcome {
            winner,
            reason: WinReason::Showdown,
            payouts,
        });
        self.to_act = None;
        Ok(())
    }

    fn rank_of(&self, id: PlayerId) -> Result<HandRank, GameError> {
        let hole = self.players[id.index()].hole_cards();
        let (Some(a), Some(b)) = (hole[0], hole[1]) else {
            return Err(GameError::NoHandInProgress);
        };
        let mut seven = [a; 7];
        seven[1] = b;
        seven[2..].copy_from_slice(&self.board[..5]);
        Ok(evaluate_seven(&seven))
    }

    fn check_conservation(&self) -> Result<(), GameError> {
        let stacks: u32 = self.players.iter().map(Player::stack).sum();
        let pot = self.pots.total();
        let balanced = if self.outcome.is_some() {
            stacks == self.chip_total
        } else {
            stacks + pot == self.chip_total
        };
        if balanced {
            Ok(())
        } else {
            Err(GameError::ChipImbalance {
                stacks,
                pot,
                total: self.chip_total,
            })
        }
    }

    /// The acting player's legitimate observation of the table.
    pub fn table_view(&self, seat: PlayerId) -> TableView {
        let me = &self.players[seat.index()];
        let opponent = &self.players[seat.opponent().index()];
        let hole = match me.hole_cards() {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        };
        TableView {
            seat,
            street: self.street,
            board: self.board.clone(),
            hole,
            pot: self.pots.total(),
            bet_to_match: self.round.bet_to_match(),
            to_call: self.round.to_call(seat),
            committed: self.round.committed(seat),
            stack: me.stack(),
            opponent_stack: opponent.stack(),
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            is_dealer: seat == self.dealer,
        }
    }

    /// Caller-facing snapshot. The bot's hole cards appear only once a
    /// showdown has resolved; fold-ended hands reveal nothing.
    pub fn snapshot(&self) -> GameSnapshot {
        let reveal_bot = matches!(
            self.outcome,
            Some(HandOutcome {
                reason: WinReason::Showdown,
                ..
            })
        );
        let players = [
            self.player_snapshot(PlayerId::User, true),
            self.player_snapshot(PlayerId::Bot, reveal_bot),
        ];
        GameSnapshot {
            dealer: self.dealer,
            street: self.street,
            board: self.board.clone(),
            pot: self.pots.total(),
            bet_to_match: self.round.bet_to_match(),
            to_act: self.to_act,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            players,
            outcome: self.outcome,
        }
    }

    fn player_snapshot(&self, id: PlayerId, reveal: bool) -> PlayerSnapshot {
        let p = &self.players[id.index()];
        let hole_cards = if reveal {
            match p.hole_cards() {
                [Some(a), Some(b)] => Some([a, b]),
                _ => None,
            }
        } else {
            None
        };
        PlayerSnapshot {
            id,
            stack: p.stack(),
            street_committed: self.round.committed(id),
            total_committed: self.pots.contribution(id),
            folded: p.folded(),
            all_in: p.all_in(),
            hole_cards,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dealer(&self) -> PlayerId {
        self.dealer
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> u32 {
        self.pots.total()
    }

    pub fn to_act(&self) -> Option<PlayerId> {
        self.to_act
    }

    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }

    pub fn stack(&self, id: PlayerId) -> u32 {
        self.players[id.index()].stack()
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    /// The hand as a loggable record under the given id.
    pub fn hand_record(&self, hand_id: String) -> crate::logger::HandRecord {
        crate::logger::HandRecord {
            hand_id,
            seed: self.seed,
            dealer: self.dealer,
            actions: self.actions.clone(),
            board: self.board.clone(),
            outcome: self.outcome,
            final_stacks: [self.players[0].stack(), self.players[1].stack()],
            ts: None,
        }
    }
}
