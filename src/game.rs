//! Match controller: setup, turn order, win detection and the turn log.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::common::{Coordinate, MatchError, ShotOutcome};
use crate::config::SHIPS;
use crate::grid::GridView;
use crate::placement::random_placement;
use crate::ship::{Orientation, ShipConfig};

pub const DEPLOY_MESSAGE: &str = "Welcome, Admiral. Deploy your ships.";
pub const BATTLE_START_MESSAGE: &str = "Battle engaged! Awaiting orders.";
pub const VICTORY_MESSAGE: &str = "Victory Achieved!";
pub const DEFEAT_MESSAGE: &str = "Fleet Destroyed. Defeat.";

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Phase {
    Setup,
    Playing,
    GameOver,
}

/// The two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Player 1"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Permission for the computer to fire once, valid until the match is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    epoch: u64,
}

/// Everything a caller needs to present one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Side to move next; unchanged once the match is over.
    pub next_turn: Side,
    pub winner: Option<Side>,
}

/// Placement progress for the human fleet. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Setup {
    board: Board,
    next_ship: usize,
    orientation: Orientation,
}

impl Setup {
    fn new() -> Self {
        Self {
            board: Board::new(),
            next_ship: 0,
            orientation: Orientation::Horizontal,
        }
    }
}

/// Canonical state of a human-vs-computer match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    human: Board,
    ai: Board,
    log: VecDeque<String>,
    setup: Setup,
    bonus_shot_on_hit: bool,
    epoch: u64,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Fresh match in the setup phase.
    pub fn new() -> Self {
        let mut log = VecDeque::new();
        log.push_front(DEPLOY_MESSAGE.to_string());
        Self {
            phase: Phase::Setup,
            turn: Side::Human,
            winner: None,
            human: Board::new(),
            ai: Board::new(),
            log,
            setup: Setup::new(),
            bonus_shot_on_hit: true,
            epoch: 0,
        }
    }

    pub(crate) fn from_parts(
        phase: Phase,
        turn: Side,
        winner: Option<Side>,
        human: Board,
        ai: Board,
        log: VecDeque<String>,
    ) -> Self {
        Self {
            phase,
            turn,
            winner,
            human,
            ai,
            log,
            ..Self::new()
        }
    }

    /// Whether a hit lets the shooter fire again (on by default).
    pub fn set_bonus_shot_on_hit(&mut self, enabled: bool) {
        self.bonus_shot_on_hit = enabled;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        }
    }

    /// Turn log, most recent entry first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn last_log(&self) -> Option<&str> {
        self.log.front().map(String::as_str)
    }

    /// Projection of the board owned by `side`; `reveal == false` hides
    /// undiscovered ships.
    pub fn view(&self, side: Side, reveal: bool) -> GridView {
        self.board(side).view(reveal)
    }

    /// Shots fired so far by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.board(side.opponent()).grid().shots_received()
    }

    /// Ships of `side` still afloat.
    pub fn ships_surviving(&self, side: Side) -> usize {
        self.board(side).fleet().afloat()
    }

    // --- setup ---

    /// Board being deployed during setup.
    pub fn setup_board(&self) -> &Board {
        &self.setup.board
    }

    /// Next catalog ship waiting to be placed.
    pub fn current_ship(&self) -> Option<ShipConfig> {
        if self.phase != Phase::Setup {
            return None;
        }
        SHIPS.get(self.setup.next_ship).copied()
    }

    pub fn orientation(&self) -> Orientation {
        self.setup.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.setup.orientation = orientation;
    }

    pub fn rotate(&mut self) {
        self.setup.orientation = self.setup.orientation.rotated();
    }

    pub fn setup_complete(&self) -> bool {
        self.setup.next_ship >= SHIPS.len()
    }

    /// Place the next catalog ship at `origin` with the current orientation.
    /// Rejected placements leave the setup untouched.
    pub fn place_next(&mut self, origin: Coordinate) -> Result<ShipConfig, MatchError> {
        if self.phase != Phase::Setup {
            return Err(MatchError::WrongPhase);
        }
        let ship = self.current_ship().ok_or(MatchError::WrongPhase)?;
        let orientation = self.setup.orientation;
        self.setup.board.place(ship, origin, orientation)?;
        self.setup.next_ship += 1;
        Ok(ship)
    }

    /// Replace any manual progress with a complete random deployment.
    pub fn randomize_setup<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        if self.phase != Phase::Setup {
            return Err(MatchError::WrongPhase);
        }
        self.setup.board = random_placement(rng).into();
        self.setup.next_ship = SHIPS.len();
        Ok(())
    }

    /// Deploy the computer fleet and begin play with the human to move.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        if self.phase != Phase::Setup {
            return Err(MatchError::WrongPhase);
        }
        if !self.setup_complete() {
            return Err(MatchError::SetupIncomplete);
        }
        let setup = core::mem::replace(&mut self.setup, Setup::new());
        self.human = setup.board;
        self.ai = random_placement(rng).into();
        self.phase = Phase::Playing;
        self.turn = Side::Human;
        self.winner = None;
        self.push_log(BATTLE_START_MESSAGE.to_string());
        info!("battle started");
        Ok(())
    }

    /// Discard everything and return to setup. Pending computer turns become stale.
    pub fn reset(&mut self) {
        let epoch = self.epoch.wrapping_add(1);
        let bonus = self.bonus_shot_on_hit;
        *self = Self::new();
        self.epoch = epoch;
        self.bonus_shot_on_hit = bonus;
    }

    // --- play ---

    /// Human shot at the computer's board.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnReport, MatchError> {
        self.fire_as(Side::Human, target)
    }

    /// Ticket for the computer's next shot; `None` unless it is the computer's move.
    pub fn ai_ticket(&self) -> Option<AiTicket> {
        (self.phase == Phase::Playing && self.turn == Side::Ai && self.winner.is_none())
            .then_some(AiTicket { epoch: self.epoch })
    }

    /// Computer shot at the human's board, authorised by a ticket from [`Match::ai_ticket`].
    pub fn apply_ai_shot(
        &mut self,
        ticket: AiTicket,
        target: Coordinate,
    ) -> Result<TurnReport, MatchError> {
        if ticket.epoch != self.epoch {
            return Err(MatchError::StaleTurn);
        }
        self.fire_as(Side::Ai, target)
    }

    fn fire_as(&mut self, shooter: Side, target: Coordinate) -> Result<TurnReport, MatchError> {
        if self.phase != Phase::Playing {
            return Err(MatchError::WrongPhase);
        }
        if self.turn != shooter {
            return Err(MatchError::NotYourTurn);
        }

        let outcome = self.board_mut(shooter.opponent()).fire(target)?;
        let entry = format!("{} - cell {} - {}", shooter, target, outcome);
        info!("{}", entry);
        self.push_log(entry);

        if outcome.fleet_destroyed() {
            self.phase = Phase::GameOver;
            self.winner = Some(shooter);
            self.push_log(
                match shooter {
                    Side::Human => VICTORY_MESSAGE,
                    Side::Ai => DEFEAT_MESSAGE,
                }
                .to_string(),
            );
            info!("{} wins", shooter);
        } else if !(outcome.is_hit() && self.bonus_shot_on_hit) {
            self.turn = shooter.opponent();
        }

        Ok(TurnReport {
            shooter,
            target,
            outcome,
            next_turn: self.turn,
            winner: self.winner,
        })
    }

    fn push_log(&mut self, entry: String) {
        self.log.push_front(entry);
    }
}
