//! Common types for battlefleet: coordinates, shot outcomes and errors.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A cell position, 0-based. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < N && self.y < N
    }

    /// Shift by a signed delta; `None` when the result leaves the board.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Coordinate> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Coordinate { x, y };
        c.in_bounds().then_some(c)
    }

    /// In-bounds orthogonal neighbours, ordered up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> {
        let origin = *self;
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| origin.offset(dx, dy))
    }
}

impl fmt::Display for Coordinate {
    /// Column letter followed by the 1-based row: (0,0) is "A1", (9,9) is "J10".
    /// Off-board coordinates print as "(x, y)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let col = (b'A' + self.x as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

/// Reasons a textual coordinate could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    Empty,
    InvalidColumn(char),
    InvalidRow,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Empty => write!(f, "Empty coordinate - expected e.g. A5"),
            CoordinateError::InvalidColumn(ch) => {
                write!(f, "Invalid column '{}' - must be a letter A-J", ch)
            }
            CoordinateError::InvalidRow => write!(f, "Invalid row - must be a number 1-10"),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let col_ch = chars
            .next()
            .ok_or(CoordinateError::Empty)?
            .to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(CoordinateError::InvalidColumn(col_ch));
        }
        let x = (col_ch as u8 - b'A') as usize;
        if x >= N {
            return Err(CoordinateError::InvalidColumn(col_ch));
        }
        let digits = chars.as_str();
        // one or two plain digits, no sign and no leading zero
        if digits.is_empty()
            || digits.len() > 2
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CoordinateError::InvalidRow);
        }
        let row: usize = digits.parse().map_err(|_| CoordinateError::InvalidRow)?;
        if row == 0 || row > N {
            return Err(CoordinateError::InvalidRow);
        }
        Ok(Coordinate { x, y: row - 1 })
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
    /// Shot sank the last ship of the fleet.
    FleetDestroyed(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Name of the ship sent to the bottom by this shot, if any.
    pub fn sunk_ship(&self) -> Option<&'static str> {
        match self {
            ShotOutcome::Sunk(name) | ShotOutcome::FleetDestroyed(name) => Some(name),
            _ => None,
        }
    }

    pub fn fleet_destroyed(&self) -> bool {
        matches!(self, ShotOutcome::FleetDestroyed(_))
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Shot missed"),
            ShotOutcome::Hit => write!(f, "Hit"),
            ShotOutcome::Sunk(name) | ShotOutcome::FleetDestroyed(name) => {
                write!(f, "Sunk {}", name)
            }
        }
    }
}

/// Errors returned by grid, placement and shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Cell was already resolved by an earlier shot.
    AlreadyFired(Coordinate),
    /// Ship would run off the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship with this id is already part of the fleet.
    ShipAlreadyPlaced(&'static str),
    /// Cell carries a ship id the fleet does not know.
    UnknownShip(Coordinate),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Coordinate ({}, {}) is off the board", c.x, c.y),
            BoardError::AlreadyFired(c) => write!(f, "Cell {} was already fired upon", c),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced(id) => write!(f, "Ship '{}' is already placed", id),
            BoardError::UnknownShip(c) => write!(f, "Cell {} belongs to no ship in the fleet", c),
        }
    }
}

/// Errors returned by the match controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Operation is not allowed in the current phase.
    WrongPhase,
    /// The other side is to move.
    NotYourTurn,
    /// Not every ship has been deployed yet.
    SetupIncomplete,
    /// The match was reset after the computer's turn was scheduled.
    StaleTurn,
    /// Every cell of the target board has already been fired upon.
    NoTargets,
    Board(BoardError),
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            MatchError::NotYourTurn => write!(f, "It is not this side's turn"),
            MatchError::SetupIncomplete => write!(f, "Fleet deployment is not complete"),
            MatchError::StaleTurn => write!(f, "Match was reset before the turn was played"),
            MatchError::NoTargets => write!(f, "No cells left to fire upon"),
            MatchError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateError {}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
