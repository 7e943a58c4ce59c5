//! Immutable board representation and game rules for 3x3 Tic-Tac-Toe.
//!
//! A [`GameState`] is a value: applying a move never mutates the original,
//! it produces a fresh state with the mover's mark placed and the turn
//! flipped. This is what lets the search strategies explore many lines from
//! the same position without any copying discipline beyond `Clone`.

use std::fmt;

use crate::{Result, SearchError};

/// The two marks on the board.
///
/// `X` always moves first and is the maximizing player throughout the crate;
/// `O` is the minimizing player (or the random one, under expectimax).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the opposing mark
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One Tic-Tac-Toe position: 9 cells indexed 0..8 row-major, plus whose
/// turn it is.
///
/// States are immutable. [`GameState::successor`] is the only transition,
/// and it returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Board cells (None = empty), indices 0..8 reading left-to-right,
    /// top-to-bottom
    cells: [Option<Mark>; 9],

    /// The mark that plays next
    to_move: Mark,
}

impl GameState {
    /// Creates the initial position: empty board, X to move
    pub fn new() -> Self {
        GameState {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    /// Builds a state from explicit cell contents and side to move
    ///
    /// Useful for scripted positions in tests and demos; no reachability
    /// check is performed.
    pub fn from_cells(cells: [Option<Mark>; 9], to_move: Mark) -> Self {
        GameState { cells, to_move }
    }

    /// Returns the content of one cell
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// Returns the mark that plays next
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns how many cells have been played
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns every empty cell index in ascending order
    ///
    /// The ordering matters: it is the tie-break order for all search
    /// strategies, which keep the first action attaining the best value.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Applies a move, returning the new state
    ///
    /// Fails with [`SearchError::InvalidMove`] if `action` is out of range
    /// or the cell is already occupied. The search strategies only ever
    /// propose indices drawn from [`GameState::legal_actions`], so this
    /// error signals a caller bug, not a search bug.
    pub fn successor(&self, action: usize) -> Result<GameState> {
        if action >= 9 || self.cells[action].is_some() {
            return Err(SearchError::InvalidMove { index: action });
        }

        let mut cells = self.cells;
        cells[action] = Some(self.to_move);

        Ok(GameState {
            cells,
            to_move: self.to_move.other(),
        })
    }

    /// Returns true if the game is over: a line is complete or the board
    /// is full
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.cells.iter().all(|c| c.is_some())
    }

    /// Returns the mark occupying a complete line, if any
    pub fn winner(&self) -> Option<Mark> {
        for [i, j, k] in WIN_LINES {
            if self.cells[i].is_some() && self.cells[i] == self.cells[j] && self.cells[j] == self.cells[k] {
                return self.cells[i];
            }
        }
        None
    }

    /// Exact outcome score: +1.0 if X holds a line, -1.0 if O does,
    /// 0.0 otherwise
    ///
    /// Only meaningful on terminal states, where 0.0 means a draw.
    pub fn utility(&self) -> f64 {
        match self.winner() {
            Some(Mark::X) => 1.0,
            Some(Mark::O) => -1.0,
            None => 0.0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |i: usize| match self.cells[i] {
            Some(mark) => mark.to_string(),
            None => " ".to_string(),
        };

        for row in 0..3 {
            let base = row * 3;
            writeln!(f, "   {} | {} | {} ", cell(base), cell(base + 1), cell(base + 2))?;
            if row < 2 {
                writeln!(f, "  -----------")?;
            }
        }
        Ok(())
    }
}
