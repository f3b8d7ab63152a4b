//! Core game state for Tic-Tac-Toe.
//! All mutation goes through `reset` and `apply_move`; the yew reducer is a thin
//! wrapper that maps pointer actions onto those two transitions.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::layout::CELL_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// Row-major board; `None` is an empty cell.
pub type Grid = [Option<Mark>; CELL_COUNT];

/// Rows, then columns, then the two diagonals.
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

/// First line in `WIN_LINES` order that is entirely `mark`.
pub fn winning_line(grid: &Grid, mark: Mark) -> Option<[usize; 3]> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| grid[i] == Some(mark)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won { mark: Mark, line: [usize; 3] },
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first reset; the board waits for a click to start.
    Idle,
    Playing,
    RoundEnded(Outcome),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
}

impl Scoreboard {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn increment(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x = self.x.saturating_add(1),
            Mark::O => self.o = self.o.saturating_add(1),
        }
    }

    pub fn total(&self) -> u64 {
        self.x as u64 + self.o as u64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    /// Unset until the first reset.
    pub current: Option<Mark>,
    /// Number of marks placed this round.
    pub turn_count: u8,
    pub scores: Scoreboard,
    pub phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: [None; CELL_COUNT],
            current: None,
            turn_count: 0,
            scores: Scoreboard::default(),
            phase: Phase::Idle,
        }
    }

    /// True when the next click should start a new round instead of placing a mark.
    pub fn awaiting_restart(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::RoundEnded(_))
    }

    pub fn status_text(&self) -> &'static str {
        match self.phase {
            Phase::Idle => "Click to start",
            Phase::Playing => "",
            Phase::RoundEnded(Outcome::Won { .. }) => "Click to restart",
            Phase::RoundEnded(Outcome::Tie) => "Tie. Click to restart",
        }
    }

    /// Clears the board for a new round. Scores and the current player carry over;
    /// the very first reset hands the move to X.
    pub fn reset(&mut self) {
        self.grid = [None; CELL_COUNT];
        self.turn_count = 0;
        self.phase = Phase::Playing;
        if self.current.is_none() {
            self.current = Some(Mark::X);
        }
    }

    /// Places the current player's mark at `cell`, evaluates the round, then hands
    /// the turn over. Returns false (and changes nothing) when the move is not legal.
    pub fn apply_move(&mut self, cell: usize) -> bool {
        if self.awaiting_restart() || cell >= CELL_COUNT || self.grid[cell].is_some() {
            return false;
        }
        let Some(mark) = self.current else {
            return false;
        };
        self.grid[cell] = Some(mark);
        self.turn_count += 1;

        if let Some(line) = winning_line(&self.grid, mark) {
            self.scores.increment(mark);
            self.phase = Phase::RoundEnded(Outcome::Won { mark, line });
        } else if self.turn_count as usize == CELL_COUNT && !self.awaiting_restart() {
            self.phase = Phase::RoundEnded(Outcome::Tie);
        }

        // The switch happens even when the round just ended, so a frozen board
        // shows the player who moves next.
        self.current = Some(mark.other());
        true
    }

    /// Pointer click: restart when the round is over, otherwise place at `cell`.
    /// Returns whether anything changed.
    pub fn click(&mut self, cell: Option<usize>) -> bool {
        if self.awaiting_restart() {
            self.reset();
            return true;
        }
        match cell {
            Some(i) => self.apply_move(i),
            None => false,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.phase {
            Phase::RoundEnded(Outcome::Won { mark, .. }) => Some(mark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    /// A click on the surface; `cell` is `None` when it landed outside the board.
    Click { cell: Option<usize> },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let changed = match action {
            GameAction::Click { cell } => new.click(cell),
        };
        if !changed {
            return self;
        }
        Rc::new(new)
    }
}
