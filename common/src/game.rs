use crate::board::{Mark, CELL_COUNT};
use crate::history::{History, HistoryEntry};
use crate::moves::{move_list, MoveListItem, MoveOrder};
use crate::rules::{self, Outcome, WinningLine};
use std::fmt;
use tracing::debug;

/// Why a move was ignored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The board on display already has a winning line
    GameOver,
    /// Cell already occupied
    Occupied,
    /// Index past the last cell
    OutOfRange,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameOver => write!(f, "game is over"),
            MoveRejection::Occupied => write!(f, "cell already occupied"),
            MoveRejection::OutOfRange => write!(f, "cell out of range"),
        }
    }
}

/// Result of [`Game::apply_move`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Accepted { step: usize, mark: Mark },
    Rejected(MoveRejection),
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }
}

/// Game controller: the move history plus the step currently on display.
///
/// Rewinding never drops entries; the next move made from an earlier step
/// replaces everything after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    history: History,
    step: usize,
    next: Mark,
    winning_line: Option<WinningLine>,
    order: MoveOrder,
}

impl Game {
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            next: Mark::X,
            winning_line: None,
            order,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently on display
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn next_mark(&self) -> Mark {
        self.next
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Entry currently on display
    pub fn current(&self) -> &HistoryEntry {
        // `step` only ever points at an existing entry
        &self.history.entries()[self.step]
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.current().squares, self.next)
    }

    /// Status line, e.g. `Winner: X` or `Next player: O`
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won { mark, .. } => format!("Winner: {mark}"),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress { next } => format!("Next player: {next}"),
        }
    }

    pub fn move_list(&self) -> Vec<MoveListItem> {
        move_list(&self.history, self.step, self.order)
    }

    /// Play the next mark at `index` on the board currently displayed.
    ///
    /// Ignored when a winning line is on the board or the cell is taken.
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        if self.winning_line.is_some() {
            return self.reject(index, MoveRejection::GameOver);
        }
        if index >= CELL_COUNT {
            return self.reject(index, MoveRejection::OutOfRange);
        }

        let mark = self.next;
        let Some(step) = self.history.branch(self.step, index, mark) else {
            return self.reject(index, MoveRejection::Occupied);
        };

        self.step = step;
        self.next = mark.opponent();
        self.winning_line = rules::winning_line(&self.current().squares);

        debug!(index, %mark, step, winning_line = ?self.winning_line, "Move accepted");
        MoveResult::Accepted { step, mark }
    }

    fn reject(&self, index: usize, reason: MoveRejection) -> MoveResult {
        debug!(index, step = self.step, %reason, "Move ignored");
        MoveResult::Rejected(reason)
    }

    /// Display the board as it was at `step`.
    ///
    /// History is kept intact. Returns false, changing nothing, if there is
    /// no such step.
    pub fn jump_to(&mut self, step: usize) -> bool {
        let Some(entry) = self.history.get(step) else {
            debug!(step, last_step = self.history.last_step(), "Jump ignored");
            return false;
        };

        self.winning_line = rules::winning_line(&entry.squares);
        self.step = step;
        self.next = Mark::for_step(step);

        debug!(step, next = %self.next, "Jumped");
        true
    }

    /// Step one entry back, if there is one
    pub fn step_back(&mut self) -> bool {
        match self.step.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => false,
        }
    }

    /// Step one entry forward, if there is one
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.step + 1)
    }

    pub fn jump_to_latest(&mut self) -> bool {
        self.jump_to(self.history.last_step())
    }

    /// Flip the move list between ascending and descending
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = %self.order, "Move list order toggled");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
