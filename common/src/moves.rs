use crate::board::GridLocation;
use crate::history::History;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order in which the move list is presented
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrder {
    #[default]
    Ascending,
    Descending,
}

impl MoveOrder {
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Label of the button that switches to the other order
    pub fn toggle_label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "Show descending",
            MoveOrder::Descending => "Show ascending",
        }
    }
}

impl fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOrder::Ascending => write!(f, "ascending"),
            MoveOrder::Descending => write!(f, "descending"),
        }
    }
}

/// One line of the move list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveListItem {
    /// Step this item jumps to
    pub step: usize,
    pub location: Option<GridLocation>,
    /// Whether this is the step currently on the board
    pub is_current: bool,
}

impl MoveListItem {
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// Label followed by the played cell, e.g. `Go to move #2 (1, 3)`
    pub fn description(&self) -> String {
        match self.location {
            Some(location) => format!("{} {location}", self.label()),
            None => self.label(),
        }
    }
}

/// Present `history` in the requested order.
///
/// History itself is never reordered; each item keeps the step it stands for.
pub fn move_list(history: &History, current_step: usize, order: MoveOrder) -> Vec<MoveListItem> {
    let items = history.iter().enumerate().map(|(step, entry)| MoveListItem {
        step,
        location: entry.grid_location(),
        is_current: step == current_step,
    });

    match order {
        MoveOrder::Ascending => items.collect(),
        MoveOrder::Descending => items.rev().collect(),
    }
}
