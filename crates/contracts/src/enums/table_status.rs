use serde::{Deserialize, Serialize};

/// Status of a table on the demo floor map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    Free,
    Occupied,
}

impl TableStatus {
    /// Class that marks the `.demo-table` element
    pub const OCCUPIED_CLASS: &'static str = "occupied";

    /// Text of the `.table-time` label of a free table
    pub const FREE_LABEL: &'static str = "Livre";

    pub fn from_occupied(occupied: bool) -> Self {
        if occupied {
            TableStatus::Occupied
        } else {
            TableStatus::Free
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            TableStatus::Free => TableStatus::Occupied,
            TableStatus::Occupied => TableStatus::Free,
        }
    }
}
