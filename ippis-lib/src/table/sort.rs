//! Sort state and ordering.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// Returns `true` for [`Direction::Asc`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The column a table is sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: Direction,
}

impl SortState {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Desc,
        }
    }
}

/// What toggling an already descending column does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCycle {
    /// Ascending, descending, then back to unsorted.
    #[default]
    ThreeState,
    /// Ascending and descending only.
    TwoState,
}

/// Computes the sort state after a header click on `key`.
///
/// A different column always starts ascending. The same column goes from
/// ascending to descending; what follows descending depends on `cycle`.
pub fn next_sort(current: Option<&SortState>, key: &str, cycle: SortCycle) -> Option<SortState> {
    match current {
        Some(sort) if sort.key == key => match (sort.direction, cycle) {
            (Direction::Asc, _) => Some(SortState::desc(key)),
            (Direction::Desc, SortCycle::ThreeState) => None,
            (Direction::Desc, SortCycle::TwoState) => Some(SortState::asc(key)),
        },
        _ => Some(SortState::asc(key)),
    }
}

/// Sorts row indices by the value of the sort column.
///
/// The sort is stable in both directions: rows with equal values keep the
/// relative order they have in `indices`.
pub fn sort_indices<T: Row>(rows: &[T], indices: &mut [usize], sort: &SortState) {
    // One field read per row, not per comparison
    let mut keyed: Vec<(usize, Value)> = indices
        .iter()
        .map(|&i| (i, rows[i].field(&sort.key)))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| match sort.direction {
        Direction::Asc => a.compare(b),
        Direction::Desc => b.compare(a),
    });

    for (slot, (index, _)) in indices.iter_mut().zip(keyed) {
        *slot = index;
    }
}
