//! Column sorting

use super::column::Column;
use crate::data::{Creative, FieldValue};
use std::cmp::Ordering;
use Ranked::{Absent, Present};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to a sorted header
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// Direction a column starts in when first sorted: numbers largest first
    #[must_use]
    pub const fn initial_for(column: Column) -> Self {
        if column.is_numeric() {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(column: Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Next state after clicking `column`'s header
    ///
    /// Unsorted → initial direction → reversed → unsorted. Clicking a
    /// different column starts over at its initial direction.
    #[must_use]
    pub fn cycle(current: Option<Self>, column: Column) -> Option<Self> {
        match current {
            Some(state) if state.column == column => {
                if state.direction == SortDirection::initial_for(column) {
                    Some(Self::new(column, state.direction.reversed()))
                } else {
                    None
                }
            }
            _ => Some(Self::new(column, SortDirection::initial_for(column))),
        }
    }

    /// Order two rows; absent values always go last regardless of direction
    #[must_use]
    pub fn compare(&self, a: &Creative, b: &Creative) -> Ordering {
        let ordering = match (self.column.value(a), self.column.value(b)) {
            (FieldValue::Text(x), FieldValue::Text(y)) => {
                present_first(x, y, |x, y| x.to_lowercase().cmp(&y.to_lowercase()))
            }
            (FieldValue::Number(x), FieldValue::Number(y)) => {
                present_first(x, y, |x, y| x.total_cmp(&y))
            }
            (FieldValue::Count(x), FieldValue::Count(y)) => present_first(x, y, |x, y| x.cmp(&y)),
            _ => Absent(Ordering::Equal),
        };

        match ordering {
            Present(o) if self.direction == SortDirection::Descending => o.reverse(),
            Present(o) | Absent(o) => o,
        }
    }
}

/// Result of comparing two optional values
enum Ranked {
    /// Both present; subject to the sort direction
    Present(Ordering),
    /// At least one absent; fixed regardless of direction
    Absent(Ordering),
}

fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ranked {
    match (a, b) {
        (Some(a), Some(b)) => Present(cmp(a, b)),
        (Some(_), None) => Absent(Ordering::Less),
        (None, Some(_)) => Absent(Ordering::Greater),
        (None, None) => Absent(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_spend(id: &str, spend: Option<f64>) -> Creative {
        let mut r = Creative::new(id);
        r.spend = spend;
        r
    }

    fn with_name(id: &str, name: Option<&str>) -> Creative {
        let mut r = Creative::new(id);
        r.creative_name = name.map(str::to_string);
        r
    }

    fn sorted_ids(mut rows: Vec<Creative>, state: SortState) -> Vec<String> {
        rows.sort_by(|a, b| state.compare(a, b));
        rows.into_iter().map(|r| r.creative_id).collect()
    }

    #[test]
    fn test_cycle_text_column() {
        let first = SortState::cycle(None, Column::CreativeName);
        assert_eq!(first, Some(SortState::new(Column::CreativeName, SortDirection::Ascending)));
        let second = SortState::cycle(first, Column::CreativeName);
        assert_eq!(second, Some(SortState::new(Column::CreativeName, SortDirection::Descending)));
        assert_eq!(SortState::cycle(second, Column::CreativeName), None);
    }

    #[test]
    fn test_cycle_numeric_starts_descending() {
        let first = SortState::cycle(None, Column::Spend);
        assert_eq!(first, Some(SortState::new(Column::Spend, SortDirection::Descending)));
        let second = SortState::cycle(first, Column::Spend);
        assert_eq!(second, Some(SortState::new(Column::Spend, SortDirection::Ascending)));
    }

    #[test]
    fn test_cycle_other_column_restarts() {
        let current = Some(SortState::new(Column::Spend, SortDirection::Ascending));
        assert_eq!(
            SortState::cycle(current, Column::Country),
            Some(SortState::new(Column::Country, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_absent_values_sort_last_both_directions() {
        let rows = vec![
            with_spend("a", None),
            with_spend("b", Some(5.0)),
            with_spend("c", Some(10.0)),
        ];
        let desc = SortState::new(Column::Spend, SortDirection::Descending);
        assert_eq!(sorted_ids(rows.clone(), desc), ["c", "b", "a"]);
        let asc = SortState::new(Column::Spend, SortDirection::Ascending);
        assert_eq!(sorted_ids(rows, asc), ["b", "c", "a"]);
    }

    #[test]
    fn test_text_sort_ignores_case_and_is_stable() {
        let rows = vec![
            with_name("1", Some("beta")),
            with_name("2", Some("Alpha")),
            with_name("3", Some("BETA")),
            with_name("4", None),
        ];
        let asc = SortState::new(Column::CreativeName, SortDirection::Ascending);
        assert_eq!(sorted_ids(rows, asc), ["2", "1", "3", "4"]);
    }
}
