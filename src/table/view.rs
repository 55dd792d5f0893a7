//! Filtered, sorted view over the loaded rows

use super::column::Column;
use super::sort::{SortDirection, SortState};
use crate::data::Creative;
use crate::filters::RowFilter;
use rayon::prelude::*;

/// The rows the table shows, recomputed whenever a filter or sort changes
///
/// Holds the full data set plus the indices of the rows currently visible,
/// in display order. Filtering and sorting run in parallel.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    rows: Vec<Creative>,
    filter: RowFilter,
    sort: Option<SortState>,
    visible: Vec<usize>,
}

impl TableView {
    #[must_use]
    pub fn new(rows: Vec<Creative>) -> Self {
        let mut view = Self {
            rows,
            ..Self::default()
        };
        view.recompute();
        view
    }

    /// Number of loaded rows, ignoring filters
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows passing the current filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub const fn filter(&self) -> &RowFilter {
        &self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Indices into the loaded rows, in display order
    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Visible row at display position `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Creative> {
        self.visible.get(index).and_then(|&i| self.rows.get(i))
    }

    /// Visible rows in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = &Creative> {
        self.visible.iter().filter_map(|&i| self.rows.get(i))
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.filter.query() {
            self.filter.set_query(query);
            self.recompute();
        }
    }

    /// Replace the committed tag tokens; an empty list removes the tag filter
    pub fn set_tag_filter(&mut self, tokens: Vec<String>) {
        self.filter.set_tokens(tokens);
        self.recompute();
    }

    /// Advance the sort cycle for `column`
    pub fn toggle_sort(&mut self, column: Column) {
        self.set_sort(SortState::cycle(self.sort, column));
    }

    /// Flip the direction of the active sort, if any
    pub fn reverse_sort(&mut self) {
        if let Some(state) = self.sort {
            self.set_sort(Some(SortState::new(state.column, state.direction.reversed())));
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
        self.recompute();
    }

    /// Sort by `column` in a fixed direction
    pub fn sort_by(&mut self, column: Column, direction: SortDirection) {
        self.set_sort(Some(SortState::new(column, direction)));
    }

    fn recompute(&mut self) {
        let rows = &self.rows;
        let filter = &self.filter;
        let mut visible: Vec<usize> = (0..rows.len())
            .into_par_iter()
            .filter(|&i| filter.matches(&rows[i]))
            .collect();

        if let Some(state) = self.sort {
            visible.par_sort_by(|&a, &b| state.compare(&rows[a], &rows[b]));
        }

        tracing::trace!(
            visible = visible.len(),
            total = rows.len(),
            "table view recomputed"
        );
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Creative> {
        let specs = [
            ("c1", "Concept:UGC;Audio - Type:voiceover", "US", 10.0),
            ("c2", "Concept:Gameplay", "DE", 30.0),
            ("c3", "Concept:UGC", "DE", 20.0),
            ("c4", "", "US", 5.0),
        ];
        specs
            .iter()
            .map(|(id, tags, country, spend)| {
                let mut r = Creative::complete(*id);
                r.tags = Some((*tags).to_string());
                r.country = Some((*country).to_string());
                r.spend = Some(*spend);
                r
            })
            .collect()
    }

    fn ids(view: &TableView) -> Vec<&str> {
        view.visible_rows().map(|r| r.creative_id.as_str()).collect()
    }

    #[test]
    fn test_new_shows_all_in_load_order() {
        let view = TableView::new(rows());
        assert_eq!(ids(&view), ["c1", "c2", "c3", "c4"]);
        assert_eq!(view.total(), 4);
    }

    #[test]
    fn test_tag_filter_and_clear() {
        let mut view = TableView::new(rows());
        view.set_tag_filter(vec!["Concept:UGC".to_string()]);
        assert_eq!(ids(&view), ["c1", "c3"]);
        view.set_tag_filter(Vec::new());
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_query_and_tags_combine() {
        let mut view = TableView::new(rows());
        view.set_tag_filter(vec!["Concept:UGC".to_string()]);
        view.set_query("de");
        assert_eq!(ids(&view), ["c3"]);
    }

    #[test]
    fn test_sort_cycle_on_spend() {
        let mut view = TableView::new(rows());
        view.toggle_sort(Column::Spend);
        assert_eq!(ids(&view), ["c2", "c3", "c1", "c4"]);
        view.toggle_sort(Column::Spend);
        assert_eq!(ids(&view), ["c4", "c1", "c3", "c2"]);
        view.toggle_sort(Column::Spend);
        assert_eq!(view.sort(), None);
        assert_eq!(ids(&view), ["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_sort_survives_filter_change() {
        let mut view = TableView::new(rows());
        view.sort_by(Column::Spend, SortDirection::Ascending);
        view.set_query("us");
        assert_eq!(ids(&view), ["c4", "c1"]);
    }

    #[test]
    fn test_reverse_sort() {
        let mut view = TableView::new(rows());
        view.reverse_sort();
        assert_eq!(view.sort(), None);
        view.sort_by(Column::CreativeId, SortDirection::Ascending);
        view.reverse_sort();
        assert_eq!(ids(&view), ["c4", "c3", "c2", "c1"]);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut view = TableView::new(rows());
        view.set_query("nothing matches this");
        assert!(view.is_empty());
        assert!(view.get(0).is_none());
    }
}
