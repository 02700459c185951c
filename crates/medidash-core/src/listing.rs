//! The list filter/sort engine shared by the roster, scheduler and records
//! pages.
//!
//! Pipeline, recomputed from scratch on every change:
//!
//! 1. Keep items where any searchable field contains the query as a
//!    case-insensitive substring (an empty query keeps everything).
//! 2. Keep items matching every exact-match filter.
//! 3. If a sort field is active, sort by it, breaking ties by position so
//!    that descending is the exact reverse of ascending; otherwise keep
//!    insertion order.
//!
//! The pipeline borrows the items and never mutates the underlying sequence.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ascending or descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Column header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// A field value as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    /// Compare two values of the same kind. Values of different kinds compare
    /// equal, leaving a mixed column ordered by position.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => locale_compare(a, b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Exact match against the string form a filter control would hold.
    /// Dates use ISO `YYYY-MM-DD`.
    pub fn matches_exact(&self, wanted: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == wanted,
            FieldValue::Number(n) => n.to_string() == wanted,
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string() == wanted,
        }
    }
}

/// Collation for display text: letters compare case-insensitively first, and
/// on a case-only tie lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// A record type the engine can search, filter and sort.
pub trait Listable {
    /// The sortable/filterable columns.
    type Field: Copy + Eq + fmt::Debug;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// The value of one column.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

/// True when any search field contains `query`, ignoring case.
pub fn matches_search<T: Listable>(item: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Column sort state with the header-click toggle behaviour.
///
/// Selecting the active field flips the direction. Selecting a different
/// field makes it active with the page's `new_field_direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    field: Option<F>,
    direction: SortDirection,
    new_field_direction: SortDirection,
}

impl<F: Copy + Eq> SortState<F> {
    /// No active field; insertion order.
    pub fn unsorted(new_field_direction: SortDirection) -> Self {
        Self {
            field: None,
            direction: new_field_direction,
            new_field_direction,
        }
    }

    /// Start sorted by `field` in `direction`.
    pub fn sorted_by(field: F, direction: SortDirection, new_field_direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
            new_field_direction,
        }
    }

    /// Header click on `field`.
    pub fn select(&mut self, field: F) {
        if self.field == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.field = Some(field);
            self.direction = self.new_field_direction;
        }
    }

    pub fn field(&self) -> Option<F> {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The arrow to show next to `field`'s header, if it is the active one.
    pub fn indicator(&self, field: F) -> Option<&'static str> {
        (self.field == Some(field)).then(|| self.direction.arrow())
    }
}

/// An exact-match filter on one column (e.g. appointment type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactFilter<F> {
    pub field: F,
    pub value: String,
}

/// Search text, filters and sort for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub search: String,
    pub filters: Vec<ExactFilter<F>>,
    pub sort: SortState<F>,
}

impl<F: Copy + Eq> ListQuery<F> {
    pub fn new(sort: SortState<F>) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort,
        }
    }

    /// Set (or with `None`, clear) the filter on `field`. At most one filter
    /// per field is kept.
    pub fn set_filter(&mut self, field: F, value: Option<String>) {
        self.filters.retain(|f| f.field != field);
        if let Some(value) = value {
            self.filters.push(ExactFilter { field, value });
        }
    }

    /// The current filter value on `field`.
    pub fn filter(&self, field: F) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.as_str())
    }
}

/// Run the pipeline over `items`.
pub fn apply<'a, T: Listable>(items: &'a [T], query: &ListQuery<T::Field>) -> Vec<&'a T> {
    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| matches_search(*item, &query.search))
        .filter(|item| {
            query
                .filters
                .iter()
                .all(|f| item.field(f.field).matches_exact(&f.value))
        })
        .collect();

    if let Some(field) = query.sort.field() {
        let direction = query.sort.direction();
        // Ties fall back to position, and the direction applies to both, so
        // the two directions are exact mirrors of each other.
        let mut keyed: Vec<(usize, &T)> = visible.into_iter().enumerate().collect();
        keyed.sort_by(|(ia, a), (ib, b)| {
            let ord = a.field(field).compare(&b.field(field)).then(ia.cmp(ib));
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        visible = keyed.into_iter().map(|(_, item)| item).collect();
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        tag: &'static str,
        score: i64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowField {
        Name,
        Tag,
        Score,
    }

    impl Listable for Row {
        type Field = RowField;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.tag]
        }

        fn field(&self, field: RowField) -> FieldValue<'_> {
            match field {
                RowField::Name => FieldValue::Text(self.name),
                RowField::Tag => FieldValue::Text(self.tag),
                RowField::Score => FieldValue::Number(self.score),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "delta", tag: "Red", score: 4 },
            Row { name: "Alpha", tag: "blue", score: 10 },
            Row { name: "charlie", tag: "Red", score: -2 },
            Row { name: "bravo", tag: "green", score: 10 },
        ]
    }

    fn names(v: &[&Row]) -> Vec<&'static str> {
        v.iter().map(|r| r.name).collect()
    }

    // ── Search ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_query_keeps_insertion_order() {
        let data = rows();
        let q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        assert_eq!(names(&apply(&data, &q)), vec!["delta", "Alpha", "charlie", "bravo"]);
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.search = "RED".to_string();
        assert_eq!(names(&apply(&data, &q)), vec!["delta", "charlie"]);

        q.search = "alp".to_string();
        assert_eq!(names(&apply(&data, &q)), vec!["Alpha"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.search = "a".to_string();
        let once: Vec<Row> = apply(&data, &q).into_iter().cloned().collect();
        let twice = apply(&once, &q);
        assert_eq!(names(&twice), once.iter().map(|r| r.name).collect::<Vec<_>>());
    }

    #[test]
    fn exact_filters_combine_with_search() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.set_filter(RowField::Tag, Some("Red".to_string()));
        assert_eq!(names(&apply(&data, &q)), vec!["delta", "charlie"]);

        q.search = "char".to_string();
        assert_eq!(names(&apply(&data, &q)), vec!["charlie"]);

        // Exact match is case-sensitive, unlike search.
        q.search.clear();
        q.set_filter(RowField::Tag, Some("red".to_string()));
        assert!(apply(&data, &q).is_empty());

        q.set_filter(RowField::Tag, None);
        assert_eq!(apply(&data, &q).len(), 4);
        assert_eq!(q.filter(RowField::Tag), None);
    }

    #[test]
    fn number_filter_matches_decimal_text() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.set_filter(RowField::Score, Some("10".to_string()));
        assert_eq!(names(&apply(&data, &q)), vec!["Alpha", "bravo"]);
    }

    // ── Sort ─────────────────────────────────────────────────────────────────

    #[test]
    fn text_sort_ignores_case() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.sort.select(RowField::Name);
        assert_eq!(names(&apply(&data, &q)), vec!["Alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn selecting_same_field_twice_reverses() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.sort.select(RowField::Name);
        let first = names(&apply(&data, &q));
        q.sort.select(RowField::Name);
        let mut second = names(&apply(&data, &q));
        second.reverse();
        assert_eq!(first, second);
        assert_eq!(q.sort.direction(), SortDirection::Desc);
    }

    #[test]
    fn new_field_resets_to_default_direction() {
        let mut sort = SortState::sorted_by(RowField::Name, SortDirection::Desc, SortDirection::Desc);
        sort.select(RowField::Name);
        assert_eq!(sort.direction(), SortDirection::Asc);
        sort.select(RowField::Score);
        assert_eq!(sort.field(), Some(RowField::Score));
        assert_eq!(sort.direction(), SortDirection::Desc);
        assert_eq!(sort.indicator(RowField::Score), Some("▼"));
        assert_eq!(sort.indicator(RowField::Name), None);
    }

    #[test]
    fn tied_values_toggle_to_exact_reverse() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.sort.select(RowField::Score);
        let first = names(&apply(&data, &q));
        assert_eq!(first, vec!["charlie", "delta", "Alpha", "bravo"]);

        q.sort.select(RowField::Score);
        let second = names(&apply(&data, &q));
        assert_eq!(second, vec!["bravo", "Alpha", "delta", "charlie"]);
        assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());

        // Same for a text column with ties.
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.sort.select(RowField::Tag);
        let first = names(&apply(&data, &q));
        q.sort.select(RowField::Tag);
        let mut second = names(&apply(&data, &q));
        second.reverse();
        assert_eq!(first, second);
    }

    #[test]
    fn sorting_does_not_touch_the_source() {
        let data = rows();
        let mut q = ListQuery::new(SortState::unsorted(SortDirection::Asc));
        q.sort.select(RowField::Name);
        let _ = apply(&data, &q);
        assert_eq!(data, rows());
    }

    // ── Field values ─────────────────────────────────────────────────────────

    #[test]
    fn mixed_kinds_compare_equal() {
        assert_eq!(FieldValue::Text("a").compare(&FieldValue::Number(1)), Ordering::Equal);
    }

    #[test]
    fn locale_compare_orders_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "zed"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn dates_match_iso_text() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        assert!(FieldValue::Date(d).matches_exact("2025-04-15"));
        assert!(!FieldValue::Date(d).matches_exact("2025-4-15"));
    }
}
