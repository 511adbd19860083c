//! Predicate filter chain.
//!
//! Every list screen declares a static chain of [`FilterDef`]s. Each entry
//! binds one filter key to one predicate; a row is kept only when every
//! predicate with a non-blank value accepts it.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// A row that can be searched, filtered and keyed by the list engine.
pub trait ListRow: Clone + 'static {
    /// Stable key for `<For>` rendering.
    fn row_key(&self) -> String;

    /// Text value of `field`, or `None` when the row has no such field.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Calendar date of `field`, used by date-range predicates.
    fn field_date(&self, _field: &str) -> Option<NaiveDate> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match against any of the listed fields.
    Search(&'static [&'static str]),
    /// Field equals the selected option (ASCII case-insensitive).
    Exact(&'static str),
    /// Inclusive `[from, to]` on the field's date; either bound may be open.
    DateRange(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub label: &'static str,
    pub predicate: Predicate,
}

pub type FilterChain = &'static [FilterDef];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterValue {
    #[default]
    Unset,
    Text(String),
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Blank values constrain nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Unset => true,
            FilterValue::Text(text) => text.trim().is_empty(),
            FilterValue::Range { from, to } => from.is_none() && to.is_none(),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FilterValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn as_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            FilterValue::Range { from, to } => (*from, *to),
            _ => (None, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter key '{0}'")]
    UnknownKey(String),
    #[error("filter '{key}' does not accept this kind of value")]
    KindMismatch { key: &'static str },
}

static UNSET: FilterValue = FilterValue::Unset;

/// Current filter values keyed by filter key. Blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<&'static str, FilterValue>);

impl Filters {
    pub fn get(&self, key: &str) -> &FilterValue {
        self.0.get(key).unwrap_or(&UNSET)
    }

    pub fn text(&self, key: &str) -> &str {
        self.get(key).as_text()
    }

    /// Stores `value` under `key`; returns whether anything changed.
    pub(crate) fn put(&mut self, key: &'static str, value: FilterValue) -> bool {
        if value.is_blank() {
            return self.0.remove(key).is_some();
        }
        if self.0.get(key) == Some(&value) {
            return false;
        }
        self.0.insert(key, value);
        true
    }

    pub fn active_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn clear(&mut self) -> bool {
        let had_any = !self.0.is_empty();
        self.0.clear();
        had_any
    }
}

/// Looks up `key` in `chain` and checks that `value` suits its predicate.
pub fn resolve(
    chain: FilterChain,
    key: &str,
    value: &FilterValue,
) -> Result<&'static FilterDef, FilterError> {
    let def = chain
        .iter()
        .find(|def| def.key == key)
        .ok_or_else(|| FilterError::UnknownKey(key.to_string()))?;
    let fits = matches!(
        (def.predicate, value),
        (_, FilterValue::Unset)
            | (Predicate::Search(_) | Predicate::Exact(_), FilterValue::Text(_))
            | (Predicate::DateRange(_), FilterValue::Range { .. })
    );
    if fits {
        Ok(def)
    } else {
        Err(FilterError::KindMismatch { key: def.key })
    }
}

fn accepts<T: ListRow>(row: &T, predicate: Predicate, value: &FilterValue) -> bool {
    if value.is_blank() {
        return true;
    }
    match (predicate, value) {
        (Predicate::Search(fields), FilterValue::Text(needle)) => {
            let needle = needle.to_lowercase();
            fields.iter().any(|field| {
                row.field_value(field)
                    .is_some_and(|hay| hay.to_lowercase().contains(&needle))
            })
        }
        (Predicate::Exact(field), FilterValue::Text(selected)) => row
            .field_value(field)
            .is_some_and(|actual| actual.trim().eq_ignore_ascii_case(selected.trim())),
        (Predicate::DateRange(field), FilterValue::Range { from, to }) => {
            match row.field_date(field) {
                Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
                None => false,
            }
        }
        _ => true,
    }
}

/// True when `row` passes every predicate of `chain`.
pub fn matches<T: ListRow>(row: &T, chain: FilterChain, filters: &Filters) -> bool {
    chain
        .iter()
        .all(|def| accepts(row, def.predicate, filters.get(def.key)))
}

/// Order-preserving subset of `source` accepted by the chain.
pub fn apply_filters<T: ListRow>(source: &[T], chain: FilterChain, filters: &Filters) -> Vec<T> {
    if filters.is_empty() {
        return source.to_vec();
    }
    source
        .iter()
        .filter(|row| matches(*row, chain, filters))
        .cloned()
        .collect()
}

/// Sorted distinct values of `field`, for exact-match dropdowns.
pub fn distinct_values<T: ListRow>(rows: &[T], field: &str) -> Vec<String> {
    let mut values: Vec<String> = rows
        .iter()
        .filter_map(|row| row.field_value(field))
        .filter(|value| !value.trim().is_empty())
        .collect();
    values.sort_by_key(|value| value.to_lowercase());
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        tenant: &'static str,
        status: &'static str,
        day: Option<NaiveDate>,
    }

    impl ListRow for Row {
        fn row_key(&self) -> String {
            self.name.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.to_string()),
                "tenant" => Some(self.tenant.to_string()),
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }

        fn field_date(&self, field: &str) -> Option<NaiveDate> {
            match field {
                "day" => self.day,
                _ => None,
            }
        }
    }

    const CHAIN: FilterChain = &[
        FilterDef {
            key: "search",
            label: "Search",
            predicate: Predicate::Search(&["name", "tenant"]),
        },
        FilterDef {
            key: "status",
            label: "Status",
            predicate: Predicate::Exact("status"),
        },
        FilterDef {
            key: "day",
            label: "Date",
            predicate: Predicate::DateRange("day"),
        },
    ];

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Tappy-23B1", tenant: "Sweet Bakes", status: "Online", day: Some(date(12)) },
            Row { name: "Tappy-78A3", tenant: "Cafe de Paris", status: "Offline", day: Some(date(13)) },
            Row { name: "Tappy-OPX1", tenant: "Salon Xpress", status: "Offline", day: None },
            Row { name: "Tappy-119C", tenant: "Bread & Butter", status: "Online", day: Some(date(15)) },
        ]
    }

    fn with(pairs: &[(&'static str, FilterValue)]) -> Filters {
        let mut filters = Filters::default();
        for (key, value) in pairs {
            filters.put(key, value.clone());
        }
        filters
    }

    #[test]
    fn test_search_matches_any_configured_field() {
        let filters = with(&[("search", FilterValue::Text("bakes".into()))]);
        let out = apply_filters(&rows(), CHAIN, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Tappy-23B1");
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let filters = with(&[("search", FilterValue::Text(" bakes".into()))]);
        let out = apply_filters(&rows(), CHAIN, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tenant, "Sweet Bakes");

        let glued = vec![Row { tenant: "SweetBakes", ..rows()[0].clone() }];
        assert!(apply_filters(&glued, CHAIN, &filters).is_empty());
    }

    #[test]
    fn test_blank_values_are_no_ops() {
        let filters = with(&[
            ("search", FilterValue::Text("   ".into())),
            ("status", FilterValue::Text(String::new())),
            ("day", FilterValue::Range { from: None, to: None }),
        ]);
        assert!(filters.is_empty());
        assert_eq!(apply_filters(&rows(), CHAIN, &filters), rows());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let filters = with(&[
            ("search", FilterValue::Text("TAPPY".into())),
            ("status", FilterValue::Text("offline".into())),
        ]);
        let names: Vec<_> = apply_filters(&rows(), CHAIN, &filters)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Tappy-78A3", "Tappy-OPX1"]);
    }

    #[test]
    fn test_date_range_is_inclusive_and_drops_undated_rows() {
        let filters = with(&[(
            "day",
            FilterValue::Range { from: Some(date(13)), to: Some(date(15)) },
        )]);
        let names: Vec<_> = apply_filters(&rows(), CHAIN, &filters)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Tappy-78A3", "Tappy-119C"]);

        let open_ended = with(&[("day", FilterValue::Range { from: None, to: Some(date(12)) })]);
        assert_eq!(apply_filters(&rows(), CHAIN, &open_ended).len(), 1);
    }

    #[test]
    fn test_result_is_ordered_subset_for_every_status() {
        let source = rows();
        for status in ["Online", "Offline", "Unknown", ""] {
            let filters = with(&[("status", FilterValue::Text(status.into()))]);
            let out = apply_filters(&source, CHAIN, &filters);
            let mut cursor = source.iter();
            for row in &out {
                assert!(cursor.any(|candidate| candidate == row));
            }
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_keys_and_wrong_kinds() {
        assert_eq!(
            resolve(CHAIN, "tenant", &FilterValue::Unset).map(|d| d.key),
            Err(FilterError::UnknownKey("tenant".into()))
        );
        assert_eq!(
            resolve(CHAIN, "day", &FilterValue::Text("x".into())).map(|d| d.key),
            Err(FilterError::KindMismatch { key: "day" })
        );
        assert!(resolve(CHAIN, "status", &FilterValue::Text("Online".into())).is_ok());
    }

    #[test]
    fn test_distinct_values() {
        assert_eq!(distinct_values(&rows(), "status"), vec!["Offline", "Online"]);
        assert!(distinct_values(&rows(), "missing").is_empty());
    }
}
