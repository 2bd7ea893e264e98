//! Category and free-text filtering over a fetched catalog.

use super::CatalogDef;

/// Active chip of one filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Sentinel chip value meaning "no constraint"
    pub const ALL: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Selection::All => Self::ALL,
            Selection::Only(value) => value,
        }
    }

    /// Exact, case-sensitive label equality
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == actual,
        }
    }
}

/// Indices of the rows that pass every selection and the search query.
///
/// Selections pair up with `def.dimensions` by position; missing trailing
/// selections count as "all". The query matches when any search field
/// contains it, ignoring case. Row order is preserved.
pub fn filter_indices<R: 'static>(
    records: &[R],
    def: &CatalogDef<R>,
    selections: &[Selection],
    query: &str,
) -> Vec<usize> {
    let needle = query.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            def.dimensions
                .iter()
                .zip(selections)
                .all(|(dimension, selection)| selection.matches((dimension.value_of)(record)))
        })
        .filter(|(_, record)| {
            needle.is_empty()
                || (def.search_fields)(record)
                    .into_iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Owned variant of [`filter_indices`]
pub fn filter_records<R: Clone + 'static>(
    records: &[R],
    def: &CatalogDef<R>,
    selections: &[Selection],
    query: &str,
) -> Vec<R> {
    filter_indices(records, def, selections, query)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}
