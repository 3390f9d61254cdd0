//! Selection state and its `field=value` wire format.
//!
//! The aggregate service only understands a flat array of filter strings:
//!
//! ```text
//! {"Gender" => ["male", "female"], "Region" => ["northwest"]}
//!   <=> ["Gender=male", "Gender=female", "Region=northwest"]
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::FilterError;

pub const FILTER_SEPARATOR: char = '=';

/// Selected value names per field id, in insertion order.
///
/// A field mapped to an empty list means the same as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionState {
    fields: IndexMap<String, Vec<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field carries a filter.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|values| values.is_empty())
    }

    pub fn selected_values(&self, field_id: &str) -> &[String] {
        self.fields.get(field_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, field_id: &str, value_name: &str) -> bool {
        self.selected_values(field_id).iter().any(|v| v == value_name)
    }

    /// Fields with at least one selected value.
    pub fn filtered_fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(field, values)| (field.as_str(), values.as_slice()))
    }

    /// Adds or removes one value. Returns whether anything changed.
    ///
    /// Removing the last value of a field drops the field entirely.
    pub fn set_selected(&mut self, field_id: &str, value_name: &str, selected: bool) -> bool {
        if selected {
            let entry = self.fields.entry(field_id.to_string()).or_default();
            if entry.iter().any(|v| v == value_name) {
                return false;
            }
            entry.push(value_name.to_string());
            return true;
        }

        let Some(entry) = self.fields.get_mut(field_id) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|v| v != value_name);
        let changed = entry.len() != before;
        if entry.is_empty() {
            self.fields.shift_remove(field_id);
        }
        changed
    }

    /// Drops every field `matches` accepts. Returns whether any had a selection.
    pub fn clear_fields_where(&mut self, mut matches: impl FnMut(&str) -> bool) -> bool {
        let mut removed = false;
        self.fields.retain(|field, values| {
            let drop = matches(field);
            removed |= drop && !values.is_empty();
            !drop
        });
        removed
    }

    pub fn encode(&self) -> Vec<String> {
        encode(self)
    }
}

impl PartialEq for SelectionState {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.filtered_fields().collect::<Vec<_>>();
        let theirs = other.filtered_fields().collect::<Vec<_>>();
        if ours.len() != theirs.len() {
            return false;
        }
        // values compare as sets
        ours.into_iter().all(|(field, values)| {
            let mine = values.iter().collect::<HashSet<_>>();
            let theirs = other.selected_values(field).iter().collect::<HashSet<_>>();
            mine == theirs
        })
    }
}

impl Eq for SelectionState {}

impl<K, V> FromIterator<(K, Vec<V>)> for SelectionState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut fields: IndexMap<String, Vec<String>> = IndexMap::new();
        for (field, values) in iter {
            let entry = fields.entry(field.into()).or_default();
            for value in values.into_iter().map(Into::into) {
                if !entry.contains(&value) {
                    entry.push(value);
                }
            }
        }
        Self { fields }
    }
}

/// Serializes `selection` to `field=value` strings.
///
/// Fields are emitted in insertion order, each followed by its values in
/// insertion order. Fields without values are omitted.
pub fn encode(selection: &SelectionState) -> Vec<String> {
    let mut filter = Vec::new();
    for (field, values) in selection.filtered_fields() {
        for value in values {
            filter.push(format!("{field}{FILTER_SEPARATOR}{value}"));
        }
    }
    filter
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedFilter {
    pub selection: SelectionState,
    /// Fields found in the input that were listed as invalid, first occurrence order.
    pub skipped_fields: Vec<String>,
}

/// Parses `field=value` strings back into a selection.
///
/// Splits on the first `=`, so values may themselves contain `=`. A repeated
/// pair is kept once. Pairs
/// whose field is in `invalid_fields` are skipped and recorded. A string
/// without a separator fails the whole decode.
pub fn decode<S: AsRef<str>>(pairs: &[S], invalid_fields: Option<&HashSet<String>>) -> Result<DecodedFilter, FilterError> {
    let mut decoded = DecodedFilter::default();
    for pair in pairs {
        let pair = pair.as_ref();
        let Some((field, value)) = pair.split_once(FILTER_SEPARATOR) else {
            return Err(FilterError::MalformedPair { pair: pair.to_string() });
        };
        if invalid_fields.is_some_and(|invalid| invalid.contains(field)) {
            if !decoded.skipped_fields.iter().any(|f| f == field) {
                decoded.skipped_fields.push(field.to_string());
            }
            continue;
        }
        let entry = decoded.selection.fields.entry(field.to_string()).or_default();
        if !entry.iter().any(|v| v == value) {
            entry.push(value.to_string());
        }
    }
    Ok(decoded)
}
