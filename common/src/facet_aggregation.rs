//! Count totals and dimming for a facet's values.
//!
//! Both functions are pure and shared by every facet rendering.

use crate::facet::FacetValue;

/// Sums `count` over all values, or over the selected ones when any are selected.
pub fn sum_counts<S: AsRef<str>>(values: &[FacetValue], selected_names: Option<&[S]>) -> u64 {
    match selected_names {
        Some(selected) if !selected.is_empty() => values
            .iter()
            .filter(|v| selected.iter().any(|s| s.as_ref() == v.name))
            .map(|v| v.count)
            .sum(),
        _ => values.iter().map(|v| v.count).sum(),
    }
}

/// A value is dimmed when siblings are selected and it is not one of them.
pub fn is_dimmed<S: AsRef<str>>(value: &FacetValue, selected_names: Option<&[S]>) -> bool {
    match selected_names {
        Some(selected) if !selected.is_empty() => !selected.iter().any(|s| s.as_ref() == value.name),
        _ => false,
    }
}
