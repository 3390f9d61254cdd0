//! Render-ready views of a facet under the current selection.
//!
//! Every facet kind exposes the same contract: a list of values with their
//! selected/dimmed state, and for each value the [`FacetToggle`] a click
//! emits back to the controller.

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetKind, FacetValue};
use crate::facet_aggregation::{is_dimmed, sum_counts};
use crate::filter_codec::SelectionState;

/// What a click on a facet value asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetToggle {
    pub field_id: String,
    pub value_name: String,
    /// Selection state of the value after the click.
    pub select: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValueView {
    pub name: String,
    pub count: u64,
    pub selected: bool,
    pub dimmed: bool,
    pub toggle: FacetToggle,
}

impl FacetValueView {
    fn new(field_id: &str, value: &FacetValue, selected: &[String]) -> Self {
        let is_selected = selected.iter().any(|s| *s == value.name);
        Self {
            name: value.name.clone(),
            count: value.count,
            selected: is_selected,
            dimmed: is_dimmed(value, Some(selected)),
            toggle: FacetToggle {
                field_id: field_id.to_string(),
                value_name: value.name.clone(),
                select: !is_selected,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetHeaderView {
    pub field_id: String,
    pub name: String,
    pub description: Option<String>,
    /// `None` when the kind hides the total.
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueListView {
    pub header: FacetHeaderView,
    pub values: Vec<FacetValueView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramView {
    pub header: FacetHeaderView,
    /// Categorical facets keep server order, numeric ones list the highest bucket first.
    pub bars: Vec<FacetValueView>,
    pub max_count: u64,
}

/// One time bucket of a time-series facet; selection is keyed by `field_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesColumn {
    pub time_name: String,
    pub field_id: String,
    pub cells: Vec<FacetValueView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesView {
    pub header: FacetHeaderView,
    pub value_names: Vec<String>,
    pub columns: Vec<TimeSeriesColumn>,
    pub max_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetView {
    Text(ValueListView),
    Histogram(HistogramView),
    TimeSeries(TimeSeriesView),
    SamplesOverview(ValueListView),
}

impl FacetView {
    pub fn build(facet: &Facet, selection: &SelectionState) -> Self {
        match facet.kind() {
            FacetKind::Text => FacetView::Text(value_list(facet, selection, true)),
            FacetKind::SamplesOverview => FacetView::SamplesOverview(value_list(facet, selection, false)),
            FacetKind::Histogram => FacetView::Histogram(histogram(facet, selection)),
            FacetKind::TimeSeries => FacetView::TimeSeries(time_series(facet, selection)),
        }
    }

    pub fn header(&self) -> &FacetHeaderView {
        match self {
            FacetView::Text(v) | FacetView::SamplesOverview(v) => &v.header,
            FacetView::Histogram(v) => &v.header,
            FacetView::TimeSeries(v) => &v.header,
        }
    }
}

/// Field id under which a single time bucket of a time-series facet is filtered.
pub fn time_series_field_id(es_field_name: &str, time_name: &str) -> String {
    // the index stores "1.5" buckets as "1_5"
    format!("{es_field_name}.{}", time_name.replacen('.', "_", 1))
}

/// True for `es_field_name` itself and for the keys of its time buckets.
pub fn is_field_or_time_bucket(field_id: &str, es_field_name: &str) -> bool {
    match field_id.strip_prefix(es_field_name) {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix('.')
            .is_some_and(|time| !time.is_empty() && !time.contains('.')),
        None => false,
    }
}

fn header(facet: &Facet, selection: &SelectionState, show_total: bool) -> FacetHeaderView {
    let selected = selection.selected_values(facet.field_id());
    FacetHeaderView {
        field_id: facet.field_id().to_string(),
        name: facet.name.clone(),
        description: facet.description.clone(),
        total_count: show_total.then(|| sum_counts(&facet.values, Some(selected))),
    }
}

fn value_views(facet: &Facet, selection: &SelectionState) -> Vec<FacetValueView> {
    let selected = selection.selected_values(facet.field_id());
    facet
        .values
        .iter()
        .map(|v| FacetValueView::new(facet.field_id(), v, selected))
        .collect()
}

fn value_list(facet: &Facet, selection: &SelectionState, show_total: bool) -> ValueListView {
    ValueListView {
        header: header(facet, selection, show_total),
        values: value_views(facet, selection),
    }
}

fn histogram(facet: &Facet, selection: &SelectionState) -> HistogramView {
    let mut bars = value_views(facet, selection);
    if !facet.is_categorical() {
        bars.reverse();
    }
    let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);
    HistogramView {
        header: header(facet, selection, true),
        bars,
        max_count,
    }
}

fn time_series(facet: &Facet, selection: &SelectionState) -> TimeSeriesView {
    let time_names = facet.time_names.clone().unwrap_or_default();
    let value_names = facet.value_names.clone().unwrap_or_default();
    let counts = facet.time_series_value_counts.as_deref().unwrap_or(&[]);

    let mut max_count = 0;
    let columns = time_names
        .iter()
        .enumerate()
        .map(|(ti, time_name)| {
            let field_id = time_series_field_id(facet.field_id(), time_name);
            let selected = selection.selected_values(&field_id);
            let cells = value_names
                .iter()
                .enumerate()
                .map(|(vi, name)| {
                    let count = counts.get(ti).and_then(|row| row.get(vi)).copied().unwrap_or(0);
                    max_count = max_count.max(count);
                    FacetValueView::new(&field_id, &FacetValue::new(name.clone(), count), selected)
                })
                .collect();
            TimeSeriesColumn { time_name: time_name.clone(), field_id, cells }
        })
        .collect();

    TimeSeriesView {
        header: header(facet, selection, false),
        value_names,
        columns,
        max_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gender_facet() -> Facet {
        Facet {
            name: "Gender".to_string(),
            es_field_name: "gender".to_string(),
            es_field_type: "text".to_string(),
            values: vec![FacetValue::new("male", 71), FacetValue::new("female", 280)],
            ..Default::default()
        }
    }

    #[test]
    fn text_view_marks_selection_and_dimming() {
        let mut selection = SelectionState::new();
        selection.set_selected("gender", "male", true);
        let FacetView::Text(view) = FacetView::build(&gender_facet(), &selection) else {
            panic!("expected a text facet");
        };
        assert_eq!(view.header.total_count, Some(71));
        let male = &view.values[0];
        assert!(male.selected && !male.dimmed);
        assert_eq!(male.toggle, FacetToggle { field_id: "gender".into(), value_name: "male".into(), select: false });
        let female = &view.values[1];
        assert!(!female.selected && female.dimmed);
        assert!(female.toggle.select);
    }

    #[test]
    fn samples_overview_hides_total() {
        let mut facet = gender_facet();
        facet.name = "Samples Overview".to_string();
        facet.es_field_type = "samples_overview".to_string();
        let view = FacetView::build(&facet, &SelectionState::new());
        assert!(matches!(view, FacetView::SamplesOverview(_)));
        assert_eq!(view.header().total_count, None);
    }

    #[test]
    fn numeric_histogram_lists_highest_bucket_first() {
        let facet = Facet {
            name: "Age".to_string(),
            es_field_name: "age".to_string(),
            es_field_type: "long".to_string(),
            values: vec![FacetValue::new("10-19", 5), FacetValue::new("20-29", 9), FacetValue::new("30-39", 2)],
            ..Default::default()
        };
        let FacetView::Histogram(view) = FacetView::build(&facet, &SelectionState::new()) else {
            panic!("expected a histogram");
        };
        let names = view.bars.iter().map(|b| b.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["30-39", "20-29", "10-19"]);
        assert_eq!(view.max_count, 9);
        assert_eq!(view.header.total_count, Some(16));
    }

    #[test]
    fn time_series_selection_is_keyed_per_bucket() {
        let facet = Facet {
            name: "Weight".to_string(),
            es_field_name: "weight".to_string(),
            es_field_type: "long".to_string(),
            time_names: Some(vec!["1".to_string(), "1.5".to_string()]),
            value_names: Some(vec!["100-199".to_string(), "200-299".to_string()]),
            time_series_value_counts: Some(vec![vec![3, 4], vec![7]]),
            ..Default::default()
        };
        let mut selection = SelectionState::new();
        selection.set_selected("weight.1_5", "100-199", true);

        let FacetView::TimeSeries(view) = FacetView::build(&facet, &selection) else {
            panic!("expected a time series");
        };
        assert_eq!(view.header.total_count, None);
        assert_eq!(view.max_count, 7);
        assert_eq!(view.columns[0].field_id, "weight.1");
        assert!(view.columns[0].cells.iter().all(|c| !c.dimmed && !c.selected));

        let second = &view.columns[1];
        assert_eq!(second.field_id, "weight.1_5");
        assert!(second.cells[0].selected);
        assert!(second.cells[1].dimmed);
        // missing count in a ragged matrix reads as zero
        assert_eq!(second.cells[1].count, 0);
        assert_eq!(second.cells[0].toggle.field_id, "weight.1_5");
    }

    #[test]
    fn time_bucket_keys_belong_to_their_facet() {
        assert!(is_field_or_time_bucket("weight", "weight"));
        assert!(is_field_or_time_bucket(&time_series_field_id("weight", "1.5"), "weight"));
        assert!(is_field_or_time_bucket("weight.Unknown", "weight"));
        assert!(!is_field_or_time_bucket("weight_kg", "weight"));
        assert!(!is_field_or_time_bucket("weights.1", "weight"));
        assert!(!is_field_or_time_bucket("weight.", "weight"));
        assert!(!is_field_or_time_bucket("bmi.1", "weight"));
    }

    #[test]
    fn time_series_field_id_replaces_first_dot_only() {
        assert_eq!(time_series_field_id("bmi", "2.5"), "bmi.2_5");
        assert_eq!(time_series_field_id("bmi", "Unknown"), "bmi.Unknown");
    }
}
