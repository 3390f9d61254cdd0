//! Facet models returned by the aggregate search service.

use serde::{Deserialize, Serialize};

/// Field type the service reports for free-text (keyword) fields.
pub const ES_FIELD_TYPE_TEXT: &str = "text";
/// Field type of the synthetic "Samples Overview" facet.
pub const ES_FIELD_TYPE_SAMPLES_OVERVIEW: &str = "samples_overview";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetValue {
    pub name: String,
    pub count: u64,
}

impl FacetValue {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self { name: name.into(), count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetKind {
    Text,
    Histogram,
    TimeSeries,
    SamplesOverview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Facet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Join key to the selection state.
    pub es_field_name: String,
    pub es_field_type: String,
    pub values: Vec<FacetValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_names: Option<Vec<String>>,
    /// Indexed `[time][value]`, parallel to `time_names` and `value_names`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_series_value_counts: Option<Vec<Vec<u64>>>,
}

impl Facet {
    pub fn field_id(&self) -> &str {
        &self.es_field_name
    }

    pub fn kind(&self) -> FacetKind {
        if self.time_names.as_ref().is_some_and(|t| !t.is_empty()) {
            return FacetKind::TimeSeries;
        }
        match self.es_field_type.as_str() {
            ES_FIELD_TYPE_SAMPLES_OVERVIEW => FacetKind::SamplesOverview,
            ES_FIELD_TYPE_TEXT => FacetKind::Text,
            _ => FacetKind::Histogram,
        }
    }

    /// Text-like facets keep the order the service sent; numeric ones do not.
    pub fn is_categorical(&self) -> bool {
        matches!(self.es_field_type.as_str(), ES_FIELD_TYPE_TEXT | ES_FIELD_TYPE_SAMPLES_OVERVIEW)
    }
}

/// Authoritative state after applying a filter. Replaces prior facets wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetsResponse {
    pub count: u64,
    pub facets: Vec<Facet>,
    /// Fields named in the `filter` parameter that the index does not know.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_filter_facets: Vec<String>,
    /// Fields named in the `extraFacets` parameter that the index does not know.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid_extra_facets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatasetResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_placeholder_text: Option<String>,
}

/// One entry of the add-facet search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FieldSearchResult {
    pub display_text: String,
    pub elasticsearch_field_name: String,
    pub facet_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FieldSearchResponse {
    pub fields: Vec<FieldSearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_text_facet_json() {
        let json = r#"{
            "name": "Gender",
            "description": "Self-reported",
            "es_field_name": "demographics.gender",
            "es_field_type": "text",
            "values": [{"name": "male", "count": 71}, {"name": "female", "count": 280}]
        }"#;
        let facet: Facet = serde_json::from_str(json).unwrap();
        assert_eq!(facet.field_id(), "demographics.gender");
        assert_eq!(facet.kind(), FacetKind::Text);
        assert_eq!(facet.values[1], FacetValue::new("female", 280));
        assert_eq!(facet.time_names, None);
    }

    #[test]
    fn kind_is_derived_from_field_type_and_time_names() {
        let mut facet = Facet { es_field_type: "long".to_string(), ..Default::default() };
        assert_eq!(facet.kind(), FacetKind::Histogram);
        assert!(!facet.is_categorical());

        facet.es_field_type = ES_FIELD_TYPE_SAMPLES_OVERVIEW.to_string();
        assert_eq!(facet.kind(), FacetKind::SamplesOverview);
        assert!(facet.is_categorical());

        facet.time_names = Some(vec![]);
        assert_eq!(facet.kind(), FacetKind::SamplesOverview);

        facet.time_names = Some(vec!["1".to_string()]);
        assert_eq!(facet.kind(), FacetKind::TimeSeries);
    }

    #[test]
    fn facets_response_tolerates_missing_optional_fields() {
        let response: FacetsResponse = serde_json::from_str(r#"{"count": 12, "facets": [], "sql_query": "SELECT 1"}"#).unwrap();
        assert_eq!(response.count, 12);
        assert!(response.invalid_filter_facets.is_empty());
        assert!(response.invalid_extra_facets.is_empty());
    }
}
