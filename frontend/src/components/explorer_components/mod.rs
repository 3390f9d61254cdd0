pub mod explorer_banners;
pub mod explorer_header;
pub mod extra_facet_search;
pub mod facet_header;
pub mod facets_grid;
pub mod histogram_facet;
pub mod save_cohort_button;
pub mod text_facet;
pub mod time_series_facet;
