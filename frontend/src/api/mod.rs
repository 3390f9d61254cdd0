pub mod data_explorer_api;
