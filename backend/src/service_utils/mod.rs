pub mod data_explorer_client;
