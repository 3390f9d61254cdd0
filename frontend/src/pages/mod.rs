pub mod explorer_page;
