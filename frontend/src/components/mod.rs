pub mod error_boundary;
pub mod explorer_components;
pub mod suspend_boundary;
