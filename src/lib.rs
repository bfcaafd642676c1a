pub mod charts;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod templates_structs;
