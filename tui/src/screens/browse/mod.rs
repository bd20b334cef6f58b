pub mod models;
pub mod ui;
