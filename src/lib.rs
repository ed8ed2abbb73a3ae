pub mod api;
pub mod client;
pub mod config;
pub mod generator;
pub mod models;
pub mod ui;
