pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod fdc;
pub mod saved;
pub mod search;
pub mod state;
pub mod ui;
