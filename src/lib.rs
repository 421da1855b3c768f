pub mod app;
pub mod data;
pub mod modules;
pub mod types;
pub mod utils;
