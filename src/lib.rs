pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod errors;
pub mod parser;
pub mod predictions;
pub mod prompts;
pub mod sports;
pub mod ui;
