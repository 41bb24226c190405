pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod render;
pub mod services;
pub mod templates;
