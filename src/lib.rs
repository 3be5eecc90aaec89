pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod state;
pub mod store;
