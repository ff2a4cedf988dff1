pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod repository;

pub use api::{AppState, create_router};
pub use config::ServerConfig;
