//! Kart club backend: tracks, karts, racers, workers, races and race results on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use routes::{app, club_routes, common_routes_with_ready};
pub use seed::{seed_database, SeedOutcome};
pub use state::AppState;
pub use store::{create_tables, ensure_database_exists};
