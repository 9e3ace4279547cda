pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::EngineConfig;
pub use engine::ReadinessEngine;
pub use error::{AppError, AppResult};
