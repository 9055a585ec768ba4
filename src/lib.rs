pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod queries;

pub use config::AppConfig;
pub use error::{AppError, Result};
