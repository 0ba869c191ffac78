//! MachinePark Equipment Tracking System
//!
//! A Rust implementation of the MachinePark equipment tracking server,
//! providing a REST JSON API for managing machines, their maintenance
//! records, and usage logs.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
