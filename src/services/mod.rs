//! Business logic services

pub mod machines;
pub mod maintenance;
pub mod usage_logs;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub machines: machines::MachinesService,
    pub maintenance: maintenance::MaintenanceService,
    pub usage_logs: usage_logs::UsageLogsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            machines: machines::MachinesService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            usage_logs: usage_logs::UsageLogsService::new(repository),
        }
    }
}

/// Presence check for a required value
pub(crate) fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

/// Presence check for a required, non-blank text value
pub(crate) fn require_text(value: Option<&str>, field: &str) -> AppResult<String> {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// In-memory database with the full schema, for service tests
#[cfg(test)]
pub(crate) async fn test_services() -> Services {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    // A single connection, so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    Services::new(Repository::new(pool))
}
