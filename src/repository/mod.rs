//! Repository layer for database operations

pub mod machines;
pub mod maintenance;
pub mod seed;
pub mod usage_logs;

use sqlx::SqlitePool;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub machines: machines::MachinesRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub usage_logs: usage_logs::UsageLogsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            machines: machines::MachinesRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            usage_logs: usage_logs::UsageLogsRepository::new(pool.clone()),
            pool,
        }
    }
}
