//! Maintenance record model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Maintenance record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub machine_id: i64,
    /// Kind of service performed, e.g. "OilChange", "Repair"
    pub maintenance_type: String,
    pub description: String,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub performed_by: String,
    pub cost: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Maintenance record annotated with the owning machine's name and model,
/// as returned by the cross-machine listing
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MaintenanceRecordWithMachine {
    pub id: i64,
    pub machine_id: i64,
    pub maintenance_type: String,
    pub description: String,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub performed_by: String,
    pub cost: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub machine_name: String,
    pub machine_model: String,
}

/// Create maintenance record request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceRecord {
    pub machine_id: Option<i64>,
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub performed_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub performed_by: Option<String>,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// Update maintenance record request (full-record overwrite)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMaintenanceRecord {
    pub machine_id: Option<i64>,
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub performed_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub performed_by: Option<String>,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// Validated maintenance payload handed to the repository
#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub machine_id: i64,
    pub maintenance_type: String,
    pub description: String,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub performed_by: String,
    pub cost: f64,
    pub notes: Option<String>,
}
