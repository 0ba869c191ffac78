//! Machine model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{maintenance::MaintenanceRecord, usage_log::UsageLog};

/// Machine record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Machine {
    pub id: i64,
    pub name: String,
    pub model: String,
    /// Unique across all machines
    pub serial_number: String,
    pub machine_type: String,
    /// Free-form status, e.g. "Active", "Inactive", "UnderMaintenance"
    pub status: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    /// Derived: performed date of the most recently created maintenance record
    pub last_maintenance_date: Option<NaiveDate>,
    /// Derived: rounded sum of hours recorded through the usage ledger
    pub operating_hours: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Composed detail view: the machine plus its full maintenance and usage history
#[derive(Debug, Serialize, ToSchema)]
pub struct MachineDetails {
    #[serde(flatten)]
    pub machine: Machine,
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub usage_logs: Vec<UsageLog>,
}

/// Create machine request
///
/// Required fields arrive as `Option` so that missing input surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMachine {
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub machine_type: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "purchase_price must be non-negative"))]
    pub purchase_price: Option<f64>,
    pub last_maintenance_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "operating_hours must be non-negative"))]
    pub operating_hours: Option<i64>,
    pub notes: Option<String>,
}

/// Update machine request (full-record overwrite, no partial patch)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMachine {
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub machine_type: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "purchase_price must be non-negative"))]
    pub purchase_price: Option<f64>,
    pub last_maintenance_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "operating_hours must be non-negative"))]
    pub operating_hours: Option<i64>,
    pub notes: Option<String>,
}

/// Validated machine payload handed to the repository
#[derive(Debug, Clone)]
pub struct NewMachine {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub machine_type: String,
    pub status: String,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    pub last_maintenance_date: Option<NaiveDate>,
    pub operating_hours: i64,
    pub notes: Option<String>,
}
