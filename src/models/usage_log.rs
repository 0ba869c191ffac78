//! Usage log model

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Usage log entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UsageLog {
    pub id: i64,
    pub machine_id: i64,
    pub operator_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub hours_used: f64,
    pub job_description: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Usage log annotated with the owning machine's name and model,
/// as returned by the cross-machine listing
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UsageLogWithMachine {
    pub id: i64,
    pub machine_id: i64,
    pub operator_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub hours_used: f64,
    pub job_description: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub machine_name: String,
    pub machine_model: String,
}

/// Create usage log request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsageLog {
    pub machine_id: Option<i64>,
    pub operator_name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    #[validate(range(min = 0.0, message = "hours_used must be non-negative"))]
    pub hours_used: Option<f64>,
    pub job_description: Option<String>,
    pub notes: Option<String>,
}

/// Update usage log request (full-record overwrite)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsageLog {
    pub machine_id: Option<i64>,
    pub operator_name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    #[validate(range(min = 0.0, message = "hours_used must be non-negative"))]
    pub hours_used: Option<f64>,
    pub job_description: Option<String>,
    pub notes: Option<String>,
}

/// Validated usage payload handed to the repository
#[derive(Debug, Clone)]
pub struct NewUsageLog {
    pub machine_id: i64,
    pub operator_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub hours_used: f64,
    pub job_description: String,
    pub notes: Option<String>,
}
