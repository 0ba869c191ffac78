//! Usage ledger service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::usage_log::{
        CreateUsageLog, NewUsageLog, UpdateUsageLog, UsageLog, UsageLogWithMachine,
    },
    repository::Repository,
};

use super::{require, require_text};

#[derive(Clone)]
pub struct UsageLogsService {
    repository: Repository,
}

impl UsageLogsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<UsageLogWithMachine>> {
        self.repository.usage_logs.list_all().await
    }

    pub async fn list_by_machine(&self, machine_id: i64) -> AppResult<Vec<UsageLog>> {
        self.repository.usage_logs.list_by_machine(machine_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<UsageLog> {
        self.repository.usage_logs.get_by_id(id).await
    }

    /// Record a usage session. The owning machine's cached operating hours
    /// grow by the rounded session hours as part of the same write.
    pub async fn create(&self, data: &CreateUsageLog) -> AppResult<UsageLog> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let log = NewUsageLog {
            machine_id: require(data.machine_id, "machine_id")?,
            operator_name: require_text(data.operator_name.as_deref(), "operator_name")?,
            start_time: require(data.start_time, "start_time")?,
            end_time: require(data.end_time, "end_time")?,
            hours_used: require(data.hours_used, "hours_used")?,
            job_description: require_text(data.job_description.as_deref(), "job_description")?,
            notes: data.notes.clone(),
        };

        if !self.repository.machines.exists(log.machine_id).await? {
            return Err(AppError::NotFound(format!(
                "Machine {} not found",
                log.machine_id
            )));
        }

        self.repository.usage_logs.create(&log).await
    }

    /// Overwrite a log in place; the cached hour totals follow the hours
    /// delta (and the record's machine, when it moves).
    pub async fn update(&self, id: i64, data: &UpdateUsageLog) -> AppResult<UsageLog> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.usage_logs.get_by_id(id).await?;

        let log = NewUsageLog {
            machine_id: require(data.machine_id, "machine_id")?,
            operator_name: require_text(data.operator_name.as_deref(), "operator_name")?,
            start_time: require(data.start_time, "start_time")?,
            end_time: require(data.end_time, "end_time")?,
            hours_used: require(data.hours_used, "hours_used")?,
            job_description: require_text(data.job_description.as_deref(), "job_description")?,
            notes: data.notes.clone(),
        };

        if log.machine_id != existing.machine_id
            && !self.repository.machines.exists(log.machine_id).await?
        {
            return Err(AppError::NotFound(format!(
                "Machine {} not found",
                log.machine_id
            )));
        }

        self.repository.usage_logs.update(id, &log).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.usage_logs.delete(id).await
    }
}
