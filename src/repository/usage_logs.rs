//! Usage logs repository for database operations

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::usage_log::{NewUsageLog, UsageLog, UsageLogWithMachine},
};

/// Machines track their cached total in whole hours
fn rounded(hours: f64) -> i64 {
    hours.round() as i64
}

#[derive(Clone)]
pub struct UsageLogsRepository {
    pool: SqlitePool,
}

impl UsageLogsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all usage logs with the owning machine's name and model
    pub async fn list_all(&self) -> AppResult<Vec<UsageLogWithMachine>> {
        let rows = sqlx::query_as::<_, UsageLogWithMachine>(
            r#"
            SELECT ul.*, m.name AS machine_name, m.model AS machine_model
            FROM usage_logs ul
            JOIN machines m ON ul.machine_id = m.id
            ORDER BY ul.start_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List usage logs for one machine
    pub async fn list_by_machine(&self, machine_id: i64) -> AppResult<Vec<UsageLog>> {
        let rows = sqlx::query_as::<_, UsageLog>(
            "SELECT * FROM usage_logs WHERE machine_id = ? ORDER BY start_time DESC",
        )
        .bind(machine_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get usage log by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<UsageLog> {
        sqlx::query_as::<_, UsageLog>("SELECT * FROM usage_logs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usage log {} not found", id)))
    }

    /// Create a usage log and add its rounded hours to the owning machine's
    /// cached total, in one transaction
    pub async fn create(&self, data: &NewUsageLog) -> AppResult<UsageLog> {
        let mut tx = self.pool.begin().await?;

        let log = sqlx::query_as::<_, UsageLog>(
            r#"
            INSERT INTO usage_logs (
                machine_id, operator_name, start_time, end_time, hours_used,
                job_description, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.machine_id)
        .bind(&data.operator_name)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.hours_used)
        .bind(&data.job_description)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE machines SET operating_hours = operating_hours + ?, updated_at = ? WHERE id = ?",
        )
        .bind(rounded(data.hours_used))
        .bind(Utc::now())
        .bind(data.machine_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(log)
    }

    /// Overwrite all fields and reconcile the cached hour totals. A log that
    /// stays on its machine moves the total by the rounded hours delta; a log
    /// moved to another machine debits the old owner and credits the new one.
    pub async fn update(&self, id: i64, data: &NewUsageLog) -> AppResult<UsageLog> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, UsageLog>("SELECT * FROM usage_logs WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usage log {} not found", id)))?;

        let log = sqlx::query_as::<_, UsageLog>(
            r#"
            UPDATE usage_logs SET
                machine_id = ?, operator_name = ?, start_time = ?, end_time = ?,
                hours_used = ?, job_description = ?, notes = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.machine_id)
        .bind(&data.operator_name)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.hours_used)
        .bind(&data.job_description)
        .bind(&data.notes)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        let now = Utc::now();
        if data.machine_id != existing.machine_id {
            sqlx::query(
                "UPDATE machines SET operating_hours = operating_hours - ?, updated_at = ? WHERE id = ?",
            )
            .bind(rounded(existing.hours_used))
            .bind(now)
            .bind(existing.machine_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                "UPDATE machines SET operating_hours = operating_hours + ?, updated_at = ? WHERE id = ?",
            )
            .bind(rounded(data.hours_used))
            .bind(now)
            .bind(data.machine_id)
            .execute(&mut *tx)
            .await?;
        } else {
            let delta = data.hours_used - existing.hours_used;
            if delta != 0.0 {
                sqlx::query(
                    "UPDATE machines SET operating_hours = operating_hours + ?, updated_at = ? WHERE id = ?",
                )
                .bind(rounded(delta))
                .bind(now)
                .bind(existing.machine_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(log)
    }

    /// Remove a usage log, first subtracting its rounded hours from the
    /// owning machine's cached total, in one transaction
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, UsageLog>("SELECT * FROM usage_logs WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usage log {} not found", id)))?;

        sqlx::query(
            "UPDATE machines SET operating_hours = operating_hours - ?, updated_at = ? WHERE id = ?",
        )
        .bind(rounded(existing.hours_used))
        .bind(Utc::now())
        .bind(existing.machine_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM usage_logs WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
