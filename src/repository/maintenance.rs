//! Maintenance records repository for database operations

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        MaintenanceRecord, MaintenanceRecordWithMachine, NewMaintenanceRecord,
    },
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: SqlitePool,
}

impl MaintenanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all maintenance records with the owning machine's name and model
    pub async fn list_all(&self) -> AppResult<Vec<MaintenanceRecordWithMachine>> {
        let rows = sqlx::query_as::<_, MaintenanceRecordWithMachine>(
            r#"
            SELECT mr.*, m.name AS machine_name, m.model AS machine_model
            FROM maintenance_records mr
            JOIN machines m ON mr.machine_id = m.id
            ORDER BY mr.performed_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List maintenance records for one machine
    pub async fn list_by_machine(&self, machine_id: i64) -> AppResult<Vec<MaintenanceRecord>> {
        let rows = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE machine_id = ? ORDER BY performed_date DESC",
        )
        .bind(machine_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get maintenance record by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<MaintenanceRecord> {
        sqlx::query_as::<_, MaintenanceRecord>("SELECT * FROM maintenance_records WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Create a maintenance record and roll its performed date up onto the
    /// owning machine, in one transaction
    pub async fn create(&self, data: &NewMaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (
                machine_id, maintenance_type, description, performed_date,
                next_due_date, performed_by, cost, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.machine_id)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.performed_date)
        .bind(data.next_due_date)
        .bind(&data.performed_by)
        .bind(data.cost)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE machines SET last_maintenance_date = ?, updated_at = ? WHERE id = ?")
            .bind(data.performed_date)
            .bind(Utc::now())
            .bind(data.machine_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Overwrite all fields in place. The owning machine's
    /// last_maintenance_date is left as-is (only creation rolls it up).
    pub async fn update(
        &self,
        id: i64,
        data: &NewMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            UPDATE maintenance_records SET
                machine_id = ?, maintenance_type = ?, description = ?, performed_date = ?,
                next_due_date = ?, performed_by = ?, cost = ?, notes = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.machine_id)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.performed_date)
        .bind(data.next_due_date)
        .bind(&data.performed_by)
        .bind(data.cost)
        .bind(&data.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Delete a maintenance record. The owning machine's
    /// last_maintenance_date is not rolled back.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance record {} not found",
                id
            )));
        }
        Ok(())
    }
}
