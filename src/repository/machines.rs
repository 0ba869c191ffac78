//! Machines repository for database operations

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::machine::{Machine, NewMachine},
};

#[derive(Clone)]
pub struct MachinesRepository {
    pool: SqlitePool,
}

impl MachinesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all machines ordered by name
    pub async fn list(&self) -> AppResult<Vec<Machine>> {
        let rows = sqlx::query_as::<_, Machine>("SELECT * FROM machines ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get machine by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Machine {} not found", id)))
    }

    /// Get machine by serial number
    pub async fn get_by_serial(&self, serial_number: &str) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE serial_number = ?")
            .bind(serial_number)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Machine with serial {} not found", serial_number))
            })
    }

    /// Check whether a machine exists
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM machines WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Check if a serial number is already taken by another machine
    pub async fn serial_exists(
        &self,
        serial_number: &str,
        exclude_id: Option<i64>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM machines WHERE serial_number = ? AND id != ?)",
            )
            .bind(serial_number)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM machines WHERE serial_number = ?)")
                .bind(serial_number)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a machine
    pub async fn create(&self, data: &NewMachine) -> AppResult<Machine> {
        let row = sqlx::query_as::<_, Machine>(
            r#"
            INSERT INTO machines (
                name, model, serial_number, machine_type, status, purchase_date,
                purchase_price, last_maintenance_date, operating_hours, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.machine_type)
        .bind(&data.status)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(data.last_maintenance_date)
        .bind(data.operating_hours)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite all mutable fields and stamp the update time
    pub async fn update(&self, id: i64, data: &NewMachine) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>(
            r#"
            UPDATE machines SET
                name = ?, model = ?, serial_number = ?, machine_type = ?, status = ?,
                purchase_date = ?, purchase_price = ?, last_maintenance_date = ?,
                operating_hours = ?, notes = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(&data.machine_type)
        .bind(&data.status)
        .bind(data.purchase_date)
        .bind(data.purchase_price)
        .bind(data.last_maintenance_date)
        .bind(data.operating_hours)
        .bind(&data.notes)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Machine {} not found", id)))
    }

    /// Delete a machine; the foreign-key cascade removes its maintenance
    /// records and usage logs
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM machines WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Machine {} not found", id)));
        }
        Ok(())
    }
}
