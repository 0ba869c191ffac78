//! Demo data for first start on an empty store

use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppResult;

/// Insert a small demo fleet when the machines table is empty.
///
/// Returns `true` when the demo rows were inserted. The demo ledger rows are
/// written verbatim, with the machine's cached fields pre-set to match.
pub async fn seed_demo_data_if_empty(pool: &SqlitePool) -> AppResult<bool> {
    let machine_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines")
        .fetch_one(pool)
        .await?;
    if machine_count > 0 {
        return Ok(false);
    }

    let now = Utc::now();

    let mower_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO machines (
            name, model, serial_number, machine_type, status, purchase_date,
            purchase_price, operating_hours, notes, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind("John Deere X350")
    .bind("X350")
    .bind("JD-X350-2023-001")
    .bind("Mower")
    .bind("Active")
    .bind("2023-05-15")
    .bind(3499.99)
    .bind(125)
    .bind("Primary mower for residential lawns")
    .bind(now)
    .fetch_one(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO machines (
            name, model, serial_number, machine_type, status, purchase_date,
            purchase_price, operating_hours, notes, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("Stihl FS 56 RC-E")
    .bind("FS 56 RC-E")
    .bind("STIHL-FS56-2023-002")
    .bind("Trimmer")
    .bind("Active")
    .bind("2023-06-01")
    .bind(199.99)
    .bind(45)
    .bind("Lightweight trimmer for edges")
    .bind(now)
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO maintenance_records (
            machine_id, maintenance_type, description, performed_date,
            performed_by, cost, notes, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(mower_id)
    .bind("OilChange")
    .bind("Regular oil change")
    .bind("2024-01-15")
    .bind("John Smith")
    .bind(25.00)
    .bind("Used synthetic oil")
    .bind(now)
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO usage_logs (
            machine_id, operator_name, start_time, end_time, hours_used,
            job_description, notes, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(mower_id)
    .bind("John Smith")
    .bind("2024-01-20 08:00:00")
    .bind("2024-01-20 12:00:00")
    .bind(4.0)
    .bind("Residential lawn mowing")
    .bind("Standard weekly maintenance")
    .bind(now)
    .execute(pool)
    .await?;

    Ok(true)
}
