//! Maintenance ledger API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenanceRecord, MaintenanceRecord, MaintenanceRecordWithMachine,
        UpdateMaintenanceRecord,
    },
};

/// List all maintenance records across machines
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    responses(
        (status = 200, description = "Maintenance records, most recent first", body = Vec<MaintenanceRecordWithMachine>)
    )
)]
pub async fn list_maintenance_records(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceRecordWithMachine>>> {
    let records = state.services.maintenance.list_all().await?;
    Ok(Json(records))
}

/// List maintenance records for one machine
#[utoipa::path(
    get,
    path = "/maintenance/machine/{machine_id}",
    tag = "maintenance",
    params(("machine_id" = i64, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Maintenance records, most recent first", body = Vec<MaintenanceRecord>)
    )
)]
pub async fn list_machine_maintenance_records(
    State(state): State<crate::AppState>,
    Path(machine_id): Path<i64>,
) -> AppResult<Json<Vec<MaintenanceRecord>>> {
    let records = state.services.maintenance.list_by_machine(machine_id).await?;
    Ok(Json(records))
}

/// Get maintenance record by ID
#[utoipa::path(
    get,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    responses(
        (status = 200, description = "Maintenance record", body = MaintenanceRecord),
        (status = 404, description = "Maintenance record not found")
    )
)]
pub async fn get_maintenance_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MaintenanceRecord>> {
    let record = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(record))
}

/// Create a maintenance record; the owning machine's last maintenance date
/// follows the record's performed date
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenanceRecord,
    responses(
        (status = 201, description = "Maintenance record created", body = MaintenanceRecord),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Referenced machine not found")
    )
)]
pub async fn create_maintenance_record(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenanceRecord>,
) -> AppResult<(StatusCode, Json<MaintenanceRecord>)> {
    let record = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update a maintenance record (full-record overwrite)
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    request_body = UpdateMaintenanceRecord,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceRecord),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Maintenance record not found")
    )
)]
pub async fn update_maintenance_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateMaintenanceRecord>,
) -> AppResult<Json<MaintenanceRecord>> {
    let record = state.services.maintenance.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a maintenance record
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance record ID")),
    responses(
        (status = 204, description = "Maintenance record deleted"),
        (status = 404, description = "Maintenance record not found")
    )
)]
pub async fn delete_maintenance_record(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
