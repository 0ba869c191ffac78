//! Machine API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::machine::{CreateMachine, Machine, MachineDetails, UpdateMachine},
};

/// List all machines
#[utoipa::path(
    get,
    path = "/machines",
    tag = "machines",
    responses(
        (status = 200, description = "Machine list ordered by name", body = Vec<Machine>)
    )
)]
pub async fn list_machines(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Machine>>> {
    let machines = state.services.machines.list().await?;
    Ok(Json(machines))
}

/// Get machine details by ID, with its maintenance and usage history
#[utoipa::path(
    get,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i64, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Machine details", body = MachineDetails),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn get_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MachineDetails>> {
    let machine = state.services.machines.get_by_id(id).await?;
    Ok(Json(machine))
}

/// Get machine by serial number
#[utoipa::path(
    get,
    path = "/machines/serial/{serial_number}",
    tag = "machines",
    params(("serial_number" = String, Path, description = "Machine serial number")),
    responses(
        (status = 200, description = "Machine", body = Machine),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn get_machine_by_serial(
    State(state): State<crate::AppState>,
    Path(serial_number): Path<String>,
) -> AppResult<Json<Machine>> {
    let machine = state.services.machines.get_by_serial(&serial_number).await?;
    Ok(Json(machine))
}

/// Create a machine
#[utoipa::path(
    post,
    path = "/machines",
    tag = "machines",
    request_body = CreateMachine,
    responses(
        (status = 201, description = "Machine created", body = Machine),
        (status = 400, description = "Missing required field or duplicate serial number")
    )
)]
pub async fn create_machine(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMachine>,
) -> AppResult<(StatusCode, Json<Machine>)> {
    let machine = state.services.machines.create(&data).await?;
    Ok((StatusCode::CREATED, Json(machine)))
}

/// Update a machine (full-record overwrite)
#[utoipa::path(
    put,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i64, Path, description = "Machine ID")),
    request_body = UpdateMachine,
    responses(
        (status = 200, description = "Machine updated", body = Machine),
        (status = 400, description = "Missing required field or duplicate serial number"),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn update_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateMachine>,
) -> AppResult<Json<Machine>> {
    let machine = state.services.machines.update(id, &data).await?;
    Ok(Json(machine))
}

/// Delete a machine and, through the cascade, its ledgers
#[utoipa::path(
    delete,
    path = "/machines/{id}",
    tag = "machines",
    params(("id" = i64, Path, description = "Machine ID")),
    responses(
        (status = 204, description = "Machine deleted"),
        (status = 404, description = "Machine not found")
    )
)]
pub async fn delete_machine(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.machines.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
