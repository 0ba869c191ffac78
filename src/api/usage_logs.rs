//! Usage ledger API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::usage_log::{CreateUsageLog, UpdateUsageLog, UsageLog, UsageLogWithMachine},
};

/// List all usage logs across machines
#[utoipa::path(
    get,
    path = "/usage-logs",
    tag = "usage-logs",
    responses(
        (status = 200, description = "Usage logs, most recent first", body = Vec<UsageLogWithMachine>)
    )
)]
pub async fn list_usage_logs(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<UsageLogWithMachine>>> {
    let logs = state.services.usage_logs.list_all().await?;
    Ok(Json(logs))
}

/// List usage logs for one machine
#[utoipa::path(
    get,
    path = "/usage-logs/machine/{machine_id}",
    tag = "usage-logs",
    params(("machine_id" = i64, Path, description = "Machine ID")),
    responses(
        (status = 200, description = "Usage logs, most recent first", body = Vec<UsageLog>)
    )
)]
pub async fn list_machine_usage_logs(
    State(state): State<crate::AppState>,
    Path(machine_id): Path<i64>,
) -> AppResult<Json<Vec<UsageLog>>> {
    let logs = state.services.usage_logs.list_by_machine(machine_id).await?;
    Ok(Json(logs))
}

/// Get usage log by ID
#[utoipa::path(
    get,
    path = "/usage-logs/{id}",
    tag = "usage-logs",
    params(("id" = i64, Path, description = "Usage log ID")),
    responses(
        (status = 200, description = "Usage log", body = UsageLog),
        (status = 404, description = "Usage log not found")
    )
)]
pub async fn get_usage_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UsageLog>> {
    let log = state.services.usage_logs.get_by_id(id).await?;
    Ok(Json(log))
}

/// Create a usage log; the owning machine's cached operating hours grow by
/// the rounded session hours
#[utoipa::path(
    post,
    path = "/usage-logs",
    tag = "usage-logs",
    request_body = CreateUsageLog,
    responses(
        (status = 201, description = "Usage log created", body = UsageLog),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Referenced machine not found")
    )
)]
pub async fn create_usage_log(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateUsageLog>,
) -> AppResult<(StatusCode, Json<UsageLog>)> {
    let log = state.services.usage_logs.create(&data).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// Update a usage log (full-record overwrite); cached hour totals follow the
/// hours delta
#[utoipa::path(
    put,
    path = "/usage-logs/{id}",
    tag = "usage-logs",
    params(("id" = i64, Path, description = "Usage log ID")),
    request_body = UpdateUsageLog,
    responses(
        (status = 200, description = "Usage log updated", body = UsageLog),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Usage log not found")
    )
)]
pub async fn update_usage_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateUsageLog>,
) -> AppResult<Json<UsageLog>> {
    let log = state.services.usage_logs.update(id, &data).await?;
    Ok(Json(log))
}

/// Delete a usage log, subtracting its rounded hours from the owning machine
#[utoipa::path(
    delete,
    path = "/usage-logs/{id}",
    tag = "usage-logs",
    params(("id" = i64, Path, description = "Usage log ID")),
    responses(
        (status = 204, description = "Usage log deleted"),
        (status = 404, description = "Usage log not found")
    )
)]
pub async fn delete_usage_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.usage_logs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
