//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, machines, maintenance, usage_logs};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MachinePark API",
        version = "1.0.0",
        description = "Equipment Tracking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Machines
        machines::list_machines,
        machines::get_machine,
        machines::get_machine_by_serial,
        machines::create_machine,
        machines::update_machine,
        machines::delete_machine,
        // Maintenance ledger
        maintenance::list_maintenance_records,
        maintenance::list_machine_maintenance_records,
        maintenance::get_maintenance_record,
        maintenance::create_maintenance_record,
        maintenance::update_maintenance_record,
        maintenance::delete_maintenance_record,
        // Usage ledger
        usage_logs::list_usage_logs,
        usage_logs::list_machine_usage_logs,
        usage_logs::get_usage_log,
        usage_logs::create_usage_log,
        usage_logs::update_usage_log,
        usage_logs::delete_usage_log,
    ),
    components(
        schemas(
            // Machines
            crate::models::machine::Machine,
            crate::models::machine::MachineDetails,
            crate::models::machine::CreateMachine,
            crate::models::machine::UpdateMachine,
            // Maintenance ledger
            crate::models::maintenance::MaintenanceRecord,
            crate::models::maintenance::MaintenanceRecordWithMachine,
            crate::models::maintenance::CreateMaintenanceRecord,
            crate::models::maintenance::UpdateMaintenanceRecord,
            // Usage ledger
            crate::models::usage_log::UsageLog,
            crate::models::usage_log::UsageLogWithMachine,
            crate::models::usage_log::CreateUsageLog,
            crate::models::usage_log::UpdateUsageLog,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "machines", description = "Machine registry"),
        (name = "maintenance", description = "Maintenance ledger"),
        (name = "usage-logs", description = "Usage ledger")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
