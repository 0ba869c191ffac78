//! Maintenance ledger service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenanceRecord, MaintenanceRecord, MaintenanceRecordWithMachine,
        NewMaintenanceRecord, UpdateMaintenanceRecord,
    },
    repository::Repository,
};

use super::{require, require_text};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> AppResult<Vec<MaintenanceRecordWithMachine>> {
        self.repository.maintenance.list_all().await
    }

    pub async fn list_by_machine(&self, machine_id: i64) -> AppResult<Vec<MaintenanceRecord>> {
        self.repository
            .maintenance
            .list_by_machine(machine_id)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<MaintenanceRecord> {
        self.repository.maintenance.get_by_id(id).await
    }

    /// Record a service event. The owning machine's last_maintenance_date is
    /// rolled up as part of the same write.
    pub async fn create(&self, data: &CreateMaintenanceRecord) -> AppResult<MaintenanceRecord> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let record = NewMaintenanceRecord {
            machine_id: require(data.machine_id, "machine_id")?,
            maintenance_type: require_text(data.maintenance_type.as_deref(), "maintenance_type")?,
            description: require_text(data.description.as_deref(), "description")?,
            performed_date: require(data.performed_date, "performed_date")?,
            next_due_date: data.next_due_date,
            performed_by: require_text(data.performed_by.as_deref(), "performed_by")?,
            cost: require(data.cost, "cost")?,
            notes: data.notes.clone(),
        };

        if !self.repository.machines.exists(record.machine_id).await? {
            return Err(AppError::NotFound(format!(
                "Machine {} not found",
                record.machine_id
            )));
        }

        self.repository.maintenance.create(&record).await
    }

    /// Overwrite a record in place. The owning machine's
    /// last_maintenance_date is not recomputed; only creation rolls it up.
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateMaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let existing = self.repository.maintenance.get_by_id(id).await?;

        let record = NewMaintenanceRecord {
            machine_id: require(data.machine_id, "machine_id")?,
            maintenance_type: require_text(data.maintenance_type.as_deref(), "maintenance_type")?,
            description: require_text(data.description.as_deref(), "description")?,
            performed_date: require(data.performed_date, "performed_date")?,
            next_due_date: data.next_due_date,
            performed_by: require_text(data.performed_by.as_deref(), "performed_by")?,
            cost: data.cost.unwrap_or(0.0),
            notes: data.notes.clone(),
        };

        if record.machine_id != existing.machine_id
            && !self.repository.machines.exists(record.machine_id).await?
        {
            return Err(AppError::NotFound(format!(
                "Machine {} not found",
                record.machine_id
            )));
        }

        self.repository.maintenance.update(id, &record).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::machine::CreateMachine;
    use crate::services::{test_services, Services};

    async fn create_machine(services: &Services, serial: &str) -> i64 {
        services
            .machines
            .create(&CreateMachine {
                name: Some("Mower A".to_string()),
                model: Some("X1".to_string()),
                serial_number: Some(serial.to_string()),
                machine_type: Some("Mower".to_string()),
                status: Some("Active".to_string()),
                purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                purchase_price: Some(1000.0),
                last_maintenance_date: None,
                operating_hours: None,
                notes: None,
            })
            .await
            .unwrap()
            .id
    }

    fn record_payload(machine_id: i64, performed: NaiveDate) -> CreateMaintenanceRecord {
        CreateMaintenanceRecord {
            machine_id: Some(machine_id),
            maintenance_type: Some("OilChange".to_string()),
            description: Some("Regular oil change".to_string()),
            performed_date: Some(performed),
            next_due_date: None,
            performed_by: Some("John Smith".to_string()),
            cost: Some(25.0),
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_rolls_performed_date_up_onto_machine() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;
        let performed = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        services
            .maintenance
            .create(&record_payload(machine_id, performed))
            .await
            .unwrap();

        let details = services.machines.get_by_id(machine_id).await.unwrap();
        assert_eq!(details.machine.last_maintenance_date, Some(performed));
        assert!(details.machine.updated_at.is_some());
        assert_eq!(details.maintenance_records.len(), 1);
    }

    #[tokio::test]
    async fn create_against_unknown_machine_is_not_found_and_writes_nothing() {
        let services = test_services().await;
        let performed = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let err = services
            .maintenance
            .create(&record_payload(999, performed))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(services.maintenance.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_missing_required_field() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;
        let mut payload =
            record_payload(machine_id, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        payload.performed_by = None;

        let err = services.maintenance.create(&payload).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_does_not_recompute_last_maintenance_date() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;
        let first = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let record = services
            .maintenance
            .create(&record_payload(machine_id, first))
            .await
            .unwrap();

        services
            .maintenance
            .update(
                record.id,
                &UpdateMaintenanceRecord {
                    machine_id: Some(machine_id),
                    maintenance_type: Some("Repair".to_string()),
                    description: Some("Belt replacement".to_string()),
                    performed_date: Some(later),
                    next_due_date: None,
                    performed_by: Some("Jane Doe".to_string()),
                    cost: Some(80.0),
                    notes: None,
                },
            )
            .await
            .unwrap();

        let details = services.machines.get_by_id(machine_id).await.unwrap();
        assert_eq!(details.machine.last_maintenance_date, Some(first));
        assert_eq!(
            details.maintenance_records[0].performed_date,
            later
        );
    }

    #[tokio::test]
    async fn delete_does_not_roll_back_last_maintenance_date() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;
        let performed = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let record = services
            .maintenance
            .create(&record_payload(machine_id, performed))
            .await
            .unwrap();
        services.maintenance.delete(record.id).await.unwrap();

        let details = services.machines.get_by_id(machine_id).await.unwrap();
        assert_eq!(details.machine.last_maintenance_date, Some(performed));
        assert!(details.maintenance_records.is_empty());
    }

    #[tokio::test]
    async fn list_all_is_annotated_with_machine_name_and_model() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;

        services
            .maintenance
            .create(&record_payload(
                machine_id,
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ))
            .await
            .unwrap();

        let all = services.maintenance.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].machine_name, "Mower A");
        assert_eq!(all[0].machine_model, "X1");
    }

    #[tokio::test]
    async fn deleting_machine_cascades_to_maintenance_records() {
        let services = test_services().await;
        let machine_id = create_machine(&services, "SN-1").await;

        services
            .maintenance
            .create(&record_payload(
                machine_id,
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ))
            .await
            .unwrap();
        services.machines.delete(machine_id).await.unwrap();

        assert!(services.maintenance.list_all().await.unwrap().is_empty());
    }
}
