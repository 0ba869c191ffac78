//! Machine registry service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::machine::{CreateMachine, Machine, MachineDetails, NewMachine, UpdateMachine},
    repository::Repository,
};

use super::{require, require_text};

#[derive(Clone)]
pub struct MachinesService {
    repository: Repository,
}

impl MachinesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Machine>> {
        self.repository.machines.list().await
    }

    /// Composed detail view: the machine plus its full maintenance and usage
    /// history
    pub async fn get_by_id(&self, id: i64) -> AppResult<MachineDetails> {
        let machine = self.repository.machines.get_by_id(id).await?;
        let maintenance_records = self.repository.maintenance.list_by_machine(id).await?;
        let usage_logs = self.repository.usage_logs.list_by_machine(id).await?;

        Ok(MachineDetails {
            machine,
            maintenance_records,
            usage_logs,
        })
    }

    pub async fn get_by_serial(&self, serial_number: &str) -> AppResult<Machine> {
        self.repository.machines.get_by_serial(serial_number).await
    }

    pub async fn create(&self, data: &CreateMachine) -> AppResult<Machine> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let machine = NewMachine {
            name: require_text(data.name.as_deref(), "name")?,
            model: require_text(data.model.as_deref(), "model")?,
            serial_number: require_text(data.serial_number.as_deref(), "serial_number")?,
            machine_type: require_text(data.machine_type.as_deref(), "machine_type")?,
            status: require_text(data.status.as_deref(), "status")?,
            purchase_date: require(data.purchase_date, "purchase_date")?,
            purchase_price: require(data.purchase_price, "purchase_price")?,
            last_maintenance_date: data.last_maintenance_date,
            operating_hours: data.operating_hours.unwrap_or(0),
            notes: data.notes.clone(),
        };

        if self
            .repository
            .machines
            .serial_exists(&machine.serial_number, None)
            .await?
        {
            return Err(AppError::Conflict(
                "Serial number already exists".to_string(),
            ));
        }

        self.repository.machines.create(&machine).await
    }

    pub async fn update(&self, id: i64, data: &UpdateMachine) -> AppResult<Machine> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // An absent machine is a 404, before any conflict check
        self.repository.machines.get_by_id(id).await?;

        let machine = NewMachine {
            name: require_text(data.name.as_deref(), "name")?,
            model: require_text(data.model.as_deref(), "model")?,
            serial_number: require_text(data.serial_number.as_deref(), "serial_number")?,
            machine_type: require_text(data.machine_type.as_deref(), "machine_type")?,
            status: require_text(data.status.as_deref(), "status")?,
            purchase_date: require(data.purchase_date, "purchase_date")?,
            purchase_price: require(data.purchase_price, "purchase_price")?,
            last_maintenance_date: data.last_maintenance_date,
            operating_hours: data.operating_hours.unwrap_or(0),
            notes: data.notes.clone(),
        };

        if self
            .repository
            .machines
            .serial_exists(&machine.serial_number, Some(id))
            .await?
        {
            return Err(AppError::Conflict(
                "Serial number already exists".to_string(),
            ));
        }

        self.repository.machines.update(id, &machine).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.machines.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::machine::CreateMachine;
    use crate::services::test_services;

    fn machine_payload(serial: &str) -> CreateMachine {
        CreateMachine {
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
        }
    }

    fn update_payload(serial: &str) -> UpdateMachine {
        UpdateMachine {
            name: Some("Mower A".to_string()),
            model: Some("X1".to_string()),
            serial_number: Some(serial.to_string()),
            machine_type: Some("Mower".to_string()),
            status: Some("UnderMaintenance".to_string()),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            purchase_price: Some(1000.0),
            last_maintenance_date: None,
            operating_hours: Some(12),
            notes: Some("gearbox noise".to_string()),
        }
    }

    #[tokio::test]
    async fn create_starts_with_zero_operating_hours() {
        let services = test_services().await;

        let machine = services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap();

        assert_eq!(machine.operating_hours, 0);
        assert_eq!(machine.serial_number, "SN-1");
        assert!(machine.last_maintenance_date.is_none());
        assert!(machine.updated_at.is_none());
    }

    #[tokio::test]
    async fn list_orders_machines_by_name() {
        let services = test_services().await;
        let mut late = machine_payload("SN-B");
        late.name = Some("Zeta".to_string());
        services.machines.create(&late).await.unwrap();
        let mut early = machine_payload("SN-A");
        early.name = Some("Alpha".to_string());
        services.machines.create(&early).await.unwrap();

        let all = services.machines.list().await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_serial_without_touching_store() {
        let services = test_services().await;
        services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap();

        let err = services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(services.machines.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_missing_required_field() {
        let services = test_services().await;
        let mut payload = machine_payload("SN-1");
        payload.name = None;

        let err = services.machines.create(&payload).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_negative_purchase_price() {
        let services = test_services().await;
        let mut payload = machine_payload("SN-1");
        payload.purchase_price = Some(-1.0);

        let err = services.machines.create(&payload).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn get_by_id_returns_not_found_for_unknown_machine() {
        let services = test_services().await;

        let err = services.machines.get_by_id(999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_serial_finds_machine() {
        let services = test_services().await;
        let created = services
            .machines
            .create(&machine_payload("SN-42"))
            .await
            .unwrap();

        let fetched = services.machines.get_by_serial("SN-42").await.unwrap();

        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_stamps_update_time() {
        let services = test_services().await;
        let created = services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap();

        let updated = services
            .machines
            .update(created.id, &update_payload("SN-1"))
            .await
            .unwrap();

        assert_eq!(updated.status, "UnderMaintenance");
        assert_eq!(updated.operating_hours, 12);
        assert_eq!(updated.notes.as_deref(), Some("gearbox noise"));
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_rejects_serial_taken_by_another_machine() {
        let services = test_services().await;
        services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap();
        let second = services
            .machines
            .create(&machine_payload("SN-2"))
            .await
            .unwrap();

        let err = services
            .machines
            .update(second.id, &update_payload("SN-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeps_own_serial() {
        let services = test_services().await;
        let created = services
            .machines
            .create(&machine_payload("SN-1"))
            .await
            .unwrap();

        let updated = services
            .machines
            .update(created.id, &update_payload("SN-1"))
            .await
            .unwrap();

        assert_eq!(updated.serial_number, "SN-1");
    }

    #[tokio::test]
    async fn delete_returns_not_found_for_unknown_machine() {
        let services = test_services().await;

        let err = services.machines.delete(999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
