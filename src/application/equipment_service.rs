// Equipment directory service - Use case for the startup directory load
use std::sync::Arc;

use crate::application::metrics_repository::MetricsRepository;
use crate::domain::equipment::EquipmentOption;

#[derive(Clone)]
pub struct EquipmentService {
    repository: Arc<dyn MetricsRepository>,
}

impl EquipmentService {
    pub fn new(repository: Arc<dyn MetricsRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the directory and prepend the "all equipment" sentinel.
    /// Callers keep their previous option set when this fails.
    pub async fn load_directory(&self) -> anyhow::Result<Vec<EquipmentOption>> {
        let equipments = self.repository.list_equipments().await?;
        let mut options = Vec::with_capacity(equipments.len() + 1);
        options.push(EquipmentOption::all_equipment());
        options.extend(equipments);
        Ok(options)
    }
}
