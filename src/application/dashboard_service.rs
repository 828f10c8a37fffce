// Dashboard service - Use case for one aggregate fetch cycle
use std::sync::Arc;

use crate::application::metrics_repository::{DateRange, MetricsRepository};
use crate::domain::dashboard::{DashboardData, FilterState};
use crate::domain::sensor::business_hours_window;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn MetricsRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn MetricsRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the three collections for the given filter. KPI and downtime
    /// queries share the full range/scope and run concurrently; the sensor
    /// series is fetched only when an equipment and a sensor type are both
    /// selected, over the business-hours window of the start date. The
    /// first failure aborts the whole invocation.
    pub async fn load(&self, filter: &FilterState) -> anyhow::Result<DashboardData> {
        let range = DateRange {
            start: filter.start_date,
            end: filter.end_date,
        };
        let scope = filter.equipment_id.as_deref();

        let (kpis, downtime_reasons) = futures::try_join!(
            self.repository.fetch_kpis(&range, scope),
            self.repository.fetch_downtime_reasons(&range, scope),
        )?;

        let sensor_readings = match filter.sensor_selection() {
            Some((equipment_id, sensor_type)) => {
                let (start, end) = business_hours_window(filter.start_date);
                self.repository
                    .fetch_sensor_data(start, end, equipment_id, sensor_type)
                    .await?
            }
            None => Vec::new(),
        };

        Ok(DashboardData {
            kpis,
            downtime_reasons,
            sensor_readings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::downtime::DowntimeReasonRecord;
    use crate::domain::equipment::EquipmentOption;
    use crate::domain::kpi::KpiRecord;
    use crate::domain::sensor::SensorReading;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::Mutex;

    /// Records sensor calls so tests can assert on the window and scope.
    #[derive(Default)]
    struct RecordingRepository {
        sensor_calls: Mutex<Vec<(String, String, String, String)>>,
    }

    #[async_trait]
    impl MetricsRepository for RecordingRepository {
        async fn list_equipments(&self) -> anyhow::Result<Vec<EquipmentOption>> {
            Ok(Vec::new())
        }

        async fn fetch_kpis(
            &self,
            _range: &DateRange,
            _equipment_id: Option<&str>,
        ) -> anyhow::Result<Vec<KpiRecord>> {
            Ok(Vec::new())
        }

        async fn fetch_downtime_reasons(
            &self,
            _range: &DateRange,
            _equipment_id: Option<&str>,
        ) -> anyhow::Result<Vec<DowntimeReasonRecord>> {
            Ok(Vec::new())
        }

        async fn fetch_sensor_data(
            &self,
            start: NaiveDateTime,
            end: NaiveDateTime,
            equipment_id: &str,
            sensor_type: &str,
        ) -> anyhow::Result<Vec<SensorReading>> {
            self.sensor_calls.lock().unwrap().push((
                start.format("%Y-%m-%d %H:%M:%S").to_string(),
                end.format("%Y-%m-%d %H:%M:%S").to_string(),
                equipment_id.to_string(),
                sensor_type.to_string(),
            ));
            Ok(Vec::new())
        }
    }

    fn filter() -> FilterState {
        FilterState::new(
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_no_sensor_fetch_without_equipment() {
        let repository = Arc::new(RecordingRepository::default());
        let service = DashboardService::new(repository.clone());

        let data = service.load(&filter()).await.unwrap();

        assert!(data.sensor_readings.is_empty());
        assert!(repository.sensor_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sensor_fetch_uses_business_hours_window() {
        let repository = Arc::new(RecordingRepository::default());
        let service = DashboardService::new(repository.clone());

        let mut filter = filter();
        filter.equipment_id = Some("MCH001".to_string());
        filter.sensor_type = Some("Temperature_Motor".to_string());
        service.load(&filter).await.unwrap();

        let calls = repository.sensor_calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[(
                "2023-01-15 07:00:00".to_string(),
                "2023-01-15 17:00:00".to_string(),
                "MCH001".to_string(),
                "Temperature_Motor".to_string(),
            )]
        );
    }
}
