// Repository trait for manufacturing metrics access
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::downtime::DowntimeReasonRecord;
use crate::domain::equipment::EquipmentOption;
use crate::domain::kpi::KpiRecord;
use crate::domain::sensor::SensorReading;

/// Inclusive date range for KPI and downtime queries, serialized as
/// `YYYY-MM-DD` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// List all known equipments (without the "all equipment" sentinel).
    async fn list_equipments(&self) -> anyhow::Result<Vec<EquipmentOption>>;

    /// KPI summaries for the range, optionally scoped to one equipment.
    async fn fetch_kpis(
        &self,
        range: &DateRange,
        equipment_id: Option<&str>,
    ) -> anyhow::Result<Vec<KpiRecord>>;

    /// Downtime-reason breakdown for the same range/scope.
    async fn fetch_downtime_reasons(
        &self,
        range: &DateRange,
        equipment_id: Option<&str>,
    ) -> anyhow::Result<Vec<DowntimeReasonRecord>>;

    /// Sensor time series over an intraday window, always scoped to one
    /// equipment and sensor type.
    async fn fetch_sensor_data(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        equipment_id: &str,
        sensor_type: &str,
    ) -> anyhow::Result<Vec<SensorReading>>;
}
