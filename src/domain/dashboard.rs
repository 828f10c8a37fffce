// Dashboard filter and aggregate result models
use chrono::NaiveDate;

use crate::domain::downtime::DowntimeReasonRecord;
use crate::domain::kpi::KpiRecord;
use crate::domain::sensor::SensorReading;

/// User-selected fetch scope. Mutated only through the controller; every
/// mutation starts a new fetch cycle. Date ordering is deliberately not
/// validated (the API answers an inverted range with empty collections).
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub equipment_id: Option<String>,
    pub sensor_type: Option<String>,
}

impl FilterState {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            equipment_id: None,
            sensor_type: None,
        }
    }

    /// The sensor series is fetched only when both scope fields are set.
    pub fn sensor_selection(&self) -> Option<(&str, &str)> {
        match (&self.equipment_id, &self.sensor_type) {
            (Some(equipment), Some(sensor)) => Some((equipment.as_str(), sensor.as_str())),
            _ => None,
        }
    }
}

/// The three collections one successful aggregate fetch produces. Always
/// consistent with the filter that was active when the fetch was issued.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub kpis: Vec<KpiRecord>,
    pub downtime_reasons: Vec<DowntimeReasonRecord>,
    pub sensor_readings: Vec<SensorReading>,
}
