// Chart view models - declarative descriptions the renderer consumes
use crate::domain::downtime::DowntimeReasonRecord;
use crate::domain::kpi::{format_percent, KpiRecord};
use crate::domain::sensor::{sensor_unit, SensorReading};

/// Decimal places used for KPI bar values.
pub const BAR_VALUE_DECIMALS: usize = 2;
/// Decimal places used for doughnut slice percentages.
pub const SLICE_PERCENT_DECIMALS: usize = 2;

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    /// Percentage value in [0,100].
    pub value: f64,
    /// Pre-formatted value text, e.g. "85.67".
    pub text: String,
}

/// One KPI across all equipments, y-axis fixed to 0–100%.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub dataset_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Build one bar per KPI record, selecting the ratio with `value_of`.
    pub fn from_kpis<F>(title: &str, dataset_label: &str, kpis: &[KpiRecord], value_of: F) -> Self
    where
        F: Fn(&KpiRecord) -> f64,
    {
        let bars = kpis
            .iter()
            .map(|record| {
                let ratio = value_of(record);
                Bar {
                    label: record.equipment_id.clone(),
                    value: ratio * 100.0,
                    text: format_percent(ratio, BAR_VALUE_DECIMALS),
                }
            })
            .collect();
        Self {
            title: title.to_string(),
            dataset_label: dataset_label.to_string(),
            bars,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DoughnutSlice {
    pub label: String,
    pub duration_seconds: f64,
    /// Share of the total duration in [0,100]; 0 when the total is 0.
    pub percentage: f64,
    pub color: String,
}

impl DoughnutSlice {
    /// Tooltip line, e.g. "Planned - Maintenance: 5400 seconds (42.86%)".
    pub fn tooltip(&self) -> String {
        format!(
            "{}: {:.0} seconds ({:.*}%)",
            self.label, self.duration_seconds, SLICE_PERCENT_DECIMALS, self.percentage
        )
    }
}

/// Downtime-reason breakdown with per-slice share of total duration.
#[derive(Debug, Clone)]
pub struct DoughnutChart {
    pub title: String,
    pub total_duration_seconds: f64,
    pub slices: Vec<DoughnutSlice>,
}

impl DoughnutChart {
    pub fn from_downtime_reasons(title: &str, records: &[DowntimeReasonRecord]) -> Self {
        let total: f64 = records.iter().map(|r| r.duration_seconds).sum();
        let colors = distinct_colors(records.len());
        let slices = records
            .iter()
            .zip(colors)
            .map(|(record, color)| DoughnutSlice {
                label: record.slice_label(),
                duration_seconds: record.duration_seconds,
                percentage: if total > 0.0 {
                    record.duration_seconds / total * 100.0
                } else {
                    0.0
                },
                color,
            })
            .collect();
        Self {
            title: title.to_string(),
            total_duration_seconds: total,
            slices,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinePoint {
    /// Short intraday label, e.g. "07:15".
    pub time_label: String,
    pub value: f64,
}

/// Sensor time series, points ordered by timestamp.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    /// Dataset label, e.g. "Temperature_Motor (°C)".
    pub dataset_label: String,
    pub unit: String,
    pub points: Vec<LinePoint>,
}

impl LineChart {
    pub fn from_readings(title: &str, sensor_type: &str, readings: &[SensorReading]) -> Self {
        let mut ordered: Vec<&SensorReading> = readings.iter().collect();
        ordered.sort_by_key(|r| r.timestamp);

        let unit = sensor_unit(sensor_type);
        let points = ordered
            .into_iter()
            .map(|reading| LinePoint {
                time_label: reading.timestamp.format("%H:%M").to_string(),
                value: reading.value,
            })
            .collect();
        Self {
            title: title.to_string(),
            dataset_label: format!("{} ({})", sensor_type, unit),
            unit: unit.to_string(),
            points,
        }
    }
}

/// Evenly spaced HSL hues so adjacent slices stay distinguishable at any count.
pub fn distinct_colors(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("hsl({}, 70%, 50%)", (i * 360 / count.max(1)) % 360))
        .collect()
}
