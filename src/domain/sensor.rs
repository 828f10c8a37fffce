// Sensor time-series domain model and the known sensor-type unit map
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Sensor fetches cover a fixed business-hours slice of the start date
/// rather than the full filter range.
pub const BUSINESS_DAY_START_HOUR: u32 = 7;
pub const BUSINESS_DAY_END_HOUR: u32 = 17;

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// Sensor types the plant simulator emits, with their display units.
/// Unknown types are not rejected; they display with a blank unit.
pub const KNOWN_SENSOR_TYPES: [&str; 4] = [
    "Temperature_Motor",
    "Vibration_Bearing",
    "Pressure_Hydraulic",
    "Current_Consumption",
];

pub fn sensor_unit(sensor_type: &str) -> &'static str {
    match sensor_type {
        "Temperature_Motor" => "°C",
        "Vibration_Bearing" => "g",
        "Pressure_Hydraulic" => "bar",
        "Current_Consumption" => "A",
        _ => "",
    }
}

/// Intraday window for the sensor fetch, anchored on the given day.
pub fn business_hours_window(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveTime::from_hms_opt(BUSINESS_DAY_START_HOUR, 0, 0).expect("valid hour");
    let end = NaiveTime::from_hms_opt(BUSINESS_DAY_END_HOUR, 0, 0).expect("valid hour");
    (day.and_time(start), day.and_time(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_hours_window() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let (start, end) = business_hours_window(day);
        assert_eq!(start.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-01-15 07:00:00");
        assert_eq!(end.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-01-15 17:00:00");
    }

    #[test]
    fn test_sensor_unit_map() {
        assert_eq!(sensor_unit("Temperature_Motor"), "°C");
        assert_eq!(sensor_unit("Pressure_Hydraulic"), "bar");
        assert_eq!(sensor_unit("Humidity_Ambient"), "");
    }
}
