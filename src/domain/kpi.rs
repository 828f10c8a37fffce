// Manufacturing KPI domain models

/// Per-equipment KPI summary for a date range. All ratios are in [0,1];
/// the API computes them, the client only displays.
#[derive(Debug, Clone)]
pub struct KpiRecord {
    pub equipment_id: String,
    pub equipment_name: String,
    pub production_line_id: String,
    pub oee: f64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub total_produced: i64,
    pub total_rejected: i64,
    pub total_downtime_hours: f64,
    pub mtbf_hours: f64,
    pub mttr_hours: f64,
}

/// Format a [0,1] ratio as a percentage string. Bar charts use two
/// decimal places, summary tiles use one.
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_two_places() {
        assert_eq!(format_percent(0.8567, 2), "85.67");
        assert_eq!(format_percent(1.0, 2), "100.00");
        assert_eq!(format_percent(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_percent_one_place() {
        assert_eq!(format_percent(0.856, 1), "85.6");
        assert_eq!(format_percent(0.05, 1), "5.0");
    }
}
