// Downtime-reason breakdown domain model

/// One categorized stoppage cause with its incident count and cumulative
/// duration over the selected date range.
#[derive(Debug, Clone)]
pub struct DowntimeReasonRecord {
    pub equipment_id: String,
    pub downtime_category: String,
    pub downtime_reason: String,
    pub incident_count: i64,
    pub duration_seconds: f64,
}

impl DowntimeReasonRecord {
    /// Slice label used by the breakdown chart, e.g.
    /// "Unplanned - Breakdown - Electrical Fault".
    pub fn slice_label(&self) -> String {
        format!("{} - {}", self.downtime_category, self.downtime_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_label() {
        let record = DowntimeReasonRecord {
            equipment_id: "MCH001".to_string(),
            downtime_category: "Unplanned - Breakdown".to_string(),
            downtime_reason: "Electrical Fault".to_string(),
            incident_count: 3,
            duration_seconds: 5400.0,
        };
        assert_eq!(record.slice_label(), "Unplanned - Breakdown - Electrical Fault");
    }
}
