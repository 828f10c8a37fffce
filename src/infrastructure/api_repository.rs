// HTTP metrics repository - reqwest client for the dashboard API
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::application::metrics_repository::{DateRange, MetricsRepository};
use crate::domain::downtime::DowntimeReasonRecord;
use crate::domain::equipment::EquipmentOption;
use crate::domain::kpi::KpiRecord;
use crate::domain::sensor::SensorReading;

pub const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_PARAM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a fetch cycle can fail with. Display text is shown verbatim
/// to the user, so each variant names the endpoint it came from.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("HTTP {status} for {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("malformed response from {endpoint}: {detail}")]
    Decode {
        endpoint: &'static str,
        detail: String,
    },
}

#[derive(Debug, Clone)]
pub struct HttpMetricsRepository {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct EquipmentDto {
    equipment_id: String,
    equipment_name: String,
}

#[derive(Debug, Deserialize)]
struct KpiDto {
    equipment_id: String,
    equipment_name: String,
    production_line_id: String,
    oee: f64,
    availability: f64,
    performance: f64,
    quality: f64,
    total_produced: i64,
    total_rejected: i64,
    total_downtime_hours: f64,
    mtbf_hours: f64,
    mttr_hours: f64,
}

#[derive(Debug, Deserialize)]
struct DowntimeReasonDto {
    equipment_id: String,
    downtime_category: String,
    downtime_reason: String,
    incident_count: i64,
    duration_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct SensorReadingDto {
    timestamp: String,
    value: f64,
}

impl HttpMetricsRepository {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if query.is_empty() {
            format!("{}/{}", self.base_url, endpoint)
        } else {
            format!("{}/{}?{}", self.base_url, endpoint, query)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint, params);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            endpoint,
            detail: e.to_string(),
        })
    }
}

/// The API serializes timestamps either as `YYYY-MM-DD HH:MM:SS`, RFC 3339,
/// or (Flask's jsonify default for datetimes) RFC 2822.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, DATETIME_PARAM_FORMAT) {
        return Some(ts);
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc2822(raw) {
        return Some(ts.naive_utc());
    }
    None
}

#[async_trait]
impl MetricsRepository for HttpMetricsRepository {
    async fn list_equipments(&self) -> anyhow::Result<Vec<EquipmentOption>> {
        let dtos: Vec<EquipmentDto> = self.get_json("equipments", &[]).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| EquipmentOption::new(dto.equipment_id, dto.equipment_name))
            .collect())
    }

    async fn fetch_kpis(
        &self,
        range: &DateRange,
        equipment_id: Option<&str>,
    ) -> anyhow::Result<Vec<KpiRecord>> {
        let start = range.start.format(DATE_PARAM_FORMAT).to_string();
        let end = range.end.format(DATE_PARAM_FORMAT).to_string();
        let mut params = vec![("start_date", start.as_str()), ("end_date", end.as_str())];
        if let Some(id) = equipment_id {
            params.push(("equipment_id", id));
        }

        let dtos: Vec<KpiDto> = self.get_json("kpis", &params).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| KpiRecord {
                equipment_id: dto.equipment_id,
                equipment_name: dto.equipment_name,
                production_line_id: dto.production_line_id,
                oee: dto.oee,
                availability: dto.availability,
                performance: dto.performance,
                quality: dto.quality,
                total_produced: dto.total_produced,
                total_rejected: dto.total_rejected,
                total_downtime_hours: dto.total_downtime_hours,
                mtbf_hours: dto.mtbf_hours,
                mttr_hours: dto.mttr_hours,
            })
            .collect())
    }

    async fn fetch_downtime_reasons(
        &self,
        range: &DateRange,
        equipment_id: Option<&str>,
    ) -> anyhow::Result<Vec<DowntimeReasonRecord>> {
        let start = range.start.format(DATE_PARAM_FORMAT).to_string();
        let end = range.end.format(DATE_PARAM_FORMAT).to_string();
        let mut params = vec![("start_date", start.as_str()), ("end_date", end.as_str())];
        if let Some(id) = equipment_id {
            params.push(("equipment_id", id));
        }

        let dtos: Vec<DowntimeReasonDto> = self.get_json("downtime-reasons", &params).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| DowntimeReasonRecord {
                equipment_id: dto.equipment_id,
                downtime_category: dto.downtime_category,
                downtime_reason: dto.downtime_reason,
                incident_count: dto.incident_count,
                duration_seconds: dto.duration_seconds,
            })
            .collect())
    }

    async fn fetch_sensor_data(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        equipment_id: &str,
        sensor_type: &str,
    ) -> anyhow::Result<Vec<SensorReading>> {
        let start_param = start.format(DATETIME_PARAM_FORMAT).to_string();
        let end_param = end.format(DATETIME_PARAM_FORMAT).to_string();
        let params = [
            ("start_date", start_param.as_str()),
            ("end_date", end_param.as_str()),
            ("equipment_id", equipment_id),
            ("sensor_type", sensor_type),
        ];

        let dtos: Vec<SensorReadingDto> = self.get_json("sensor-data", &params).await?;
        let mut readings = Vec::with_capacity(dtos.len());
        for dto in dtos {
            match parse_timestamp(&dto.timestamp) {
                Some(timestamp) => readings.push(SensorReading {
                    timestamp,
                    value: dto.value,
                }),
                None => {
                    return Err(ApiError::Decode {
                        endpoint: "sensor-data",
                        detail: format!("unparseable timestamp {:?}", dto.timestamp),
                    }
                    .into());
                }
            }
        }
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_url_encodes_query_params() {
        let repository =
            HttpMetricsRepository::new("http://127.0.0.1:5000/api/", Duration::from_secs(5))
                .unwrap();
        let url = repository.build_url(
            "sensor-data",
            &[
                ("start_date", "2023-01-15 07:00:00"),
                ("equipment_id", "MCH001"),
            ],
        );
        assert_eq!(
            url,
            "http://127.0.0.1:5000/api/sensor-data?start_date=2023-01-15%2007%3A00%3A00&equipment_id=MCH001"
        );
    }

    #[test]
    fn test_parse_timestamp_accepts_all_api_shapes() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2023-01-15 07:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-01-15T07:00:00+00:00"), Some(expected));
        assert_eq!(
            parse_timestamp("Sun, 15 Jan 2023 07:00:00 GMT"),
            Some(expected)
        );
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_kpi_dto_parses_snake_case_payload() {
        let payload = r#"{
            "equipment_id": "MCH001",
            "equipment_name": "CNC Mill 1",
            "production_line_id": "LINE01",
            "oee": 0.82,
            "availability": 0.9,
            "performance": 0.93,
            "quality": 0.98,
            "total_produced": 15230,
            "total_rejected": 152,
            "total_downtime_hours": 12.5,
            "mtbf_hours": 48.2,
            "mttr_hours": 1.8
        }"#;
        let dto: KpiDto = serde_json::from_str(payload).unwrap();
        assert_eq!(dto.equipment_id, "MCH001");
        assert!((dto.oee - 0.82).abs() < f64::EPSILON);
        assert_eq!(dto.total_produced, 15230);
    }
}
