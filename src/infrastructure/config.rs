use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub filters: FilterDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Filter values the dashboard starts with before any user input.
#[derive(Debug, Deserialize, Clone)]
pub struct FilterDefaults {
    pub start_date: String,
    pub end_date: String,
}

impl FilterDefaults {
    pub fn start(&self) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .with_context(|| format!("invalid filters.start_date {:?}", self.start_date))
    }

    pub fn end(&self) -> anyhow::Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d")
            .with_context(|| format!("invalid filters.end_date {:?}", self.end_date))
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("api.base_url", "http://127.0.0.1:5000/api")?
        .set_default("api.timeout_seconds", 30_i64)?
        .set_default("filters.start_date", "2023-01-01")?
        .set_default("filters.end_date", "2023-02-01")?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_full_config() {
        let config = load_dashboard_config().unwrap();
        assert!(config.api.base_url.starts_with("http://"));
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.filters.start().is_ok());
        assert!(config.filters.end().is_ok());
    }
}
