// Fetch-cycle state machine
use crate::domain::dashboard::DashboardData;

/// One tagged state per fetch cycle instead of independent loading/error
/// flags, so loading-with-stale-error combinations cannot exist. Terminal
/// states are left only by a new cycle.
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(DashboardData),
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_variant() {
        assert!(FetchState::Loading.is_loading());
        assert!(FetchState::default().error_message().is_none());

        let error = FetchState::Error("HTTP 500 for kpis".to_string());
        assert_eq!(error.error_message(), Some("HTTP 500 for kpis"));
        assert!(error.data().is_none());

        let success = FetchState::Success(DashboardData::default());
        assert!(success.data().is_some());
        assert!(!success.is_loading());
    }
}
