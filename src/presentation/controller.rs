// Dashboard controller - filter mutations, fetch cycles, stale-response guard
use chrono::NaiveDate;

use crate::application::dashboard_service::DashboardService;
use crate::application::equipment_service::EquipmentService;
use crate::domain::dashboard::{DashboardData, FilterState};
use crate::domain::equipment::EquipmentOption;
use crate::presentation::state::FetchState;
use crate::presentation::view;

/// Handle for one fetch cycle. A completion is applied only while its
/// ticket is still the latest one issued, so a slow older fetch can never
/// overwrite the results of a newer filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct DashboardController {
    dashboard_service: DashboardService,
    equipment_service: EquipmentService,
    filter: FilterState,
    equipment_options: Vec<EquipmentOption>,
    state: FetchState,
    latest_ticket: u64,
}

impl DashboardController {
    pub fn new(
        dashboard_service: DashboardService,
        equipment_service: EquipmentService,
        filter: FilterState,
    ) -> Self {
        Self {
            dashboard_service,
            equipment_service,
            filter,
            equipment_options: vec![EquipmentOption::all_equipment()],
            state: FetchState::Idle,
            latest_ticket: 0,
        }
    }

    /// One-time startup load of the equipment directory. Failure keeps the
    /// sentinel-only option set and is logged, never surfaced.
    pub async fn load_equipment_directory(&mut self) {
        match self.equipment_service.load_directory().await {
            Ok(options) => self.equipment_options = options,
            Err(e) => {
                tracing::warn!("equipment directory fetch failed, keeping current options: {e:#}");
            }
        }
    }

    pub fn equipment_options(&self) -> &[EquipmentOption] {
        &self.equipment_options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub async fn set_start_date(&mut self, date: NaiveDate) {
        self.filter.start_date = date;
        self.refresh().await;
    }

    pub async fn set_end_date(&mut self, date: NaiveDate) {
        self.filter.end_date = date;
        self.refresh().await;
    }

    pub async fn set_equipment(&mut self, equipment_id: Option<String>) {
        self.filter.equipment_id = equipment_id;
        self.refresh().await;
    }

    pub async fn set_sensor_type(&mut self, sensor_type: Option<String>) {
        self.filter.sensor_type = sensor_type;
        self.refresh().await;
    }

    /// Start a cycle: clear any previous error, enter Loading, issue a
    /// ticket and snapshot the filter the fetch must run against.
    pub fn begin_cycle(&mut self) -> (FetchTicket, FilterState) {
        self.latest_ticket += 1;
        self.state = FetchState::Loading;
        (FetchTicket(self.latest_ticket), self.filter.clone())
    }

    /// Finish a cycle. Returns false when the completion was stale and
    /// discarded.
    pub fn complete_cycle(
        &mut self,
        ticket: FetchTicket,
        result: anyhow::Result<DashboardData>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                "discarding stale fetch completion (ticket {} < {})",
                ticket.0,
                self.latest_ticket
            );
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => FetchState::Error(format!("{e:#}")),
        };
        true
    }

    /// Run one full fetch cycle for the current filter.
    pub async fn refresh(&mut self) {
        let (ticket, filter) = self.begin_cycle();
        let result = self.dashboard_service.load(&filter).await;
        self.complete_cycle(ticket, result);
    }

    pub fn render(&self) -> String {
        view::render(&self.state, &self.filter)
    }
}
