// View renderer - pure function of fetch state and filter
use std::fmt::Write;

use crate::domain::chart::{BarChart, DoughnutChart, LineChart};
use crate::domain::dashboard::{DashboardData, FilterState};
use crate::domain::kpi::format_percent;
use crate::presentation::state::FetchState;

/// Decimal places for the per-equipment summary tiles.
const TILE_DECIMALS: usize = 1;

pub const LOADING_NOTICE: &str = "Loading dashboard data...";
pub const NO_KPI_NOTICE: &str = "No KPIs found for the selected period.";
pub const NO_DOWNTIME_NOTICE: &str = "No downtime found for the selected period.";

/// Render the dashboard. Loading supersedes content, error supersedes
/// content; otherwise every empty collection gets an explicit notice.
pub fn render(state: &FetchState, filter: &FilterState) -> String {
    match state {
        FetchState::Idle => "No data loaded yet.".to_string(),
        FetchState::Loading => LOADING_NOTICE.to_string(),
        FetchState::Error(message) => format!("Error: {message}"),
        FetchState::Success(data) => render_content(data, filter),
    }
}

fn render_content(data: &DashboardData, filter: &FilterState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Production dashboard {} .. {}",
        filter.start_date, filter.end_date
    );

    if data.kpis.is_empty() {
        let _ = writeln!(out, "{NO_KPI_NOTICE}");
    } else {
        for (title, label, value_of) in kpi_chart_specs() {
            let chart = BarChart::from_kpis(title, label, &data.kpis, value_of);
            render_bar_chart(&mut out, &chart);
        }
        render_tiles(&mut out, data);
    }

    let scope_name = filter.equipment_id.as_deref().unwrap_or("All equipment");
    if data.downtime_reasons.is_empty() {
        let _ = writeln!(out, "{NO_DOWNTIME_NOTICE}");
    } else {
        let chart = DoughnutChart::from_downtime_reasons(
            &format!("Downtime breakdown ({scope_name})"),
            &data.downtime_reasons,
        );
        render_doughnut_chart(&mut out, &chart);
    }

    if let Some((_, sensor_type)) = filter.sensor_selection() {
        if data.sensor_readings.is_empty() {
            let _ = writeln!(out, "No sensor data available for {sensor_type}.");
        } else {
            let chart = LineChart::from_readings(
                &format!("{sensor_type} on {} ({scope_name})", filter.start_date),
                sensor_type,
                &data.sensor_readings,
            );
            render_line_chart(&mut out, &chart);
        }
    }

    out
}

/// The four KPI bar charts, one per ratio, mirroring the 2x2 grid layout.
fn kpi_chart_specs() -> [(&'static str, &'static str, fn(&crate::domain::kpi::KpiRecord) -> f64); 4]
{
    [
        ("OEE by equipment", "OEE", |k| k.oee),
        ("Availability by equipment", "Availability", |k| k.availability),
        ("Performance by equipment", "Performance", |k| k.performance),
        ("Quality by equipment", "Quality", |k| k.quality),
    ]
}

fn render_bar_chart(out: &mut String, chart: &BarChart) {
    let _ = writeln!(out, "== {} ==", chart.title);
    for bar in &chart.bars {
        let _ = writeln!(out, "  {:<10} {:>7}%", bar.label, bar.text);
    }
}

fn render_doughnut_chart(out: &mut String, chart: &DoughnutChart) {
    let _ = writeln!(out, "== {} ==", chart.title);
    for slice in &chart.slices {
        let _ = writeln!(out, "  {}", slice.tooltip());
    }
}

fn render_line_chart(out: &mut String, chart: &LineChart) {
    let _ = writeln!(out, "== {} ==", chart.title);
    let _ = writeln!(out, "  series: {}", chart.dataset_label);
    for point in &chart.points {
        let _ = writeln!(out, "  {}  {:.2}", point.time_label, point.value);
    }
}

fn render_tiles(out: &mut String, data: &DashboardData) {
    let _ = writeln!(out, "== Equipment summary ==");
    for kpi in &data.kpis {
        let _ = writeln!(
            out,
            "  {} [{}] OEE {}% | avail {}% | perf {}% | qual {}% | produced {} (rejected {}) | downtime {:.1} h | MTBF {:.1} h | MTTR {:.1} h",
            kpi.equipment_id,
            kpi.production_line_id,
            format_percent(kpi.oee, TILE_DECIMALS),
            format_percent(kpi.availability, TILE_DECIMALS),
            format_percent(kpi.performance, TILE_DECIMALS),
            format_percent(kpi.quality, TILE_DECIMALS),
            kpi.total_produced,
            kpi.total_rejected,
            kpi.total_downtime_hours,
            kpi.mtbf_hours,
            kpi.mttr_hours,
        );
    }
}
