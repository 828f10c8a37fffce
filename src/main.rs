// Main entry point - Dependency injection and the interactive command loop
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, BufReader};

use factory_dashboard::application::dashboard_service::DashboardService;
use factory_dashboard::application::equipment_service::EquipmentService;
use factory_dashboard::domain::dashboard::FilterState;
use factory_dashboard::domain::sensor::KNOWN_SENSOR_TYPES;
use factory_dashboard::infrastructure::api_repository::HttpMetricsRepository;
use factory_dashboard::infrastructure::config::load_dashboard_config;
use factory_dashboard::presentation::controller::DashboardController;

const HELP: &str = "\
commands:
  start <YYYY-MM-DD>    set the range start date
  end <YYYY-MM-DD>      set the range end date
  equipment <id|all>    scope to one equipment, or all
  sensor <type|none>    select a sensor series (needs an equipment)
  refresh               re-fetch with the current filter
  equipments            list known equipments
  sensors               list known sensor types
  quit                  exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(HttpMetricsRepository::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_seconds),
    )?);

    // Create services (application layer) and the controller
    let filter = FilterState::new(config.filters.start()?, config.filters.end()?);
    let mut controller = DashboardController::new(
        DashboardService::new(repository.clone()),
        EquipmentService::new(repository),
        filter,
    );

    // Directory load runs once, independent of the filter
    controller.load_equipment_directory().await;
    controller.refresh().await;
    println!("{}", controller.render());
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        match command {
            "start" => match parse_date(argument) {
                Ok(date) => controller.set_start_date(date).await,
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            },
            "end" => match parse_date(argument) {
                Ok(date) => controller.set_end_date(date).await,
                Err(message) => {
                    println!("{message}");
                    continue;
                }
            },
            "equipment" => {
                let selection = match argument {
                    "" | "all" => None,
                    id => Some(id.to_string()),
                };
                controller.set_equipment(selection).await;
            }
            "sensor" => {
                let selection = match argument {
                    "" | "none" => None,
                    sensor_type => Some(sensor_type.to_string()),
                };
                controller.set_sensor_type(selection).await;
            }
            "refresh" => controller.refresh().await,
            "equipments" => {
                for option in controller.equipment_options() {
                    println!("  {:<10} {}", option.id, option.name);
                }
                continue;
            }
            "sensors" => {
                for sensor_type in KNOWN_SENSOR_TYPES {
                    println!("  {sensor_type}");
                }
                continue;
            }
            "help" => {
                println!("{HELP}");
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command {other:?} (try 'help')");
                continue;
            }
        }

        println!("{}", controller.render());
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("expected a YYYY-MM-DD date, got {raw:?}"))
}
