use crate::analyze::load_config;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use tokio::runtime::Runtime;
use truth_finder::{check_health, HealthStatus};

pub fn execute(config_path: String, endpoint: Option<String>, verbose: bool) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(config_path, endpoint, verbose))
}

async fn execute_async(config_path: String, endpoint: Option<String>, verbose: bool) -> Result<()> {
    let config = load_config(&config_path, endpoint.as_deref())?;
    let health_url = config.health_url()?;
    ui::status_message(&format!("Checking {}", health_url));

    let status = check_health(&config)
        .await
        .with_context(|| "Failed to set up the analysis client")?;

    match status {
        HealthStatus::Healthy => {
            ui::success_message("Analysis service is healthy");
            Ok(())
        }
        HealthStatus::Unhealthy { status, body } => {
            if verbose {
                ui::info_message(&format!("Response body: {}", body));
            }
            Err(CliError::Other(format!(
                "Analysis service reported unhealthy status {}",
                status
            )))
        }
        HealthStatus::Unreachable { reason } => {
            if verbose {
                ui::info_message(&format!("Transport error: {}", reason));
            }
            Err(CliError::RequestFailed(
                truth_finder::error::TRANSPORT_MESSAGE.to_string(),
            ))
        }
    }
}
