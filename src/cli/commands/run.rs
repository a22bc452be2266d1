use anyhow::{bail, Result};
use client::ForecastSelection;
use tracing::{debug, info, trace};

use super::orchestrator;
use crate::config::Settings;

pub async fn run_forecast(settings: &Settings, forecast_type: Option<&str>) -> Result<()> {
    trace!("Entering run_forecast");
    debug!("Forecast type argument: {:?}", forecast_type);

    let orchestrator = orchestrator(settings)?;
    let mut selection = ForecastSelection::new();
    if let Some(value) = forecast_type {
        orchestrator.select_forecast_type(&mut selection, value)?;
    }

    let outcome = orchestrator.submit_forecast_run(&selection).await;
    if !outcome.is_success() {
        bail!("Forecast run did not complete: {:?}", outcome);
    }

    info!("Forecast run completed");
    Ok(())
}
