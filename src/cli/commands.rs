pub mod report_filters;
pub mod run;
pub mod save;
pub mod upload_base;
pub mod upload_dataset;

use std::sync::Arc;

use anyhow::Result;
use client::{FormHandlers, FrappeClient, Orchestrator};

use crate::config::Settings;
use crate::terminal::{TerminalNavigator, TerminalNotifier};

pub use report_filters::report_filters;
pub use run::run_forecast;
pub use save::save_datasets;
pub use upload_base::upload_base;
pub use upload_dataset::upload_dataset;

fn orchestrator(settings: &Settings) -> Result<Orchestrator> {
    let api = Arc::new(FrappeClient::new(settings.client_config())?);
    let navigator = Arc::new(TerminalNavigator::new(&settings.site_url));
    Ok(Orchestrator::new(api, navigator, Arc::new(TerminalNotifier))
        .with_navigation_delay(settings.navigation_delay()))
}

fn form_handlers(settings: &Settings) -> Result<FormHandlers> {
    let api = Arc::new(FrappeClient::new(settings.client_config())?);
    let navigator = Arc::new(TerminalNavigator::new(&settings.site_url));
    Ok(FormHandlers::new(api, navigator, Arc::new(TerminalNotifier)))
}
