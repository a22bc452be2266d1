//! Button handlers of the "GDP Forecasting" form.

use std::sync::Arc;

use common::routes::{desk_route, REPORT_SET_ROUTE};
use common::{ForecastType, FrappeResponse, UploadBaseDatasetsArgs};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::api::{self, FrappeApi};
use crate::error::Result;
use crate::orchestrator::Outcome;
use crate::ui::{
    Navigator, Notifier, FORECAST_TYPE_REQUIRED, FORM_FILE_REQUIRED, FORM_SUCCESS, GENERIC_FAILURE,
};

/// Field values of a "GDP Forecasting" document.
///
/// Every field is optional: an untouched field is simply absent from the
/// form and is sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdpForecastingDoc {
    pub file: Option<String>,
    pub dataset_type: Option<ForecastType>,
    pub forecast_type: Option<ForecastType>,
    pub gdp_dataset: Option<String>,
    pub workforce_dataset: Option<String>,
    pub annual_growth_rates_dataset: Option<String>,
    pub quarterly_growth_rates_dataset: Option<String>,
    pub use_existing_gdp_file: Option<bool>,
    pub use_existing_workforce_file: Option<bool>,
    pub use_existing_annual_growth_file: Option<bool>,
    pub use_existing_quarterly_growth_file: Option<bool>,
}

impl GdpForecastingDoc {
    pub fn base_dataset_args(&self) -> UploadBaseDatasetsArgs {
        UploadBaseDatasetsArgs {
            gdp_dataset: self.gdp_dataset.clone(),
            workforce_dataset: self.workforce_dataset.clone(),
            annual_growth_rates_dataset: self.annual_growth_rates_dataset.clone(),
            quarterly_growth_rates_dataset: self.quarterly_growth_rates_dataset.clone(),
            use_existing_gdp_file: self.use_existing_gdp_file,
            use_existing_workforce_file: self.use_existing_workforce_file,
            use_existing_annual_growth_file: self.use_existing_annual_growth_file,
            use_existing_quarterly_growth_file: self.use_existing_quarterly_growth_file,
        }
    }
}

/// A button added to the form toolbar on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomButton {
    pub label: String,
    pub route: String,
}

pub struct FormHandlers {
    api: Arc<dyn FrappeApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl FormHandlers {
    pub fn new(
        api: Arc<dyn FrappeApi>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
        }
    }

    /// "Upload" button: import the attached file as an annual or quarterly dataset.
    pub async fn upload(&self, doc: &GdpForecastingDoc) -> Outcome {
        if doc.file.is_none() {
            self.notifier.msgprint(FORM_FILE_REQUIRED);
            return Outcome::ValidationFailed(FORM_FILE_REQUIRED.to_string());
        }

        let result = api::upload_dataset(self.api.as_ref(), doc.file.clone(), doc.dataset_type).await;
        self.finish(result, None)
    }

    /// "Run" button.
    pub async fn run(&self, doc: &GdpForecastingDoc) -> Outcome {
        let Some(forecast_type) = doc.forecast_type else {
            self.notifier.msgprint(FORECAST_TYPE_REQUIRED);
            return Outcome::ValidationFailed(FORECAST_TYPE_REQUIRED.to_string());
        };

        let result = api::run_form_forecast_script(self.api.as_ref(), forecast_type).await;
        self.finish(result, Some(FORM_SUCCESS))
    }

    /// "Upload Base" button: replace the base datasets, falling back to the
    /// bundled files for every dataset left empty.
    pub async fn upload_base(&self, doc: &GdpForecastingDoc) -> Outcome {
        let args = doc.base_dataset_args();
        debug!("Uploading base datasets: {:?}", args);

        let result = api::upload_base_datasets(self.api.as_ref(), &args).await;
        self.finish(result, Some(FORM_SUCCESS))
    }

    /// Buttons added to the toolbar when the form loads.
    pub fn refresh(&self) -> Vec<CustomButton> {
        vec![CustomButton {
            label: "GDP Report".to_string(),
            route: desk_route(&REPORT_SET_ROUTE),
        }]
    }

    pub fn activate(&self, button: &CustomButton) {
        info!("{} clicked", button.label);
        self.navigator.navigate(&button.route);
    }

    fn finish(&self, result: Result<FrappeResponse>, success_message: Option<&str>) -> Outcome {
        match result {
            Ok(response) if response.is_success() => {
                if let Some(message) = success_message {
                    self.notifier.msgprint(message);
                }
                Outcome::Completed
            }
            Ok(_) => Outcome::NoNavigation,
            Err(e) => {
                self.notifier.msgprint(GENERIC_FAILURE);
                error!("Form action failed: {:?}", e);
                Outcome::Failed(e.to_string())
            }
        }
    }
}
