use std::sync::Arc;
use std::time::Duration;

use common::{DatasetSlot, DATASET_LANDING_ROUTE, REPORT_ROUTE};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::api::{self, FrappeApi};
use crate::error::{ClientError, Result};
use crate::slot::{LocalFile, UploadHandle, UploadStatus};
use crate::state::{DatasetSelections, ForecastSelection};
use crate::ui::{Navigator, Notifier, FORECAST_TYPE_REQUIRED, GENERIC_FAILURE};

/// Delay between a confirmed response and the follow-up navigation
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(1000);

/// What a user action ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A precondition failed; nothing was sent
    ValidationFailed(String),
    /// The call succeeded and the user was moved to this route
    Navigated(String),
    /// The call succeeded and nothing further happens
    Completed,
    /// The call went through but the reply carried no message
    NoNavigation,
    /// The call failed; the diagnostic detail
    Failed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Navigated(_) | Outcome::Completed)
    }
}

/// Whether saving waits for the slots' best-effort uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadWait {
    /// Save immediately; unfinished uploads are only logged
    #[default]
    Skip,
    /// Wait for every upload to finish, log failures, then save
    Wait,
}

/// Drives the forecast page and the dataset upload page.
#[derive(Clone)]
pub struct Orchestrator {
    api: Arc<dyn FrappeApi>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    navigation_delay: Duration,
}

impl Orchestrator {
    pub fn new(
        api: Arc<dyn FrappeApi>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            navigation_delay: DEFAULT_NAVIGATION_DELAY,
        }
    }

    pub fn with_navigation_delay(mut self, delay: Duration) -> Self {
        self.navigation_delay = delay;
        self
    }

    /// Record the dropdown choice of the forecast page.
    pub fn select_forecast_type(&self, selection: &mut ForecastSelection, value: &str) -> Result<()> {
        selection.select(value).map(|_| ()).map_err(|e| {
            warn!("Rejected forecast type selection '{}': {}", value, e);
            e
        })
    }

    /// Run the selected forecast and open the report once it is done.
    #[instrument(skip(self))]
    pub async fn submit_forecast_run(&self, selection: &ForecastSelection) -> Outcome {
        trace!("Entering submit_forecast_run");

        let Some(forecast_type) = selection.selected() else {
            info!("Forecast run submitted without a forecast type");
            self.notifier.msgprint(FORECAST_TYPE_REQUIRED);
            return Outcome::ValidationFailed(FORECAST_TYPE_REQUIRED.to_string());
        };

        match api::run_forecast_script(self.api.as_ref(), forecast_type).await {
            Ok(response) if response.is_success() => {
                info!("{} forecast finished: {:?}", forecast_type, response.message);
                self.navigate_after_delay(REPORT_ROUTE).await
            }
            Ok(response) => {
                debug!("Forecast run reply without message: {:?}", response);
                Outcome::NoNavigation
            }
            Err(e) => {
                self.notifier.msgprint(GENERIC_FAILURE);
                error!("{} forecast run failed: {:?}", forecast_type, e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Bind `file` to a slot and start its best-effort upload.
    ///
    /// Only the chosen slot changes. Its label is the local file name,
    /// whatever the upload later reports.
    pub fn select_dataset_file(
        &self,
        selections: &mut DatasetSelections,
        slot_index: usize,
        file: LocalFile,
    ) -> Result<()> {
        let slot = DatasetSlot::from_index(slot_index)?;
        info!("Selected {} for slot {:?} ({} bytes)", file.name, slot, file.size());

        let upload = UploadHandle::spawn(self.api.clone(), slot, file)?;
        selections.bind(slot, upload);
        Ok(())
    }

    /// Send the dataset selections and open the landing page once accepted.
    #[instrument(skip(self, selections))]
    pub async fn save_dataset_selections(
        &self,
        selections: &DatasetSelections,
        wait: UploadWait,
    ) -> Outcome {
        trace!("Entering save_dataset_selections");

        if let Err(e) = selections.validate() {
            let message = match e {
                ClientError::Validation(message) => message,
                other => other.to_string(),
            };
            info!("Dataset save rejected: {}", message);
            self.notifier.msgprint(&message);
            return Outcome::ValidationFailed(message);
        }

        self.report_uploads(selections, wait).await;

        debug!(
            "Saving {:?}, use existing: {:?}, dataset type: {:?}",
            selections.labels(),
            selections.use_existing_flag(),
            selections.dataset_type
        );

        let result = api::upload_file(
            self.api.as_ref(),
            selections.file_names(),
            selections.use_existing_flag(),
            selections.dataset_type,
        )
        .await;

        match result {
            Ok(response) if response.is_success() => {
                info!("Success: {:?}", response.message);
                self.navigate_after_delay(DATASET_LANDING_ROUTE).await
            }
            Ok(_) => {
                warn!("Error in the response");
                Outcome::NoNavigation
            }
            Err(e) => {
                error!("Error during dataset save: {:?}", e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Wait for the uploads still running after a save and log the failures.
    ///
    /// Callers that end the runtime right after saving need this, otherwise
    /// the unfinished uploads are dropped with it.
    pub async fn settle_uploads(&self, selections: &DatasetSelections) {
        let running = selections
            .uploads()
            .filter(|upload| upload.status().is_pending())
            .count();
        if running > 0 {
            info!("Waiting for {} upload(s) to finish", running);
        }
        self.report_uploads(selections, UploadWait::Wait).await;
    }

    async fn report_uploads(&self, selections: &DatasetSelections, wait: UploadWait) {
        for upload in selections.uploads() {
            let status = match wait {
                UploadWait::Wait => upload.wait().await,
                UploadWait::Skip => upload.status(),
            };

            match status {
                UploadStatus::Uploaded { .. } => {}
                UploadStatus::Pending => warn!(
                    "Upload of {} (slot {:?}) still running since {}",
                    upload.file_name(),
                    upload.slot(),
                    upload.started_at()
                ),
                UploadStatus::Failed { reason } => warn!(
                    "Upload of {} (slot {:?}) failed: {}",
                    upload.file_name(),
                    upload.slot(),
                    reason
                ),
            }
        }
    }

    async fn navigate_after_delay(&self, route: &str) -> Outcome {
        if !self.navigation_delay.is_zero() {
            tokio::time::sleep(self.navigation_delay).await;
        }
        info!("Navigating to {}", route);
        self.navigator.navigate(route);
        Outcome::Navigated(route.to_string())
    }
}
