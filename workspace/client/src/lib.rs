//! Client side of the GDP forecasting app: triggers forecast runs, uploads
//! datasets and drives the pages that do both.

pub mod api;
pub mod error;
pub mod form;
pub mod http;
pub mod orchestrator;
pub mod slot;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;

pub use api::FrappeApi;
pub use error::ClientError;
pub use form::{CustomButton, FormHandlers, GdpForecastingDoc};
pub use http::{ClientConfig, FrappeClient};
pub use orchestrator::{Orchestrator, Outcome, UploadWait, DEFAULT_NAVIGATION_DELAY};
pub use slot::{LocalFile, SlotState, UploadHandle, UploadStatus};
pub use state::{DatasetSelections, ForecastSelection};
pub use ui::{Navigator, Notifier};
