use anyhow::{bail, Result};
use client::GdpForecastingDoc;
use common::ForecastType;
use tracing::{debug, info, trace};

use super::form_handlers;
use crate::config::Settings;

pub async fn upload_dataset(settings: &Settings, file: &str, dataset_type: Option<&str>) -> Result<()> {
    trace!("Entering upload_dataset");
    debug!("File: {}, dataset type: {:?}", file, dataset_type);

    let dataset_type = dataset_type.map(str::parse::<ForecastType>).transpose()?;
    let doc = GdpForecastingDoc {
        file: Some(file.to_string()),
        dataset_type,
        ..Default::default()
    };

    let outcome = form_handlers(settings)?.upload(&doc).await;
    if !outcome.is_success() {
        bail!("Dataset was not imported: {:?}", outcome);
    }

    info!("Dataset {} imported", file);
    Ok(())
}
