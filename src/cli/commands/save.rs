use anyhow::{bail, Result};
use client::{DatasetSelections, LocalFile, UploadWait};
use tracing::{debug, error, info, trace};

use super::orchestrator;
use crate::cli::SaveArgs;
use crate::config::Settings;

pub async fn save_datasets(settings: &Settings, args: &SaveArgs) -> Result<()> {
    trace!("Entering save_datasets");
    debug!("Save arguments: {:?}", args);

    let orchestrator = orchestrator(settings)?;
    let mut selections = DatasetSelections::new();
    selections.use_existing = args.use_existing;
    if let Some(value) = args.dataset_type.as_deref() {
        selections.select_dataset_type(value)?;
    }

    for (index, path) in args.slot_files().into_iter().enumerate() {
        let Some(path) = path else {
            continue;
        };
        let file = match LocalFile::read(path).await {
            Ok(file) => file,
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return Err(e.into());
            }
        };
        orchestrator.select_dataset_file(&mut selections, index, file)?;
    }

    let wait = if args.wait_uploads {
        UploadWait::Wait
    } else {
        UploadWait::Skip
    };

    let outcome = orchestrator.save_dataset_selections(&selections, wait).await;
    if wait == UploadWait::Skip {
        // The runtime ends with this command.
        orchestrator.settle_uploads(&selections).await;
    }
    if !outcome.is_success() {
        bail!("Dataset selections were not saved: {:?}", outcome);
    }

    info!("Dataset selections saved");
    Ok(())
}
