use anyhow::{bail, Result};
use client::GdpForecastingDoc;
use tracing::{info, trace};

use super::form_handlers;
use crate::cli::UploadBaseArgs;
use crate::config::Settings;

/// An unchecked box is left unset, as on an untouched form.
fn checked(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

pub async fn upload_base(settings: &Settings, args: &UploadBaseArgs) -> Result<()> {
    trace!("Entering upload_base");

    let doc = GdpForecastingDoc {
        gdp_dataset: args.gdp_dataset.clone(),
        workforce_dataset: args.workforce_dataset.clone(),
        annual_growth_rates_dataset: args.annual_growth_rates_dataset.clone(),
        quarterly_growth_rates_dataset: args.quarterly_growth_rates_dataset.clone(),
        use_existing_gdp_file: checked(args.use_existing_gdp_file),
        use_existing_workforce_file: checked(args.use_existing_workforce_file),
        use_existing_annual_growth_file: checked(args.use_existing_annual_growth_file),
        use_existing_quarterly_growth_file: checked(args.use_existing_quarterly_growth_file),
        ..Default::default()
    };

    let outcome = form_handlers(settings)?.upload_base(&doc).await;
    if !outcome.is_success() {
        bail!("Base datasets were not uploaded: {:?}", outcome);
    }

    info!("Base datasets uploaded");
    Ok(())
}
