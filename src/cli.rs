use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

pub mod commands;

use commands::{report_filters, run_forecast, save_datasets, upload_base, upload_dataset};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "gdp_forecasting")]
#[command(about = "Upload GDP datasets and trigger forecasts on the GDP forecasting Frappe app")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); `gdp_forecasting.toml` in the working directory is used when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root URL of the Frappe site, overriding the settings
    #[arg(long, global = true, env = "GDP_FORECASTING_SITE_URL")]
    pub site_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a forecast and open the "GDP Forecasting" report
    Run {
        /// Forecast type: Annual or Quarterly
        #[arg(short, long)]
        forecast_type: Option<String>,
    },
    /// Upload dataset files and save the selection
    ///
    /// Every file is uploaded as soon as it is selected; the selection is
    /// saved afterwards, with or without waiting for those uploads. The
    /// command only exits once every upload has finished.
    Save(SaveArgs),
    /// Replace the base datasets through the "GDP Forecasting" form
    ///
    /// Datasets left out fall back to the files bundled with the app.
    UploadBase(UploadBaseArgs),
    /// Import an already uploaded file as an annual or quarterly dataset
    UploadDataset {
        /// Site path of the file, e.g. /private/files/annual.csv
        #[arg(short, long)]
        file: String,

        /// Annual or Quarterly
        #[arg(short, long)]
        dataset_type: Option<String>,
    },
    /// Print the filters of the "GDP Forecasting" report as JSON
    ReportFilters,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// GDP dataset file
    #[arg(long)]
    pub gdp: Option<PathBuf>,

    /// Workforce dataset file
    #[arg(long)]
    pub workforce: Option<PathBuf>,

    /// Annual growth rates dataset file
    #[arg(long)]
    pub annual_growth: Option<PathBuf>,

    /// Quarterly growth rates dataset file
    #[arg(long)]
    pub quarterly_growth: Option<PathBuf>,

    /// General purpose dataset file
    #[arg(long)]
    pub general: Option<PathBuf>,

    /// Keep the existing file for slots without a new one
    #[arg(long)]
    pub use_existing: bool,

    /// GDP, Workforce, Annual Growth or Quarterly Growth
    #[arg(short, long)]
    pub dataset_type: Option<String>,

    /// Wait for the file uploads to finish before saving
    #[arg(long)]
    pub wait_uploads: bool,
}

impl SaveArgs {
    /// Files in slot order.
    pub fn slot_files(&self) -> [Option<&PathBuf>; 5] {
        [
            self.gdp.as_ref(),
            self.workforce.as_ref(),
            self.annual_growth.as_ref(),
            self.quarterly_growth.as_ref(),
            self.general.as_ref(),
        ]
    }
}

#[derive(Args, Debug)]
pub struct UploadBaseArgs {
    /// Site path of the GDP dataset
    #[arg(long)]
    pub gdp_dataset: Option<String>,

    /// Site path of the workforce dataset
    #[arg(long)]
    pub workforce_dataset: Option<String>,

    /// Site path of the annual growth rates dataset
    #[arg(long)]
    pub annual_growth_rates_dataset: Option<String>,

    /// Site path of the quarterly growth rates dataset
    #[arg(long)]
    pub quarterly_growth_rates_dataset: Option<String>,

    #[arg(long)]
    pub use_existing_gdp_file: bool,

    #[arg(long)]
    pub use_existing_workforce_file: bool,

    #[arg(long)]
    pub use_existing_annual_growth_file: bool,

    #[arg(long)]
    pub use_existing_quarterly_growth_file: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(site_url) = self.site_url {
            settings.site_url = site_url;
        }

        match self.command {
            Commands::Run { forecast_type } => {
                run_forecast(&settings, forecast_type.as_deref()).await?;
            }
            Commands::Save(args) => {
                save_datasets(&settings, &args).await?;
            }
            Commands::UploadBase(args) => {
                upload_base(&settings, &args).await?;
            }
            Commands::UploadDataset { file, dataset_type } => {
                upload_dataset(&settings, &file, dataset_type.as_deref()).await?;
            }
            Commands::ReportFilters => {
                report_filters()?;
            }
        }
        Ok(())
    }
}
