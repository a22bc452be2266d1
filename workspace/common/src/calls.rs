//! Whitelisted server methods and the argument objects sent to them.
//!
//! Optional fields are always serialized, as `null` when unset. The server
//! treats an omitted argument differently from an explicitly empty one, so
//! none of these structs use `skip_serializing_if`.

use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetType, YesNo};
use crate::forecast::ForecastType;

const PAGE_MODULE: &str = "gdp_forecasting.gdp_forecasting.gdp_forecasting";
const DOCTYPE_MODULE: &str = "gdp_forecasting.gdp_forecasting.doctype.gdp_forecasting.gdp_forecasting";

/// A whitelisted method of the Frappe app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `run_forecast_script` as called from the forecast page
    RunForecastScript,
    /// `upload_file` as called from the dataset upload page
    UploadFile,
    /// `run_forecast_script` as called from the "GDP Forecasting" form
    FormRunForecastScript,
    /// `upload_file` as called from the "GDP Forecasting" form
    FormUploadFile,
    /// `upload_base_datasets` as called from the "GDP Forecasting" form
    FormUploadBaseDatasets,
}

impl Method {
    /// Dotted path used in `/api/method/<path>`.
    pub fn path(&self) -> String {
        let (module, name) = match self {
            Method::RunForecastScript => (PAGE_MODULE, "run_forecast_script"),
            Method::UploadFile => (PAGE_MODULE, "upload_file"),
            Method::FormRunForecastScript => (DOCTYPE_MODULE, "run_forecast_script"),
            Method::FormUploadFile => (DOCTYPE_MODULE, "upload_file"),
            Method::FormUploadBaseDatasets => (DOCTYPE_MODULE, "upload_base_datasets"),
        };
        format!("{}.{}", module, name)
    }
}

/// Arguments of `run_forecast_script`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunForecastArgs {
    pub forecast_type: ForecastType,
}

/// Arguments of the dataset page's `upload_file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFileArgs {
    /// One entry per slot, in slot order; `null` for an empty slot
    pub file: Vec<Option<String>>,
    pub use_existing: YesNo,
    pub dataset_type: Option<DatasetType>,
}

/// Arguments of the form's `upload_file`.
///
/// The form's `dataset_type` select shares the Annual/Quarterly options of
/// the forecast selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctypeUploadArgs {
    pub file: Option<String>,
    pub dataset_type: Option<ForecastType>,
}

/// Arguments of `upload_base_datasets`.
///
/// The `use_existing_*` checks travel as Frappe check values (`0`/`1`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadBaseDatasetsArgs {
    pub gdp_dataset: Option<String>,
    pub workforce_dataset: Option<String>,
    pub annual_growth_rates_dataset: Option<String>,
    pub quarterly_growth_rates_dataset: Option<String>,
    #[serde(with = "check_field")]
    pub use_existing_gdp_file: Option<bool>,
    #[serde(with = "check_field")]
    pub use_existing_workforce_file: Option<bool>,
    #[serde(with = "check_field")]
    pub use_existing_annual_growth_file: Option<bool>,
    #[serde(with = "check_field")]
    pub use_existing_quarterly_growth_file: Option<bool>,
}

mod check_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(checked) => serializer.serialize_u8(u8::from(*checked)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<u8>::deserialize(deserializer)?;
        Ok(raw.map(|v| v != 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_paths() {
        assert_eq!(
            Method::RunForecastScript.path(),
            "gdp_forecasting.gdp_forecasting.gdp_forecasting.run_forecast_script"
        );
        assert_eq!(
            Method::FormUploadBaseDatasets.path(),
            "gdp_forecasting.gdp_forecasting.doctype.gdp_forecasting.gdp_forecasting.upload_base_datasets"
        );
    }

    #[test]
    fn test_upload_file_args_keep_nulls() {
        let args = UploadFileArgs {
            file: vec![Some("gdp.csv".to_string()), None, None, None, None],
            use_existing: YesNo::Yes,
            dataset_type: None,
        };

        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "file": ["gdp.csv", null, null, null, null],
                "use_existing": "Yes",
                "dataset_type": null
            })
        );
    }

    #[test]
    fn test_base_dataset_args_send_every_field() {
        let args = UploadBaseDatasetsArgs {
            gdp_dataset: Some("/private/files/gdp.csv".to_string()),
            use_existing_workforce_file: Some(true),
            use_existing_annual_growth_file: Some(false),
            ..Default::default()
        };

        let value = serde_json::to_value(&args).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert_eq!(object["gdp_dataset"], json!("/private/files/gdp.csv"));
        assert_eq!(object["workforce_dataset"], json!(null));
        assert_eq!(object["use_existing_gdp_file"], json!(null));
        assert_eq!(object["use_existing_workforce_file"], json!(1));
        assert_eq!(object["use_existing_annual_growth_file"], json!(0));
    }

    #[test]
    fn test_base_dataset_args_from_form_values() {
        let args: UploadBaseDatasetsArgs = serde_json::from_value(json!({
            "gdp_dataset": null,
            "workforce_dataset": "/private/files/workforce.csv",
            "annual_growth_rates_dataset": null,
            "quarterly_growth_rates_dataset": null,
            "use_existing_gdp_file": 1,
            "use_existing_workforce_file": 0,
            "use_existing_annual_growth_file": null,
            "use_existing_quarterly_growth_file": null
        }))
        .unwrap();

        assert_eq!(args.use_existing_gdp_file, Some(true));
        assert_eq!(args.use_existing_workforce_file, Some(false));
        assert_eq!(args.use_existing_annual_growth_file, None);
    }
}
