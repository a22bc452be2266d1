use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Which server-side forecast computation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastType {
    Annual,
    Quarterly,
}

impl ForecastType {
    /// Every selectable forecast type, in dropdown order.
    pub const ALL: [ForecastType; 2] = [ForecastType::Annual, ForecastType::Quarterly];

    /// Value sent as `forecast_type` to the Frappe app.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastType::Annual => "Annual",
            ForecastType::Quarterly => "Quarterly",
        }
    }
}

impl fmt::Display for ForecastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastType {
    type Err = CommonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ForecastType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CommonError::UnknownForecastType(value.to_string()))
    }
}

/// A filter of the "GDP Forecasting" query report.
///
/// Serializes to the object shape Frappe expects inside
/// `frappe.query_reports["GDP Forecasting"].filters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub fieldname: String,
    pub label: String,
    pub fieldtype: String,
    pub options: Vec<String>,
    pub default: String,
}

impl ReportFilter {
    /// The forecast type selector shown above the report grid.
    pub fn forecast_type() -> Self {
        Self {
            fieldname: "forecast_type".to_string(),
            label: "Forecast Type".to_string(),
            fieldtype: "Select".to_string(),
            options: ForecastType::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            default: ForecastType::Annual.as_str().to_string(),
        }
    }
}

/// Filters registered for the "GDP Forecasting" report.
pub fn report_filters() -> Vec<ReportFilter> {
    vec![ReportFilter::forecast_type()]
}
