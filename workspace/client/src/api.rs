use async_trait::async_trait;
use common::{
    DatasetType, DoctypeUploadArgs, FileUploadForm, ForecastType, FrappeResponse, Method,
    RunForecastArgs, UploadBaseDatasetsArgs, UploadFileArgs, YesNo,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, trace};

use crate::error::Result;

/// Remote surface of the GDP forecasting Frappe app.
#[async_trait]
pub trait FrappeApi: Send + Sync {
    /// Call a whitelisted method with JSON arguments.
    async fn call(&self, method: Method, args: Value) -> Result<FrappeResponse>;

    /// Send a file to the generic file ingestion endpoint.
    async fn upload(&self, form: FileUploadForm) -> Result<FrappeResponse>;
}

async fn call_with<A>(api: &dyn FrappeApi, method: Method, args: &A) -> Result<FrappeResponse>
where
    A: Serialize,
{
    let args = serde_json::to_value(args)?;
    debug!("Calling {} with {}", method.path(), args);

    let result = api.call(method, args).await;
    match &result {
        Ok(response) => info!(
            "{} answered (success: {})",
            method.path(),
            response.is_success()
        ),
        Err(e) => error!("{} failed: {}", method.path(), e),
    }
    result
}

/// `run_forecast_script(forecast_type)` from the forecast page
pub async fn run_forecast_script(
    api: &dyn FrappeApi,
    forecast_type: ForecastType,
) -> Result<FrappeResponse> {
    trace!("Requesting {} forecast run", forecast_type);
    call_with(api, Method::RunForecastScript, &RunForecastArgs { forecast_type }).await
}

/// `upload_file(file, use_existing, dataset_type)` from the dataset upload page
pub async fn upload_file(
    api: &dyn FrappeApi,
    file: Vec<Option<String>>,
    use_existing: YesNo,
    dataset_type: Option<DatasetType>,
) -> Result<FrappeResponse> {
    trace!("Saving {} dataset selections", file.len());
    let args = UploadFileArgs {
        file,
        use_existing,
        dataset_type,
    };
    call_with(api, Method::UploadFile, &args).await
}

/// `upload_base_datasets(...)` from the "GDP Forecasting" form
pub async fn upload_base_datasets(
    api: &dyn FrappeApi,
    args: &UploadBaseDatasetsArgs,
) -> Result<FrappeResponse> {
    call_with(api, Method::FormUploadBaseDatasets, args).await
}

/// `upload_file(file, dataset_type)` from the "GDP Forecasting" form
pub async fn upload_dataset(
    api: &dyn FrappeApi,
    file: Option<String>,
    dataset_type: Option<ForecastType>,
) -> Result<FrappeResponse> {
    call_with(api, Method::FormUploadFile, &DoctypeUploadArgs { file, dataset_type }).await
}

/// `run_forecast_script(forecast_type)` from the "GDP Forecasting" form
pub async fn run_form_forecast_script(
    api: &dyn FrappeApi,
    forecast_type: ForecastType,
) -> Result<FrappeResponse> {
    call_with(api, Method::FormRunForecastScript, &RunForecastArgs { forecast_type }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_run_forecast_script_arguments() {
        let api = MockApi::succeeding("forecast_success");

        let response = run_forecast_script(&api, ForecastType::Annual).await.unwrap();

        assert!(response.is_success());
        assert_eq!(
            api.calls(),
            vec![(Method::RunForecastScript, json!({"forecast_type": "Annual"}))]
        );
    }

    #[tokio::test]
    async fn test_upload_dataset_sends_nulls() {
        let api = MockApi::succeeding(json!({"status": "success"}));

        upload_dataset(&api, None, None).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![(Method::FormUploadFile, json!({"file": null, "dataset_type": null}))]
        );
    }
}
