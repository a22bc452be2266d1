//! Transport types shared by everything that talks to the GDP forecasting
//! Frappe app: selectors, whitelisted methods and their arguments, the
//! response envelope, and the routes the pages navigate to.

pub mod calls;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod response;
pub mod routes;
pub mod upload;

pub use calls::{DoctypeUploadArgs, Method, RunForecastArgs, UploadBaseDatasetsArgs, UploadFileArgs};
pub use dataset::{DatasetSlot, DatasetType, YesNo};
pub use error::CommonError;
pub use forecast::{report_filters, ForecastType, ReportFilter};
pub use response::{FrappeResponse, ServerResponse};
pub use routes::{DATASET_LANDING_ROUTE, REPORT_ROUTE};
pub use upload::FileUploadForm;
