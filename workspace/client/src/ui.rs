//! The two user-facing side effects of the workflows: moving to another
//! page and showing a message box. Diagnostics never go through these.

/// Shown when a forecast run is submitted without a forecast type
pub const FORECAST_TYPE_REQUIRED: &str = "Please select a forecast type before running.";

/// Shown when a dataset slot has neither a file nor the use-existing flag
pub const DATASET_FILES_REQUIRED: &str =
    "Please select a file for every dataset or choose to use the existing files.";

/// Shown when the form's upload button is pressed without an attachment
pub const FORM_FILE_REQUIRED: &str = "Please attach a dataset file before uploading.";

/// The single message shown for every remote failure
pub const GENERIC_FAILURE: &str = "There was an error in processing the upload.";

/// Shown by the form after a successful run or base dataset upload
pub const FORM_SUCCESS: &str = "Upload successful and Python function executed.";

/// Moves the user to another page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Shows a message box to the user.
pub trait Notifier: Send + Sync {
    fn msgprint(&self, message: &str);
}
