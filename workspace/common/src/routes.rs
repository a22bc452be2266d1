/// Desk route of the "GDP Forecasting" query report.
pub const REPORT_ROUTE: &str = "/app/query-report/GDP%20Forecasting";

/// Page shown after the dataset selections were saved.
pub const DATASET_LANDING_ROUTE: &str = "/forecast";

/// `frappe.set_route` arguments used by the form's "GDP Report" button.
pub const REPORT_SET_ROUTE: [&str; 2] = ["query-report", "GDP Forecasting"];

/// Desk URL path for `frappe.set_route(parts...)`.
pub fn desk_route(parts: &[&str]) -> String {
    let encoded: Vec<String> = parts.iter().map(|part| part.replace(' ', "%20")).collect();
    format!("/app/{}", encoded.join("/"))
}
