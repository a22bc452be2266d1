use client::{Navigator, Notifier};
use tracing::debug;

/// Prints where a browser would be sent next.
pub struct TerminalNavigator {
    site_url: String,
}

impl TerminalNavigator {
    pub fn new(site_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, route: &str) -> String {
        format!("{}{}", self.site_url, route)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        let url = self.url_for(route);
        debug!("Navigation target: {}", url);
        println!("Open {}", url);
    }
}

/// Prints message boxes to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn msgprint(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_route() {
        let navigator = TerminalNavigator::new("https://erp.example.com/");
        assert_eq!(
            navigator.url_for("/app/query-report/GDP%20Forecasting"),
            "https://erp.example.com/app/query-report/GDP%20Forecasting"
        );
    }
}
