#[cfg(test)]
pub mod test_utils {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Multipart, Path, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// A request the stub site received.
    #[derive(Debug, Clone)]
    pub struct Recorded {
        pub method: String,
        pub headers: HeaderMap,
        pub json: Option<Value>,
        /// `(field name, file name, content)` of every multipart field
        pub fields: Vec<(String, Option<String>, Vec<u8>)>,
    }

    impl Recorded {
        pub fn text_field(&self, name: &str) -> Option<String> {
            self.fields
                .iter()
                .find(|(field, _, _)| field == name)
                .map(|(_, _, content)| String::from_utf8_lossy(content).to_string())
        }
    }

    /// How the stub answers whitelisted method calls.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StubMode {
        Succeed,
        Reject,
    }

    #[derive(Clone)]
    struct StubState {
        mode: StubMode,
        requests: Arc<Mutex<Vec<Recorded>>>,
    }

    /// Stand-in for a Frappe site, listening on an ephemeral local port.
    pub struct StubSite {
        pub address: SocketAddr,
        requests: Arc<Mutex<Vec<Recorded>>>,
    }

    impl StubSite {
        pub fn url(&self) -> String {
            format!("http://{}", self.address)
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn call_method(
        State(state): State<StubState>,
        Path(method): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Response {
        state.requests.lock().unwrap().push(Recorded {
            method: method.clone(),
            headers,
            json: Some(body),
            fields: Vec::new(),
        });

        match state.mode {
            StubMode::Succeed if method.ends_with("run_forecast_script") => {
                Json(json!({ "message": "forecast_success" })).into_response()
            }
            StubMode::Succeed => Json(json!({ "message": "upload_success" })).into_response(),
            StubMode::Reject => (
                StatusCode::EXPECTATION_FAILED,
                Json(json!({
                    "exc_type": "ValidationError",
                    "exception": "frappe.exceptions.ValidationError: Invalid forecast type selected.",
                    "_server_messages": "[\"{\\\"message\\\": \\\"Invalid forecast type selected.\\\", \\\"title\\\": \\\"Error\\\"}\"]"
                })),
            )
                .into_response(),
        }
    }

    async fn upload_file(
        State(state): State<StubState>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Response {
        let mut fields = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
            fields.push((name, file_name, content));
        }

        let file_url = fields
            .iter()
            .find(|(name, _, _)| name == "file_url")
            .map(|(_, _, content)| String::from_utf8_lossy(content).to_string());

        state.requests.lock().unwrap().push(Recorded {
            method: "upload_file".to_string(),
            headers,
            json: None,
            fields,
        });

        Json(json!({ "message": { "file_url": file_url, "is_private": 1 } })).into_response()
    }

    /// Start a stub site answering the way `mode` says.
    pub async fn start_stub_site(mode: StubMode) -> StubSite {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            mode,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/api/method/upload_file", post(upload_file))
            .route("/api/method/:method", post(call_method))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub site");
        let address = listener.local_addr().expect("Stub site has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub site stopped");
        });

        StubSite { address, requests }
    }
}
