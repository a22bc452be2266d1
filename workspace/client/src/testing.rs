//! Recording fakes of the remote API and the UI collaborators.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use common::{FileUploadForm, FrappeResponse, Method};
use serde_json::{json, Value};
use tokio::time::Instant;

use crate::api::FrappeApi;
use crate::error::{ClientError, Result};
use crate::ui::{Navigator, Notifier};

/// Something the fake API saw, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Call(Method),
    Upload(String),
}

#[derive(Debug, Clone)]
enum Reply {
    Message(Value),
    Error,
}

/// In-memory `FrappeApi` that records everything it receives.
pub struct MockApi {
    reply: Reply,
    failing_uploads: bool,
    upload_delay: Duration,
    calls: Mutex<Vec<(Method, Value)>>,
    uploads: Mutex<Vec<FileUploadForm>>,
    events: Mutex<Vec<ApiEvent>>,
}

impl MockApi {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            failing_uploads: false,
            upload_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            uploads: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Every method call answers with `message`.
    pub fn succeeding(message: impl Into<Value>) -> Self {
        Self::with_reply(Reply::Message(message.into()))
    }

    /// Every method call answers without a message.
    pub fn silent() -> Self {
        Self::with_reply(Reply::Message(Value::Null))
    }

    /// Every method call fails with a server error.
    pub fn failing() -> Self {
        Self::with_reply(Reply::Error)
    }

    pub fn with_failing_uploads(mut self) -> Self {
        self.failing_uploads = true;
        self
    }

    pub fn with_upload_delay(mut self, delay: Duration) -> Self {
        self.upload_delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<(Method, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<FileUploadForm> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<ApiEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl FrappeApi for MockApi {
    async fn call(&self, method: Method, args: Value) -> Result<FrappeResponse> {
        self.calls.lock().unwrap().push((method, args));
        self.events.lock().unwrap().push(ApiEvent::Call(method));

        match &self.reply {
            Reply::Message(Value::Null) => Ok(FrappeResponse::default()),
            Reply::Message(message) => Ok(FrappeResponse::with_message(message.clone())),
            Reply::Error => Err(ClientError::Server {
                status: 417,
                exc_type: Some("ValidationError".to_string()),
                message: "Invalid forecast type selected.".to_string(),
            }),
        }
    }

    async fn upload(&self, form: FileUploadForm) -> Result<FrappeResponse> {
        if !self.upload_delay.is_zero() {
            tokio::time::sleep(self.upload_delay).await;
        }

        let file_url = form.file_url.clone();
        self.events
            .lock()
            .unwrap()
            .push(ApiEvent::Upload(form.attached_to_field.clone()));
        self.uploads.lock().unwrap().push(form);

        if self.failing_uploads {
            return Err(ClientError::Server {
                status: 413,
                exc_type: None,
                message: "Request Entity Too Large".to_string(),
            });
        }
        Ok(FrappeResponse::with_message(json!({ "file_url": file_url })))
    }
}

/// Navigator remembering every route and when it was opened.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<(String, Instant)>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn navigated_at(&self) -> Vec<Instant> {
        self.routes.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push((route.to_string(), Instant::now()));
    }
}

/// Notifier remembering every message shown.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn msgprint(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
