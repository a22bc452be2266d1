use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body Frappe returns from `/api/method/*`.
///
/// Successful calls carry `message`; failed ones carry the exception fields
/// and, usually, a JSON-encoded list of `_server_messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrappeResponse {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(default, rename = "_server_messages", skip_serializing_if = "Option::is_none")]
    pub server_messages: Option<String>,
}

impl FrappeResponse {
    pub fn with_message(message: impl Into<Value>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Whether `message` is present and truthy in the JavaScript sense.
    pub fn is_success(&self) -> bool {
        self.message.as_ref().is_some_and(is_truthy)
    }

    /// `message.file_url`, as returned by the file ingestion endpoint.
    pub fn file_url(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(|message| message.get("file_url"))
            .and_then(Value::as_str)
    }

    /// Human readable texts of `_server_messages`.
    ///
    /// Frappe double-encodes them: a JSON array of JSON objects, each with a
    /// `message` field. Entries that do not decode are returned verbatim.
    pub fn server_message_texts(&self) -> Vec<String> {
        let Some(raw) = self.server_messages.as_deref() else {
            return Vec::new();
        };

        let Ok(entries) = serde_json::from_str::<Vec<String>>(raw) else {
            return vec![raw.to_string()];
        };

        entries
            .into_iter()
            .map(|entry| {
                serde_json::from_str::<Value>(&entry)
                    .ok()
                    .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                    .unwrap_or(entry)
            })
            .collect()
    }
}

/// What the client keeps from a server reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    pub success: bool,
    pub message: Option<String>,
    pub file_url: Option<String>,
}

impl From<&FrappeResponse> for ServerResponse {
    fn from(response: &FrappeResponse) -> Self {
        let message = match &response.message {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        Self {
            success: response.is_success(),
            message,
            file_url: response.file_url().map(str::to_string),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        // Arrays and objects are truthy in JavaScript even when empty.
        Value::Array(_) | Value::Object(_) => true,
    }
}
