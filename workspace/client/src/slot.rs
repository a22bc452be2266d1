use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{DatasetSlot, FileUploadForm, ServerResponse};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::api::FrappeApi;
use crate::error::{ClientError, Result};

/// Label of a slot without a file
pub const NO_FILE_SELECTED: &str = "No file selected";

/// A dataset file picked on the local machine.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Read a file from disk, keeping only its base name.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ClientError::Validation(format!("'{}' is not a file", path.display())))?;

        let content = tokio::fs::read(path).await?;
        debug!("Read {} ({} bytes)", name, content.len());
        Ok(Self::new(name, content))
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Progress of a best-effort upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Pending,
    Uploaded { file_url: Option<String> },
    Failed { reason: String },
}

impl UploadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, UploadStatus::Pending)
    }
}

/// Observable handle on the upload task of one slot.
///
/// The task runs to completion on its own; dropping the handle neither
/// cancels it nor waits for it.
#[derive(Debug, Clone)]
pub struct UploadHandle {
    slot: DatasetSlot,
    file_name: String,
    started_at: DateTime<Utc>,
    status: watch::Receiver<UploadStatus>,
}

impl UploadHandle {
    /// Start uploading `file` for `slot` on the current tokio runtime.
    pub fn spawn(api: Arc<dyn FrappeApi>, slot: DatasetSlot, file: LocalFile) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            error!("No runtime to upload {} on: {}", file.name, e);
            ClientError::from(e)
        })?;
        let (sender, receiver) = watch::channel(UploadStatus::Pending);
        let file_name = file.name.clone();
        let form = FileUploadForm::for_slot(slot, file.name, file.content);

        runtime.spawn(async move {
            let status = match api.upload(form).await {
                Ok(response) if response.is_success() => {
                    let reply = ServerResponse::from(&response);
                    info!("File uploaded successfully: {:?}", reply.file_url);
                    UploadStatus::Uploaded {
                        file_url: reply.file_url,
                    }
                }
                Ok(response) => {
                    error!("Error in response: {:?}", response);
                    UploadStatus::Failed {
                        reason: "the site did not acknowledge the upload".to_string(),
                    }
                }
                Err(e) => {
                    error!("Error uploading file: {}", e);
                    UploadStatus::Failed { reason: e.to_string() }
                }
            };
            // Nobody may be watching any more.
            let _ = sender.send(status);
        });

        Ok(Self {
            slot,
            file_name,
            started_at: Utc::now(),
            status: receiver,
        })
    }

    pub fn slot(&self) -> DatasetSlot {
        self.slot
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current status without waiting.
    pub fn status(&self) -> UploadStatus {
        self.status.borrow().clone()
    }

    /// Wait until the upload finished.
    pub async fn wait(&self) -> UploadStatus {
        let mut receiver = self.status.clone();
        let finished = receiver
            .wait_for(|status| !status.is_pending())
            .await
            .map(|status| status.clone());

        match finished {
            Ok(status) => status,
            Err(_) => {
                warn!(
                    "Upload task for {} ended without reporting a result",
                    self.file_name
                );
                UploadStatus::Failed {
                    reason: "upload task ended without reporting a result".to_string(),
                }
            }
        }
    }
}

/// Contents of one of the five upload slots.
#[derive(Debug, Clone, Default)]
pub enum SlotState {
    #[default]
    Empty,
    Selected { file_name: String, upload: UploadHandle },
}

impl SlotState {
    /// Text shown next to the slot's file input.
    pub fn label(&self) -> &str {
        match self {
            SlotState::Empty => NO_FILE_SELECTED,
            SlotState::Selected { file_name, .. } => file_name,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            SlotState::Empty => None,
            SlotState::Selected { file_name, .. } => Some(file_name),
        }
    }

    pub fn upload(&self) -> Option<&UploadHandle> {
        match self {
            SlotState::Empty => None,
            SlotState::Selected { upload, .. } => Some(upload),
        }
    }
}
