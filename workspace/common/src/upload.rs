use crate::dataset::DatasetSlot;

/// Folder uploaded datasets are filed under.
pub const UPLOAD_FOLDER: &str = "Home/Attachments";

/// Multipart form accepted by Frappe's generic `upload_file` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadForm {
    pub file: Vec<u8>,
    pub file_name: String,
    pub file_size: u64,
    pub attached_to_field: String,
    pub file_url: String,
    pub folder: String,
    pub is_private: bool,
}

impl FileUploadForm {
    /// Private upload of a dataset file selected for `slot`.
    pub fn for_slot(slot: DatasetSlot, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            file_size: content.len() as u64,
            file: content,
            attached_to_field: slot.field_tag().to_string(),
            file_url: format!("/private/files/{}", file_name),
            folder: UPLOAD_FOLDER.to_string(),
            is_private: true,
            file_name,
        }
    }

    /// Text fields in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("file_name", self.file_name.clone()),
            ("file_size", self.file_size.to_string()),
            ("attached_to_field", self.attached_to_field.clone()),
            ("file_url", self.file_url.clone()),
            ("folder", self.folder.clone()),
            ("is_private", u8::from(self.is_private).to_string()),
        ]
    }
}
