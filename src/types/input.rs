//! Submitted case materials

use serde::{Deserialize, Serialize};

use crate::types::PostureSelection;
use crate::EngineError;

/// Attachment metadata. File contents are never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    /// MIME type, e.g. "application/pdf"
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Descriptor for a file path, typed from its extension
    pub fn from_path(path: &str) -> Self {
        let name = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();
        let mime_type = if name.to_ascii_lowercase().ends_with(".pdf") {
            "application/pdf"
        } else {
            "application/octet-stream"
        };
        Self::new(name, mime_type)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == "application/pdf"
    }
}

/// One submission to the analysis pipeline. Immutable once submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationInput {
    pub text: String,
    pub title: String,
    pub files: Vec<FileDescriptor>,
    pub docket: Option<String>,
    pub posture: PostureSelection,
}

impl ClassificationInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into().trim().to_string();
        self
    }

    pub fn with_files(mut self, files: Vec<FileDescriptor>) -> Self {
        self.files = files;
        self
    }

    pub fn with_docket(mut self, docket: impl Into<String>) -> Self {
        let docket = docket.into().trim().to_string();
        self.docket = if docket.is_empty() { None } else { Some(docket) };
        self
    }

    pub fn with_posture(mut self, posture: PostureSelection) -> Self {
        self.posture = posture;
        self
    }

    pub fn docket(&self) -> &str {
        self.docket.as_deref().unwrap_or("")
    }

    /// Text, title and docket with surrounding whitespace removed
    pub fn trimmed(self) -> Self {
        let docket = self.docket.unwrap_or_default();
        Self {
            text: self.text.trim().to_string(),
            title: self.title.trim().to_string(),
            files: self.files,
            docket: None,
            posture: self.posture,
        }
        .with_docket(docket)
    }

    /// Reject submissions with no text, no files and no docket
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.text.trim().is_empty() && self.files.is_empty() && self.docket().trim().is_empty() {
            return Err(EngineError::MissingInput);
        }
        Ok(())
    }
}
