use std::path::Path;

use serde::{Deserialize, Serialize};

/// A reference to an uploaded file. Only the file name is tracked; the
/// contents never pass through the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub file_name: String,
}

impl DocumentRef {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Lowercased extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(self.file_name.trim())
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// The kinds of document the wizard accepts, each with its own whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PassportCopy,
    ReservedTradeName,
}

impl DocumentKind {
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::PassportCopy => &["pdf", "jpg", "jpeg", "png"],
            Self::ReservedTradeName => &["pdf", "doc", "docx"],
        }
    }

    pub fn accepts(
        &self,
        document: &DocumentRef,
    ) -> bool {
        document
            .extension()
            .is_some_and(|ext| self.allowed_extensions().contains(&ext.as_str()))
    }
}
