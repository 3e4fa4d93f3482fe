use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kind::{classify, FileKind};

/// Opaque identifier for a project file.
///
/// Stable for the file's lifetime and never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(pub(crate) u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single project file: name plus content.
///
/// The kind is never stored — it is recomputed from the name on demand, so a
/// rename can never leave a stale kind behind. Image files keep their content
/// as a data URL string; all other kinds hold plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: FileId,
    pub name: String,
    pub content: String,
}

impl ProjectFile {
    /// The kind derived from the current name
    pub fn kind(&self) -> FileKind {
        classify(&self.name)
    }

    /// Returns true if this file currently classifies as an image
    pub fn is_image(&self) -> bool {
        self.kind() == FileKind::Image
    }
}
