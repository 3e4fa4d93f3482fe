use serde::{Deserialize, Serialize};

use crate::compiler::{compile, CompileMode};
use crate::file::ProjectFile;

/// Fixed name of the exported project file
pub const EXPORT_FILE_NAME: &str = "project.html";

/// MIME type of every compiled document
pub const HTML_MIME: &str = "text/html";

/// A compiled document packaged for delivery outside the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub mime: String,
    pub content: String,
}

/// Document source for the sandboxed live preview.
///
/// The caller assigns this to an isolated frame's source-document attribute,
/// so the project's script runs confined and cannot reach host state.
pub fn preview_source(files: &[ProjectFile]) -> String {
    compile(files, CompileMode::Preview)
}

/// The downloadable export: the compiled document under the fixed
/// `project.html` name with embedded images inlined as data URLs.
pub fn export_artifact(files: &[ProjectFile]) -> Artifact {
    Artifact {
        name: EXPORT_FILE_NAME.to_string(),
        mime: HTML_MIME.to_string(),
        content: compile(files, CompileMode::Export),
    }
}

/// Full-boilerplate document for opening in a new top-level browsing context
pub fn window_document(files: &[ProjectFile]) -> String {
    compile(files, CompileMode::Export)
}
