//! # Webpad — multi-file playground compilation core
//!
//! The headless core of an in-browser code playground: a set of in-memory
//! files of mixed kinds (markup, style, script, binary image) is composed
//! deterministically into a single executable HTML document, with image file
//! names substituted by their embedded data URLs.
//!
//! ## Features
//! - In-memory file store with stable ids and a unique-name policy
//! - Name-derived kind classification (markup / style / script / image / plain)
//! - Literal image-reference substitution, longest name first
//! - One compiler shared by every output sink — preview, export, new window
//! - Guarded script execution so a user-script fault logs instead of blanking
//!   the page
//!
//! ## Example — compile and export a project
//! ```
//! use webpad::{export_artifact, FileStore};
//!
//! let mut store = FileStore::seed_project();
//! let id = store.find_by_name("index.html").unwrap().id;
//! store.update_content(id, "<h1>Hi</h1>").unwrap();
//!
//! let artifact = export_artifact(store.files());
//! assert_eq!(artifact.name, "project.html");
//! assert!(artifact.content.contains("<h1>Hi</h1>"));
//! ```
//!
//! ## Example — embed an image
//! ```
//! use webpad::{preview_source, FileStore};
//!
//! let mut store = FileStore::seed_project();
//! let id = store.find_by_name("index.html").unwrap().id;
//! store.update_content(id, "<img src=dot.png>").unwrap();
//! store.ingest_image("dot.png", &[0, 0, 0]).unwrap();
//!
//! let doc = preview_source(store.files());
//! assert!(doc.contains("<img src=data:image/png;base64,AAAA>"));
//! ```

pub mod compiler;
pub mod error;
pub mod file;
pub mod image;
pub mod import;
pub mod kind;
pub mod resolver;
pub mod sinks;
pub mod store;

// --- Core types ---
pub use compiler::{compile, CompileMode};
pub use error::{WebpadError, WebpadResult};
pub use file::{FileId, ProjectFile};
pub use import::{import_document, ImportOutcome};
pub use kind::{classify, FileKind};
pub use resolver::resolve_references;
pub use sinks::{export_artifact, preview_source, window_document, Artifact, EXPORT_FILE_NAME};
pub use store::FileStore;
