use serde::{Deserialize, Serialize};

use crate::error::{WebpadError, WebpadResult};
use crate::file::{FileId, ProjectFile};
use crate::image::{is_data_url, mime_for_name_or_default, to_data_url};
use crate::kind::is_image_name;

/// The authoritative in-memory collection of project files.
///
/// Owns every file record; other components only ever see `&[ProjectFile]`
/// snapshots for a single compilation pass. Ids are allocated from a
/// monotonically increasing counter and never reused. File names are unique
/// within a store — duplicates are rejected on add and rename, which keeps
/// name lookups and image-reference substitution unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileStore {
    files: Vec<ProjectFile>,
    next_id: u64,
}

impl FileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the canonical three-file project
    pub fn seed_project() -> Self {
        let mut store = Self::new();
        store.push_file("index.html".to_string(), "<!-- HTML goes here -->".to_string());
        store.push_file("style.css".to_string(), "/* CSS goes here */".to_string());
        store.push_file("script.js".to_string(), "// JS goes here".to_string());
        store
    }

    // ─── Lookups ─────────────────────────────────────────────────────────────

    /// Snapshot of all files in set order
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: FileId) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FileId) -> Option<&mut ProjectFile> {
        self.files.iter_mut().find(|f| f.id == id)
    }

    /// Find a file by exact name. Unambiguous because names are unique.
    pub fn find_by_name(&self, name: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.name == name)
    }

    // ─── Mutations ───────────────────────────────────────────────────────────

    /// Add a text file. The name is trimmed; empty or duplicate names are
    /// rejected. Returns the new file's id.
    pub fn add_file(&mut self, name: &str, content: &str) -> WebpadResult<FileId> {
        let name = self.validate_new_name(name)?;
        Ok(self.push_file(name, content.to_string()))
    }

    /// Add an image file whose content is already a data URL.
    ///
    /// The name must classify as an image and the content must be a data URL;
    /// anything else would break the image-content invariant.
    pub fn add_image(&mut self, name: &str, data_url: &str) -> WebpadResult<FileId> {
        let name = self.validate_new_name(name)?;
        if !is_image_name(&name) || !is_data_url(data_url) {
            return Err(WebpadError::NotAnImage { name });
        }
        Ok(self.push_file(name, data_url.to_string()))
    }

    /// Add an image file from raw bytes, encoding them as a data URL with a
    /// MIME type derived from the file name.
    pub fn ingest_image(&mut self, name: &str, bytes: &[u8]) -> WebpadResult<FileId> {
        let trimmed = name.trim();
        let data_url = to_data_url(mime_for_name_or_default(trimmed), bytes);
        self.add_image(trimmed, &data_url)
    }

    /// Rename a file. The new name is trimmed; empty names, names already
    /// taken by another file, and image names for non-data-URL content are
    /// rejected. Renaming to the current name is a no-op. The file's kind
    /// follows the new name automatically.
    pub fn rename(&mut self, id: FileId, new_name: &str) -> WebpadResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(WebpadError::EmptyName);
        }
        let current = self.get(id).ok_or(WebpadError::FileNotFound { id })?;
        if current.name == new_name {
            return Ok(());
        }
        if self.find_by_name(new_name).is_some() {
            return Err(WebpadError::DuplicateName {
                name: new_name.to_string(),
            });
        }
        // A file cannot take an image name unless its content already is a
        // data URL, otherwise the image-content invariant would break
        if is_image_name(new_name) && !is_data_url(&current.content) {
            return Err(WebpadError::NotAnImage {
                name: new_name.to_string(),
            });
        }
        // Lookup cannot fail here, the id was checked above
        if let Some(file) = self.get_mut(id) {
            file.name = new_name.to_string();
        }
        Ok(())
    }

    /// Replace a file's content in place
    pub fn update_content(&mut self, id: FileId, content: &str) -> WebpadResult<()> {
        let file = self.get_mut(id).ok_or(WebpadError::FileNotFound { id })?;
        file.content = content.to_string();
        Ok(())
    }

    /// Delete a file. Blocked when it is the only file left, so an initialized
    /// project can never become empty.
    pub fn delete(&mut self, id: FileId) -> WebpadResult<()> {
        let index = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or(WebpadError::FileNotFound { id })?;
        if self.files.len() == 1 {
            return Err(WebpadError::LastFile);
        }
        self.files.remove(index);
        Ok(())
    }

    // ─── Internal ────────────────────────────────────────────────────────────

    fn validate_new_name(&self, name: &str) -> WebpadResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WebpadError::EmptyName);
        }
        if self.find_by_name(name).is_some() {
            return Err(WebpadError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(name.to_string())
    }

    fn push_file(&mut self, name: String, content: String) -> FileId {
        self.next_id += 1;
        let id = FileId(self.next_id);
        self.files.push(ProjectFile { id, name, content });
        id
    }
}
