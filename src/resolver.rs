use regex::{NoExpand, Regex};

use crate::file::ProjectFile;

/// Substitute image file names with their embedded data URLs.
///
/// Every literal occurrence of an image file's name anywhere in `content` is
/// replaced with that file's data-URL content. Names are escaped before being
/// compiled as patterns, so metacharacters in a file name (`a+b.png`) match
/// literally. Image files are processed longest name first, so a short name
/// can never rewrite part of a longer name that contains it (`a.png` inside
/// `banana.png`). Text with no image-name occurrences passes through
/// unchanged, and an empty file set degenerates to exact pass-through.
pub fn resolve_references(content: &str, files: &[ProjectFile]) -> String {
    let mut images: Vec<&ProjectFile> = files.iter().filter(|f| f.is_image()).collect();
    // Stable sort: ties keep set order
    images.sort_by(|a, b| b.name.len().cmp(&a.name.len()));

    let mut resolved = content.to_string();
    for image in images {
        if !resolved.contains(image.name.as_str()) {
            continue;
        }
        let pattern = Regex::new(&regex::escape(&image.name))
            .expect("escaped file name is a valid literal pattern");
        resolved = pattern
            .replace_all(&resolved, NoExpand(&image.content))
            .into_owned();
    }
    resolved
}
