use serde::{Deserialize, Serialize};

/// Extensions that classify a file as an image, matched case-insensitively
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico"];

/// The coarse content category of a file, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Markup,
    Style,
    Script,
    Image,
    Plain,
}

/// Classify a file name into a kind.
///
/// Image extensions take precedence over everything else and are matched
/// case-insensitively; the `.html`/`.css`/`.js` suffix checks are exact.
/// Total — every name maps to exactly one kind.
pub fn classify(name: &str) -> FileKind {
    if is_image_name(name) {
        FileKind::Image
    } else if name.ends_with(".html") {
        FileKind::Markup
    } else if name.ends_with(".css") {
        FileKind::Style
    } else if name.ends_with(".js") {
        FileKind::Script
    } else {
        FileKind::Plain
    }
}

/// Returns true if the name carries an image extension
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
