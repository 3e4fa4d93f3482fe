use base64::{engine::general_purpose, Engine};

/// Fallback MIME type for image names with an unrecognized extension
const OCTET_STREAM: &str = "application/octet-stream";

/// Encode binary image data as a self-describing data URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// Returns true if the string is a data URL
pub fn is_data_url(s: &str) -> bool {
    s.starts_with("data:")
}

/// MIME type for an image file name, derived from its extension
pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// MIME type for an image file name, falling back to octet-stream
pub fn mime_for_name_or_default(name: &str) -> &'static str {
    mime_for_name(name).unwrap_or(OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("image/png", &[0, 0, 0]), "data:image/png;base64,AAAA");
        assert_eq!(to_data_url("image/gif", b""), "data:image/gif;base64,");
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,AAAA"));
        assert!(!is_data_url("cat.png"));
        assert!(!is_data_url(""));
    }

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("cat.png"), Some("image/png"));
        assert_eq!(mime_for_name("cat.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_name("icon.svg"), Some("image/svg+xml"));
        assert_eq!(mime_for_name("notes.txt"), None);
        assert_eq!(mime_for_name_or_default("mystery"), "application/octet-stream");
    }
}
