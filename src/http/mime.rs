//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Content type for `/favicon.ico`
pub const ICON: &str = "image/vnd.microsoft.icon";

/// Content type for `/robots.txt`
pub const TEXT_PLAIN: &str = "text/plain";

pub const HTML: &str = "text/html; charset=utf-8";
pub const JSON: &str = "application/json";

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use avatararts_site::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("css")), "text/css");
/// assert_eq!(get_content_type(Some("mp3")), "audio/mpeg");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => HTML,
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => JSON,
        Some("webmanifest") => "application/manifest+json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => ICON,
        Some("webp") => "image/webp",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        Some("pdf") => "application/pdf",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_asset_types() {
        assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("ico")), "image/vnd.microsoft.icon");
        assert_eq!(get_content_type(Some("flac")), "audio/flac");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }
}
