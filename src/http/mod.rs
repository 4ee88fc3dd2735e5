//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from page and API logic.

pub mod cache;
pub mod mime;
pub mod response;

pub use cache::CachePolicy;
pub use response::{
    apply_common_headers, build_304_response, build_405_response, build_413_response,
    build_500_response, build_file_response, build_html_response, build_options_response,
    strip_body,
};
