//! AvatarArts website
//!
//! Marketing site for the AvatarArts music catalog: five HTML pages, two
//! JSON statistics endpoints, a health check and a few static files, served
//! by hyper on tokio.

pub mod api;
pub mod catalog;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod templates;
