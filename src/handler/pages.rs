//! HTML page handlers
//!
//! Each page fetches the catalog data it shows, renders its template and
//! returns the result. Missing data never fails a page.

use askama::Template;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::{fetch, SiteError};
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::templates::{
    AboutTemplate, CollectionTemplate, ContactTemplate, IndexTemplate, Layout, NotFoundTemplate,
    ServerErrorTemplate, TechInfo, TechnologyTemplate,
};

type PageResult = Result<Response<Full<Bytes>>, SiteError>;

pub async fn index(state: &AppState) -> PageResult {
    let (collection, insights) = tokio::join!(fetch::collection(state), fetch::insights(state));
    render(
        StatusCode::OK,
        &IndexTemplate {
            layout: Layout::new(&state.config, "home"),
            collection,
            insights,
        },
    )
}

pub async fn about(state: &AppState) -> PageResult {
    render(
        StatusCode::OK,
        &AboutTemplate {
            layout: Layout::new(&state.config, "about"),
            collection: fetch::collection(state).await,
        },
    )
}

pub async fn collection(state: &AppState) -> PageResult {
    let (collection, insights) = tokio::join!(fetch::collection(state), fetch::insights(state));
    render(
        StatusCode::OK,
        &CollectionTemplate {
            layout: Layout::new(&state.config, "collection"),
            collection,
            insights,
        },
    )
}

pub async fn technology(state: &AppState) -> PageResult {
    render(
        StatusCode::OK,
        &TechnologyTemplate {
            layout: Layout::new(&state.config, "technology"),
            collection: fetch::collection(state).await,
            tech_info: TechInfo::current(),
        },
    )
}

pub async fn contact(state: &AppState) -> PageResult {
    render(
        StatusCode::OK,
        &ContactTemplate {
            layout: Layout::new(&state.config, "contact"),
            collection: fetch::collection(state).await,
        },
    )
}

pub async fn not_found(state: &AppState) -> PageResult {
    render(
        StatusCode::NOT_FOUND,
        &NotFoundTemplate {
            layout: Layout::new(&state.config, ""),
            collection: fetch::collection(state).await,
        },
    )
}

/// Render the 500 page for `error`
///
/// The error text is only shown in debug mode. Falls back to a plain-text
/// response if the page itself cannot be rendered. After a failed route task
/// the catalog is not consulted again.
pub async fn server_error(state: &AppState, error: &SiteError) -> Response<Full<Bytes>> {
    let collection = match error {
        SiteError::Task(_) => None,
        _ => fetch::collection(state).await,
    };
    let page = ServerErrorTemplate {
        layout: Layout::new(&state.config, ""),
        collection,
        detail: state.config.site.debug.then(|| error.to_string()),
    };
    render(StatusCode::INTERNAL_SERVER_ERROR, &page).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to render error page: {e}"));
        http::build_500_response()
    })
}

fn render<T: Template>(status: StatusCode, page: &T) -> PageResult {
    let html = page.render()?;
    Ok(http::build_html_response(status, html)?)
}
