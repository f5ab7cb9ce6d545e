//! HTTP handlers for the storefront page

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::loader::PageProps;
use crate::render::render_page;
use crate::repository::ProductRepository;
use crate::service::StorefrontService;

/// The snapshot is read fresh on every request; nothing downstream may
/// keep a copy.
const NO_STORE: [(header::HeaderName, &str); 1] = [(header::CACHE_CONTROL, "no-store")];

/// Create the storefront router
///
/// - `GET /` renders the landing page
/// - `GET /index.json` returns the props the page is rendered from
pub fn router<R: ProductRepository + 'static>(service: StorefrontService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(home_page))
        .route("/index.json", get(page_props))
        .with_state(shared_service)
}

/// Landing page, whatever the view. Failures render as the error notice
/// with a 200 status.
async fn home_page<R: ProductRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
) -> impl IntoResponse {
    let view = service.home_view().await;
    (NO_STORE, Html(render_page(&view).into_string()))
}

async fn page_props<R: ProductRepository>(
    State(service): State<Arc<StorefrontService<R>>>,
) -> impl IntoResponse {
    let props: PageProps = service.load_props().await;
    (NO_STORE, Json(props))
}
