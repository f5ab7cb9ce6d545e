//! Static images referenced by the page

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// `/logo.png` and everything under `/images/`, read from `public_dir`.
pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .route_service("/logo.png", ServeFile::new(public_dir.join("logo.png")))
        .nest_service("/images", ServeDir::new(public_dir.join("images")))
}
