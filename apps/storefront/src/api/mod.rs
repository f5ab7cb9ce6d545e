//! HTTP routes for the storefront app

pub mod assets;
pub mod health;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_storefront::{MongoProductRepository, StorefrontService, handlers};

use crate::state::AppState;

/// Page, readiness and static asset routes
pub fn routes(state: &AppState) -> Router {
    let repository =
        MongoProductRepository::with_collection(&state.db, &state.config.products_collection);
    let service =
        StorefrontService::new(repository).with_featured_seed(state.config.featured_seed);

    Router::new()
        .merge(handlers::router(service))
        .merge(health::router(state.clone()))
        .merge(assets::router(&state.config.public_dir))
}

/// The complete app: routes plus `/health`, wrapped in the shared layers
pub fn app(state: &AppState) -> Router {
    create_router(routes(state).merge(health_router(state.config.app)))
}
