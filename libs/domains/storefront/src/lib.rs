//! Storefront Domain
//!
//! Everything behind the coffee storefront landing page: the product
//! snapshot read from MongoDB, the per-request data loader, the view-state
//! machine that picks a featured product, and the HTML it renders to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET / (HTML), GET /index.json (page props)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← one load + one featured draw per request
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Loader    │ ──▶ │ View/Render │  ← PageProps → PageView → Markup
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← find-all (trait + MongoDB implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_storefront::{handlers, MongoProductRepository, StorefrontService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("coffee");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = StorefrontService::new(repository);
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod mongodb;
pub mod render;
pub mod repository;
pub mod service;
pub mod view;

pub use error::{CatalogError, CatalogResult};
pub use loader::{load_page_props, to_transfer, PageProps, UNAVAILABLE_MESSAGE};
pub use models::Product;
pub use self::mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::StorefrontService;
pub use view::{FeaturedSelector, PageView};
