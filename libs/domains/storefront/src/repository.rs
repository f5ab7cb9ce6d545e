use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// Read access to the product collection.
///
/// The storefront only ever reads one full snapshot per request, so the
/// interface is a single unfiltered fetch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product document, in whatever order the store returns them
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;
}
