//! Per-request data loading.
//!
//! One fetch, one JSON round trip into the transfer form, and every failure
//! folded into a single generic marker. Nothing here retries.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// The only error text a visitor ever sees.
pub const UNAVAILABLE_MESSAGE: &str = "no response from data-base";

/// What the loader hands to the renderer, and what `/index.json` returns.
///
/// - `error` set: loading failed
/// - `data` set: the snapshot, possibly empty
/// - neither: nothing has arrived yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Arc<[Product]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageProps {
    pub fn products(products: Vec<Product>) -> Self {
        Self {
            data: Some(products.into()),
            error: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            data: None,
            error: Some(UNAVAILABLE_MESSAGE.to_string()),
        }
    }

    /// No data yet, as before the first response arrives
    pub fn pending() -> Self {
        Self::default()
    }
}

/// Serialize the snapshot to JSON and read it back.
///
/// This is the plain form that crosses from loader to renderer. Values that
/// JSON cannot carry (a NaN price, for one) fail here.
pub fn to_transfer(products: &[Product]) -> CatalogResult<Vec<Product>> {
    let json = serde_json::to_string(products)?;
    Ok(serde_json::from_str(&json)?)
}

async fn fetch_transferable<R>(repository: &R) -> CatalogResult<Vec<Product>>
where
    R: ProductRepository + ?Sized,
{
    let documents = repository.find_all().await?;
    to_transfer(&documents)
}

/// Load the page props for one request.
///
/// Never fails: the underlying error is logged and replaced with
/// [`PageProps::unavailable`].
#[instrument(skip(repository))]
pub async fn load_page_props<R>(repository: &R) -> PageProps
where
    R: ProductRepository + ?Sized,
{
    match fetch_transferable(repository).await {
        Ok(products) => {
            tracing::debug!(count = products.len(), "Loaded storefront products");
            PageProps::products(products)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load storefront products");
            PageProps::unavailable()
        }
    }
}
