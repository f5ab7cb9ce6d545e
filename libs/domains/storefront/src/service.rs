//! Storefront Service - one page load per request

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::instrument;

use crate::loader::{load_page_props, PageProps};
use crate::repository::ProductRepository;
use crate::view::{FeaturedSelector, PageView};

/// Ties the loader to the view state machine.
///
/// Holds no per-request state: every call gets its own load and its own
/// random source, so the service can be shared freely between requests.
pub struct StorefrontService<R: ProductRepository> {
    repository: Arc<R>,
    featured_seed: Option<u64>,
}

impl<R: ProductRepository> StorefrontService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            featured_seed: None,
        }
    }

    /// Seed every request's random source with `seed`.
    ///
    /// With a seed the featured pick is reproducible for a given product
    /// sequence.
    pub fn with_featured_seed(mut self, seed: Option<u64>) -> Self {
        self.featured_seed = seed;
        self
    }

    /// Page props in transfer form
    pub async fn load_props(&self) -> PageProps {
        load_page_props(self.repository.as_ref()).await
    }

    /// Load the snapshot and decide the view for the home page.
    #[instrument(skip(self))]
    pub async fn home_view(&self) -> PageView {
        let props = self.load_props().await;
        let mut selector = FeaturedSelector::new(self.rng());
        let view = selector.view(&props);
        tracing::debug!(view = view.name(), "Selected storefront view");
        view
    }

    fn rng(&self) -> StdRng {
        match self.featured_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl<R: ProductRepository> Clone for StorefrontService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            featured_seed: self.featured_seed,
        }
    }
}
