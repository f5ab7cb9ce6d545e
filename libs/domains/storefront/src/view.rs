//! Page view selection.
//!
//! [`PageView`] is decided purely by the shape of [`PageProps`]. The only
//! state carried between renders is the featured pick, which is drawn once
//! per product sequence and reused while that same sequence is rendered.

use rand::Rng;
use std::sync::Arc;

use crate::loader::PageProps;
use crate::models::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// No props yet
    Loading,
    Error(String),
    Empty,
    Ready {
        products: Arc<[Product]>,
        /// Always a valid index into `products`
        featured: usize,
    },
}

impl PageView {
    pub fn featured_product(&self) -> Option<&Product> {
        match self {
            PageView::Ready { products, featured } => products.get(*featured),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageView::Loading => "loading",
            PageView::Error(_) => "error",
            PageView::Empty => "empty",
            PageView::Ready { .. } => "ready",
        }
    }
}

/// Holds the featured index for the sequence it was drawn for.
///
/// The random source is injected so tests can seed it. A draw only happens
/// when the sequence handed in is not the one already held (compared by
/// `Arc` identity, not contents).
pub struct FeaturedSelector<R> {
    rng: R,
    current: Option<(Arc<[Product]>, usize)>,
}

impl<R: Rng> FeaturedSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, current: None }
    }

    /// Featured index for `products`, or `None` when it is empty.
    pub fn select(&mut self, products: &Arc<[Product]>) -> Option<usize> {
        if products.is_empty() {
            return None;
        }

        if let Some((held, index)) = &self.current {
            if Arc::ptr_eq(held, products) {
                return Some(*index);
            }
        }

        let index = self.rng.random_range(0..products.len());
        self.current = Some((Arc::clone(products), index));
        Some(index)
    }

    /// Decide the view for `props`.
    ///
    /// Order matters: an error wins over data, missing data means loading,
    /// and an empty list never reaches the draw.
    pub fn view(&mut self, props: &PageProps) -> PageView {
        if let Some(message) = &props.error {
            return PageView::Error(message.clone());
        }

        let Some(products) = &props.data else {
            return PageView::Loading;
        };

        match self.select(products) {
            Some(featured) => PageView::Ready {
                products: Arc::clone(products),
                featured,
            },
            None => PageView::Empty,
        }
    }
}
