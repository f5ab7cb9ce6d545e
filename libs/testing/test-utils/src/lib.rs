//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the domain crates:
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Features
//!
//! - `mongo` (default): Enables MongoDB test infrastructure
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database(&builder.name("db", "main"));
//!     let product = builder.product_document("latte", 4.5);
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_list_products");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("product", "latte"), "test-product-12345-latte");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Deterministic product identifier, unique per builder and suffix
    pub fn product_id(&self, suffix: &str) -> String {
        format!("{:016x}-{}", self.seed, suffix)
    }

    /// Price in whole cents derived from the seed, between $1.00 and $9.99
    pub fn price(&self, index: u64) -> f64 {
        let cents = 100 + (self.seed.wrapping_add(index.wrapping_mul(7919)) % 900);
        cents as f64 / 100.0
    }

    /// A product document with a string `_id`, ready to insert
    #[cfg(feature = "mongo")]
    pub fn product_document(&self, suffix: &str, price: f64) -> mongodb::bson::Document {
        mongodb::bson::doc! {
            "_id": self.product_id(suffix),
            "name": self.name("product", suffix),
            "price": price,
        }
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that two id lists hold the same ids, ignoring order
    pub fn assert_same_ids(actual: &[String], expected: &[String], context: &str) {
        let mut actual = actual.to_vec();
        let mut expected = expected.to_vec();
        actual.sort();
        expected.sort();
        assert_eq!(
            actual, expected,
            "{}: expected ids {:?}, got {:?}",
            context, expected, actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.product_id("a"), builder2.product_id("a"));
        assert_eq!(
            builder1.name("product", "test"),
            builder2.name("product", "test")
        );
        assert_eq!(builder1.price(3), builder2.price(3));
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.seed(), builder2.seed());
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.product_id("a"), builder2.product_id("a"));
    }

    #[test]
    fn test_price_is_in_range() {
        let builder = TestDataBuilder::from_test_name("prices");
        for index in 0..100 {
            let price = builder.price(index);
            assert!((1.0..10.0).contains(&price), "price {price} out of range");
        }
    }

    #[test]
    fn test_assert_same_ids_ignores_order() {
        let a = vec!["x".to_string(), "y".to_string()];
        let b = vec!["y".to_string(), "x".to_string()];
        assertions::assert_same_ids(&a, &b, "order");
    }

    #[cfg(feature = "mongo")]
    #[test]
    fn test_product_document_shape() {
        let builder = TestDataBuilder::new(7);
        let document = builder.product_document("latte", 4.5);

        assert_eq!(document.get_str("_id").unwrap(), builder.product_id("latte"));
        assert_eq!(document.get_f64("price").unwrap(), 4.5);
        assert!(!document.contains_key("description"));
    }
}
