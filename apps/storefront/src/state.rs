//! Application state management.
//!
//! The state contains:
//! - Configuration
//! - MongoDB client and database handle

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into each router (inexpensive Arc clones inside the driver).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        Self {
            config,
            mongo_client,
            db,
        }
    }
}
