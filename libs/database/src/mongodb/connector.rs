use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Parse the connection string and apply pool and timeout settings.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| DatabaseError::ConfigError(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client without contacting the server.
///
/// The driver connects lazily on first use, so a server that is down at
/// startup surfaces as a failed operation later instead of a startup error.
///
/// ```ignore
/// use database::mongodb::{MongoConfig, client_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "coffee");
/// let client = client_from_config(&config).await?;
/// ```
pub async fn client_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    info!(url = %config.redacted_url(), "MongoDB client configured");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_apply_config() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "coffee")
            .with_app_name("storefront")
            .with_pool_size(8, 1)
            .with_server_selection_timeout(2);

        let options = client_options(&config).await.unwrap();
        assert_eq!(options.max_pool_size, Some(8));
        assert_eq!(options.min_pool_size, Some(1));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(2)));
        assert_eq!(options.app_name.as_deref(), Some("storefront"));
    }

    #[tokio::test]
    async fn test_client_options_reject_invalid_url() {
        let config = MongoConfig::new("postgres://localhost:5432");
        let err = client_options(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_client_from_config_does_not_contact_server() {
        // Nothing listens on this port; construction must still succeed.
        let config = MongoConfig::with_database("mongodb://127.0.0.1:1", "coffee");
        assert!(client_from_config(&config).await.is_ok());
    }
}
