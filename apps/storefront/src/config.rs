use core_config::{
    AppInfo, FromEnv, app_info, env_or_default, env_parse_optional, server::ServerConfig,
};
use std::path::PathBuf;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;
use domain_storefront::mongodb::PRODUCTS_COLLECTION;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Collection the product snapshot is read from
    pub products_collection: String,
    /// Fixed seed for the featured pick; random per request when unset
    pub featured_seed: Option<u64>,
    /// Directory holding `logo.png` and `images/`
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            products_collection: env_or_default("PRODUCTS_COLLECTION", PRODUCTS_COLLECTION),
            featured_seed: env_parse_optional("FEATURED_SEED")?,
            public_dir: PathBuf::from(env_or_default("PUBLIC_DIR", "public")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [(&str, Option<&str>); 2] = [
        ("MONGODB_URL", Some("mongodb://localhost:27017")),
        ("MONGODB_DATABASE", Some("coffee")),
    ];

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                REQUIRED[0],
                REQUIRED[1],
                ("PRODUCTS_COLLECTION", None),
                ("FEATURED_SEED", None),
                ("PUBLIC_DIR", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "storefront");
                assert_eq!(config.mongodb.database(), "coffee");
                assert_eq!(config.products_collection, "products");
                assert_eq!(config.featured_seed, None);
                assert_eq!(config.public_dir, PathBuf::from("public"));
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        temp_env::with_vars(
            [
                REQUIRED[0],
                REQUIRED[1],
                ("PRODUCTS_COLLECTION", Some("beans")),
                ("FEATURED_SEED", Some("42")),
                ("PUBLIC_DIR", Some("/srv/www")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.products_collection, "beans");
                assert_eq!(config.featured_seed, Some(42));
                assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
            },
        );
    }

    #[test]
    fn test_config_bad_seed_fails() {
        temp_env::with_vars(
            [REQUIRED[0], REQUIRED[1], ("FEATURED_SEED", Some("lucky"))],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("FEATURED_SEED"));
            },
        );
    }

    #[test]
    fn test_config_missing_mongo_url_fails() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", Some("coffee")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
