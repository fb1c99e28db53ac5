pub mod app_config;
pub mod config;
pub mod defaults;
pub mod product;
pub mod request;

pub use app_config::{AppConfig, StoreConfig};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use defaults::CatalogDefaults;
pub use product::{CanonicalProduct, SchemaVariant};
pub use request::{
    FilterRequest, ListQuery, PageRequest, SortField, SortKey, SortOrder, DEFAULT_PAGE_LIMIT,
    MAX_PAGE, MAX_PAGE_LIMIT,
};
