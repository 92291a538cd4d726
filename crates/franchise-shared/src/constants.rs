//! Application-wide constants

pub const FRANCHISES_COLLECTION: &str = "franchises";
pub const BRANCHES_COLLECTION: &str = "branches";
pub const PRODUCTS_COLLECTION: &str = "products";

pub const PROVIDER_POSTGRES: &str = "postgres";
pub const PROVIDER_MEMORY: &str = "memory";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_PREFIX: &str = "franchise-server.log";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
