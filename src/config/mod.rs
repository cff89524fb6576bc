mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{
    Config, DEFAULT_DELIMITER, DEFAULT_EXTENSION, DEFAULT_FUND_PATTERN, DEFAULT_INVENTORY_PATTERN,
    DEFAULT_NUMBER_LENGTH, DEFAULT_UNIT_PATTERN, ImagesConfig, LogConfig, NamingConfig,
    SourceConfig,
};
pub use validation::{MAX_NUMBER_LENGTH, normalize_extensions, validate_config};
