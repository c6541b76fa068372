//! Configuration loaded from `.debug-decoders.toml`.

mod core;
mod loader;

pub use self::core::{DebugDecodersConfig, DEFAULT_EXTRACTOR, DEFAULT_MANIFEST};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
