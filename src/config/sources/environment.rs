//! Environment overlay for deskfs settings.
//!
//! Variables use the `DESKFS__` prefix and `__` between nesting levels; the
//! rest of the name is lowercased into the config key:
//!
//! - `DESKFS__STORAGE__STORE_PATH`: directory of the sled snapshot store
//! - `DESKFS__STORAGE__SNAPSHOT_KEY`: key the session snapshot is saved under
//! - `DESKFS__LOGGING__LEVEL`, `DESKFS__LOGGING__FORMAT`, `DESKFS__LOGGING__OUTPUT`
//! - `DESKFS__LOGGING__FILE`, `DESKFS__LOGGING__ENABLED`, `DESKFS__LOGGING__COLOR`
//!
//! The single-underscore `DESKFS_LOG*` variables are read by the logger itself,
//! not by this overlay.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

const PREFIX: &str = "DESKFS";
const SEPARATOR: &str = "__";

fn overlay() -> Environment {
    Environment::with_prefix(PREFIX)
        .separator(SEPARATOR)
        .try_parsing(true)
}

/// Add the process environment as the highest-precedence source.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(overlay()))
}
