//! User config file source: `$XDG_CONFIG_HOME/deskfs/config.toml`, optional.

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use tracing::debug;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match xdg::config_file_path() {
        Ok(path) => {
            debug!(path = %path.display(), "config file source");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        // No HOME: run on defaults and environment only.
        Err(_) => Ok(builder),
    }
}
