use std::path::Path;
use tracing::info;

use crate::error::UsuariosError;
use crate::models::Config;

/// Load configuration from project directory with CLI overrides
pub fn load_config(project_root: &Path, url: Option<String>) -> Result<Config, UsuariosError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(url);

    info!("Configuration loaded: url={}", config.api.url);

    Ok(config)
}
