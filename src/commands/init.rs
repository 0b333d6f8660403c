use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::UsuariosError;
use crate::models::{Config, CONFIG_FILE_NAME};

/// Write a default usuarios.toml into `project_root`
pub fn init_project(project_root: &Path, url: Option<String>) -> Result<(), UsuariosError> {
    if !project_root.exists() {
        fs::create_dir_all(project_root)?;
        info!("Created directory: {}", project_root.display());
    }

    let config = Config::default().with_overrides(url);
    let contents = config.to_toml()?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    if create_file_if_not_exists(&config_path, &contents)? {
        println!("Created {}", config_path.display());
    } else {
        println!("{} already exists, leaving it untouched", config_path.display());
    }

    println!("\nNext steps:");
    println!("1. Point [api].url at your users backend");
    println!("2. Run 'usuarios list' to check the connection");
    println!("3. Run 'usuarios console' to edit and delete users");

    Ok(())
}

fn create_file_if_not_exists(path: &Path, content: &str) -> Result<bool, UsuariosError> {
    if !path.exists() {
        fs::write(path, content)?;
        info!("Created file: {}", path.display());
        Ok(true)
    } else {
        info!("File already exists: {}", path.display());
        Ok(false)
    }
}
