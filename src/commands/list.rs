use std::path::Path;

use crate::core::{load_config, render, HttpUserGateway, UserListView};
use crate::error::UsuariosError;

/// Build a view over the configured backend and run its initial load
pub async fn open_view(
    project_root: &Path,
    url: Option<String>,
) -> Result<UserListView<HttpUserGateway>, UsuariosError> {
    let config = load_config(project_root, url)?;
    let gateway = HttpUserGateway::new(&config.api)?;
    let mut view = UserListView::new(gateway);
    view.mount().await;
    Ok(view)
}

/// Print the users table
pub async fn list_users(project_root: &Path, url: Option<String>) -> Result<(), UsuariosError> {
    let view = open_view(project_root, url).await?;
    print!("{}", render(view.state()));
    Ok(())
}
