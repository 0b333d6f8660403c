use std::path::Path;

use crate::commands::list::open_view;
use crate::core::render;
use crate::error::UsuariosError;
use crate::models::Usuario;

/// Create a user on the backend and print the updated table
pub async fn add_user(
    project_root: &Path,
    url: Option<String>,
    usuario: Usuario,
) -> Result<Usuario, UsuariosError> {
    let mut view = open_view(project_root, url).await?;

    let created = view.create(usuario).await?;

    match &created.id {
        Some(id) => println!("Usuário cadastrado com id {}", id),
        None => println!("Usuário cadastrado"),
    }
    print!("{}", render(view.state()));

    Ok(created)
}
