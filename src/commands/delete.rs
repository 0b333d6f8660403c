use std::path::Path;

use crate::commands::confirm::{AssumeYes, DialoguerConfirmer};
use crate::commands::list::open_view;
use crate::core::{Confirmer, DeleteOutcome};
use crate::error::UsuariosError;
use crate::models::UserId;

/// Delete one user after confirmation
pub async fn delete_user(
    project_root: &Path,
    url: Option<String>,
    id: &str,
    assume_yes: bool,
) -> Result<(), UsuariosError> {
    let id = UserId::parse(id);
    let mut view = open_view(project_root, url).await?;

    if !view.usuarios().iter().any(|u| u.has_id(&id)) {
        return Err(UsuariosError::UserNotFound(id.to_string()));
    }

    let confirmer: &dyn Confirmer = if assume_yes { &AssumeYes } else { &DialoguerConfirmer };
    let outcome = view.delete(&id, confirmer).await;

    if let Some(notice) = view.take_notice() {
        println!("{}", notice);
    }

    match outcome {
        DeleteOutcome::Cancelled => {
            println!("Nada foi excluído.");
            Ok(())
        }
        DeleteOutcome::Removed => Ok(()),
        DeleteOutcome::Failed(e) => Err(e.into()),
    }
}
