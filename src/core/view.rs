//! Stateful list/edit view over the users collection.
//!
//! Each row moves through its own small state machine:
//!
//! - Viewing -> Editing -> Saving -> Viewing (or Editing -> Viewing on cancel)
//! - Viewing -> Deleting -> Removed (or back to Viewing)
//!
//! Only one row is in edit mode at a time. The edit buffer is a value copy
//! of the selected record and the list is only touched once the backend
//! confirms a save or delete.

use tracing::{debug, error, info};

use crate::core::gateway::UserGateway;
use crate::error::GatewayError;
use crate::models::{ConfirmPrompt, Notice, UserField, UserId, Usuario};

/// Answers a yes/no confirmation prompt
pub trait Confirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Snapshot of everything the view displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Users in server order
    pub usuarios: Vec<Usuario>,
    /// Id of the row in edit mode
    pub editing_id: Option<UserId>,
    /// Local copy being edited
    pub edited_user: Option<Usuario>,
    pub loading: bool,
    /// A save is in flight; the renderer shows "Salvando..."
    pub updating: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            usuarios: Vec::new(),
            editing_id: None,
            edited_user: None,
            loading: true,
            updating: false,
        }
    }
}

impl ViewState {
    pub fn is_editing(&self, id: &UserId) -> bool {
        self.editing_id.as_ref() == Some(id)
    }

    fn clear_edit(&mut self) {
        self.editing_id = None;
        self.edited_user = None;
    }
}

/// Result of [`UserListView::save`]
#[derive(Debug)]
pub enum SaveOutcome {
    /// No row was in edit mode
    NotEditing,
    Saved,
    /// The backend rejected the update; edit mode was exited anyway
    Failed(GatewayError),
}

/// Result of [`UserListView::delete`]
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt
    Cancelled,
    Removed,
    Failed(GatewayError),
}

pub struct UserListView<G: UserGateway> {
    gateway: G,
    state: ViewState,
    notice: Option<Notice>,
}

impl<G: UserGateway> UserListView<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ViewState::default(),
            notice: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn usuarios(&self) -> &[Usuario] {
        &self.state.usuarios
    }

    pub fn is_editing(&self, id: &UserId) -> bool {
        self.state.is_editing(id)
    }

    /// Initial load of the list
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    /// Fetch the list again. Failures are logged and leave the current
    /// list in place.
    pub async fn reload(&mut self) {
        self.state.loading = true;
        match self.gateway.list().await {
            Ok(usuarios) => {
                info!("Loaded {} users", usuarios.len());
                self.state.usuarios = usuarios;
            }
            Err(e) => {
                error!("Erro ao buscar usuários: {}", e);
            }
        }
        self.state.loading = false;
    }

    /// Put the row with `id` into edit mode, replacing any previous edit.
    /// Returns false when no loaded user has that id.
    pub fn begin_edit(&mut self, id: &UserId) -> bool {
        let Some(usuario) = self.state.usuarios.iter().find(|u| u.has_id(id)) else {
            debug!("No user with id {} to edit", id);
            return false;
        };
        self.state.edited_user = Some(usuario.clone());
        self.state.editing_id = Some(id.clone());
        debug!("Editing user {}", id);
        true
    }

    /// Change one field of the edit buffer
    pub fn change_field(&mut self, field: UserField, value: impl Into<String>) {
        if let Some(buffer) = self.state.edited_user.as_mut() {
            buffer.set_field(field, value);
        }
    }

    /// Persist the edit buffer. Edit mode is exited whether or not the
    /// backend accepts the update; the list only changes on success.
    pub async fn save(&mut self) -> SaveOutcome {
        let (Some(id), Some(buffer)) = (
            self.state.editing_id.clone(),
            self.state.edited_user.clone(),
        ) else {
            return SaveOutcome::NotEditing;
        };

        self.state.updating = true;
        let outcome = match self.gateway.update(&id, &buffer).await {
            Ok(_) => {
                for usuario in self.state.usuarios.iter_mut().filter(|u| u.has_id(&id)) {
                    *usuario = buffer.clone();
                }
                info!("Updated user {}", id);
                SaveOutcome::Saved
            }
            Err(e) => {
                error!("Erro ao atualizar usuário: {}", e);
                SaveOutcome::Failed(e)
            }
        };
        self.state.clear_edit();
        self.state.updating = false;
        outcome
    }

    /// Leave edit mode without touching the list
    pub fn cancel(&mut self) {
        self.state.clear_edit();
    }

    /// Ask for confirmation, then delete the user with `id`
    pub async fn delete(&mut self, id: &UserId, confirmer: &dyn Confirmer) -> DeleteOutcome {
        if !confirmer.confirm(&ConfirmPrompt::delete_user()) {
            debug!("Delete of user {} cancelled", id);
            return DeleteOutcome::Cancelled;
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.state.usuarios.retain(|u| !u.has_id(id));
                if self.state.is_editing(id) {
                    self.state.clear_edit();
                }
                info!("Deleted user {}", id);
                self.notice = Some(Notice::success("Excluído!", "O usuário foi excluído."));
                DeleteOutcome::Removed
            }
            Err(e) => {
                error!("Erro ao excluir usuário: {}", e);
                self.notice = Some(Notice::error("Erro!", "Não foi possível excluir o usuário."));
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Create a user and append the stored record to the list
    pub async fn create(&mut self, usuario: Usuario) -> Result<Usuario, GatewayError> {
        let created = self.gateway.create(&usuario).await?;
        info!(
            "Created user {}",
            created.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
        );
        self.state.usuarios.push(created.clone());
        Ok(created)
    }

    /// Take the pending notice, if any
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
