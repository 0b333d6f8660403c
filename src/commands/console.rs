use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::Path;
use tracing::{debug, warn};

use crate::commands::confirm::DialoguerConfirmer;
use crate::commands::list::open_view;
use crate::core::{render, HttpUserGateway, SaveOutcome, UserListView};
use crate::error::UsuariosError;
use crate::models::{UserField, UserId};

/// What the user picked from the row list
enum MainChoice {
    Row(UserId),
    Reload,
    Quit,
}

/// Interactive list/edit loop
pub async fn run_console(project_root: &Path, url: Option<String>) -> Result<(), UsuariosError> {
    let mut view = open_view(project_root, url).await?;
    let theme = ColorfulTheme::default();

    loop {
        println!();
        print!("{}", render(view.state()));
        if let Some(notice) = view.take_notice() {
            println!("\n{}", notice);
        }
        println!();

        if view.state().editing_id.is_some() {
            edit_step(&mut view, &theme).await?;
            continue;
        }

        match main_menu(&view, &theme)? {
            MainChoice::Quit => break,
            MainChoice::Reload => view.reload().await,
            MainChoice::Row(id) => row_menu(&mut view, &theme, &id).await?,
        }
    }

    Ok(())
}

fn main_menu(
    view: &UserListView<HttpUserGateway>,
    theme: &ColorfulTheme,
) -> Result<MainChoice, UsuariosError> {
    // Rows without an id can't be edited or deleted
    let ids: Vec<UserId> = view.usuarios().iter().filter_map(|u| u.id.clone()).collect();
    let mut items: Vec<String> = view
        .usuarios()
        .iter()
        .filter_map(|u| {
            u.id.as_ref()
                .map(|id| format!("{} - {} {}", id, u.nome, u.sobrenome))
        })
        .collect();
    items.push("Recarregar".to_string());
    items.push("Sair".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Selecione um usuário")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(if selection < ids.len() {
        MainChoice::Row(ids[selection].clone())
    } else if selection == ids.len() {
        MainChoice::Reload
    } else {
        MainChoice::Quit
    })
}

async fn row_menu(
    view: &mut UserListView<HttpUserGateway>,
    theme: &ColorfulTheme,
    id: &UserId,
) -> Result<(), UsuariosError> {
    let actions = ["Editar", "Excluir", "Voltar"];
    let selection = Select::with_theme(theme)
        .with_prompt(format!("Usuário {}", id))
        .items(&actions[..])
        .default(0)
        .interact()?;

    match selection {
        0 => {
            if !view.begin_edit(id) {
                warn!("User {} is no longer in the list", id);
            }
        }
        1 => {
            let outcome = view.delete(id, &DialoguerConfirmer).await;
            debug!("Delete outcome: {:?}", outcome);
        }
        _ => {}
    }
    Ok(())
}

async fn edit_step(
    view: &mut UserListView<HttpUserGateway>,
    theme: &ColorfulTheme,
) -> Result<(), UsuariosError> {
    let Some(buffer) = view.state().edited_user.clone() else {
        view.cancel();
        return Ok(());
    };

    let fields = UserField::all();
    let mut items: Vec<String> = fields
        .iter()
        .map(|f| format!("{}: {}", f.label(), buffer.field(*f)))
        .collect();
    items.push("Salvar".to_string());
    items.push("Cancelar".to_string());

    let selection = Select::with_theme(theme)
        .with_prompt("Editando")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(field) = fields.get(selection) {
        let value: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(buffer.field(*field))
            .allow_empty(true)
            .interact_text()?;
        view.change_field(*field, value);
    } else if selection == fields.len() {
        // Failures are already logged by the view
        if let SaveOutcome::Saved = view.save().await {
            println!("Usuário atualizado.");
        }
    } else {
        view.cancel();
    }

    Ok(())
}
