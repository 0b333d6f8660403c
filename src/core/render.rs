use crate::core::view::ViewState;
use crate::models::{UserField, Usuario};

pub const TITLE: &str = "LISTA DE USUÁRIOS CADASTRADOS";
pub const LOADING_MESSAGE: &str = "Carregando usuários...";
pub const EMPTY_MESSAGE: &str = "Nenhum usuário cadastrado.";
pub const SAVING_MESSAGE: &str = "Salvando...";

/// Marker shown in the `#` column of the row being edited
pub const EDIT_MARKER: &str = "*";

/// Render the view as a plain-text table
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.chars().count()));
    out.push('\n');

    if state.loading {
        out.push_str(LOADING_MESSAGE);
        out.push('\n');
        return out;
    }
    if state.usuarios.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
        return out;
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(state.usuarios.len() + 1);
    let mut header = vec!["#".to_string()];
    header.extend(UserField::all().iter().map(|f| f.label().to_string()));
    rows.push(header);

    for usuario in &state.usuarios {
        rows.push(row_cells(state, usuario));
    }

    let widths = column_widths(&rows);
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }

    if state.updating {
        out.push_str(SAVING_MESSAGE);
        out.push('\n');
    }

    out
}

/// Cells for one user; the row under edit shows the buffer's values
fn row_cells(state: &ViewState, usuario: &Usuario) -> Vec<String> {
    let editing = usuario
        .id
        .as_ref()
        .is_some_and(|id| state.is_editing(id));
    let shown = match (&state.edited_user, editing) {
        (Some(buffer), true) => buffer,
        _ => usuario,
    };

    let id_cell = match (&usuario.id, editing) {
        (Some(id), true) => format!("{}{}", EDIT_MARKER, id),
        (Some(id), false) => id.to_string(),
        (None, _) => String::new(),
    };

    let mut cells = vec![id_cell];
    cells.extend(UserField::all().iter().map(|f| shown.field(*f).to_string()));
    cells
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map(|r| r.len()).unwrap_or(0);
    (0..columns)
        .map(|c| {
            rows.iter()
                .map(|r| r.get(c).map(|s| s.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn loaded(usuarios: Vec<Usuario>) -> ViewState {
        ViewState {
            usuarios,
            loading: false,
            ..ViewState::default()
        }
    }

    fn data_lines(out: &str) -> Vec<&str> {
        // title, title rule, header, header rule
        out.lines().skip(4).collect()
    }

    #[test]
    fn test_render_loading() {
        let out = render(&ViewState::default());
        assert!(out.starts_with(TITLE));
        assert!(out.contains(LOADING_MESSAGE));
        assert!(!out.contains("Sobrenome"));
    }

    #[test]
    fn test_render_empty() {
        let out = render(&loaded(vec![]));
        assert!(out.contains(EMPTY_MESSAGE));
        assert!(!out.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_render_one_line_per_user_in_order() {
        let out = render(&loaded(vec![
            Usuario::new("Bruno", "Costa", "b@x.com", "2").with_id(2),
            Usuario::new("Ana", "Silva", "a@x.com", "1").with_id(1),
            Usuario::new("Carla", "Dias", "c@x.com", "3").with_id(3),
        ]));
        let lines = data_lines(&out);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Bruno"));
        assert!(lines[1].contains("Ana"));
        assert!(lines[2].contains("Carla"));
        assert!(out.contains("CPF"));
    }

    #[test]
    fn test_render_editing_row_shows_buffer() {
        let ana = Usuario::new("Ana", "Silva", "a@x.com", "1").with_id(1);
        let mut buffer = ana.clone();
        buffer.nome = "Ana Maria".to_string();
        let state = ViewState {
            editing_id: Some(UserId::Number(1)),
            edited_user: Some(buffer),
            ..loaded(vec![ana, Usuario::new("Bruno", "Costa", "b@x.com", "2").with_id(2)])
        };

        let out = render(&state);
        let lines = data_lines(&out);
        assert!(lines[0].starts_with("*1"));
        assert!(lines[0].contains("Ana Maria"));
        assert!(!lines[1].starts_with(EDIT_MARKER));
    }

    #[test]
    fn test_render_saving_line() {
        let mut state = loaded(vec![Usuario::new("Ana", "Silva", "a@x.com", "1").with_id(1)]);
        assert!(!render(&state).contains(SAVING_MESSAGE));

        state.updating = true;
        let out = render(&state);
        assert_eq!(out.lines().last(), Some(SAVING_MESSAGE));
        assert!(out.contains("Ana"));
    }

    #[test]
    fn test_columns_aligned() {
        let out = render(&loaded(vec![
            Usuario::new("Ana", "S", "a@x.com", "1").with_id(1),
            Usuario::new("Bartolomeu", "S", "b@x.com", "2").with_id(2),
        ]));
        let lines = data_lines(&out);
        let first = lines[0].find(" | S").unwrap();
        let second = lines[1].find(" | S").unwrap();
        assert_eq!(first, second);
    }
}
