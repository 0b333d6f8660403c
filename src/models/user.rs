use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the backend.
///
/// The backend is free to send either a number or a string; whichever form
/// arrives is kept so it can be echoed back in `/{id}` paths unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Number(n)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId::Text(s)
    }
}

impl UserId {
    /// Parse an id typed on the command line: integers become `Number`,
    /// anything else is taken as text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => UserId::Number(n),
            Err(_) => UserId::Text(trimmed.to_string()),
        }
    }
}

/// A user record as exchanged with the backend.
///
/// Fields missing from a backend record decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usuario {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub cpf: String,
    /// Absent for records not yet saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
}

impl Usuario {
    pub fn new(
        nome: impl Into<String>,
        sobrenome: impl Into<String>,
        email: impl Into<String>,
        cpf: impl Into<String>,
    ) -> Self {
        Self {
            nome: nome.into(),
            sobrenome: sobrenome.into(),
            email: email.into(),
            cpf: cpf.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn has_id(&self, id: &UserId) -> bool {
        self.id.as_ref() == Some(id)
    }

    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Nome => &self.nome,
            UserField::Sobrenome => &self.sobrenome,
            UserField::Email => &self.email,
            UserField::Cpf => &self.cpf,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Nome => self.nome = value,
            UserField::Sobrenome => self.sobrenome = value,
            UserField::Email => self.email = value,
            UserField::Cpf => self.cpf = value,
        }
    }
}

/// Editable fields of a [`Usuario`], in table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Nome,
    Sobrenome,
    Email,
    Cpf,
}

impl UserField {
    pub fn all() -> &'static [UserField] {
        &[
            UserField::Nome,
            UserField::Sobrenome,
            UserField::Email,
            UserField::Cpf,
        ]
    }

    /// Column header for this field
    pub fn label(&self) -> &'static str {
        match self {
            UserField::Nome => "Nome",
            UserField::Sobrenome => "Sobrenome",
            UserField::Email => "Email",
            UserField::Cpf => "CPF",
        }
    }
}
