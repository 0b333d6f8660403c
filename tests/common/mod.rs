//! Common test utilities

#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::Cell;
use std::sync::Mutex;

use usuarios::core::{Confirmer, UserGateway};
use usuarios::error::GatewayError;
use usuarios::models::{ConfirmPrompt, UserId, Usuario};

/// In-memory gateway that records every call it receives
#[derive(Default)]
pub struct FakeGateway {
    pub users: Mutex<Vec<Usuario>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_list: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
    /// Answer updates with 2xx and no body
    pub empty_update_reply: bool,
}

impl FakeGateway {
    pub fn with_users(users: Vec<Usuario>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn unavailable() -> GatewayError {
        GatewayError::HttpError {
            status: 500,
            message: "backend unavailable".to_string(),
        }
    }
}

#[async_trait]
impl UserGateway for FakeGateway {
    async fn list(&self) -> Result<Vec<Usuario>, GatewayError> {
        self.record("list".to_string());
        if self.fail_list {
            return Err(Self::unavailable());
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, usuario: &Usuario) -> Result<Usuario, GatewayError> {
        self.record("create".to_string());
        let mut users = self.users.lock().unwrap();
        let created = usuario.clone().with_id(users.len() as i64 + 100);
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &UserId, usuario: &Usuario) -> Result<Option<Usuario>, GatewayError> {
        self.record(format!("update {}", id));
        if self.fail_update {
            return Err(Self::unavailable());
        }
        let mut users = self.users.lock().unwrap();
        for user in users.iter_mut().filter(|u| u.has_id(id)) {
            *user = usuario.clone();
        }
        if self.empty_update_reply {
            return Ok(None);
        }
        Ok(Some(usuario.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<(), GatewayError> {
        self.record(format!("delete {}", id));
        if self.fail_delete {
            return Err(Self::unavailable());
        }
        self.users.lock().unwrap().retain(|u| !u.has_id(id));
        Ok(())
    }
}

/// Confirmer that gives a fixed answer and counts how often it was asked
pub struct ScriptedConfirmer {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirmer {
    pub fn yes() -> Self {
        Self { answer: true, asked: Cell::new(0) }
    }

    pub fn no() -> Self {
        Self { answer: false, asked: Cell::new(0) }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        assert_eq!(prompt, &ConfirmPrompt::delete_user());
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}

pub fn ana() -> Usuario {
    Usuario::new("Ana", "Silva", "ana@example.com", "111.111.111-11").with_id(1)
}

pub fn bruno() -> Usuario {
    Usuario::new("Bruno", "Costa", "bruno@example.com", "222.222.222-22").with_id(2)
}

pub fn carla() -> Usuario {
    Usuario::new("Carla", "Dias", "carla@example.com", "333.333.333-33").with_id("c-3")
}
