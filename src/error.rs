use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for usuarios
#[derive(Error, Debug)]
pub enum UsuariosError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Errors raised while talking to the users backend
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            GatewayError::ConnectionRefused(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            GatewayError::ParseError(err.to_string())
        } else {
            GatewayError::RequestFailed(err.to_string())
        }
    }
}

impl From<dialoguer::Error> for UsuariosError {
    fn from(err: dialoguer::Error) -> Self {
        UsuariosError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UsuariosError>;
