//! usuarios - terminal console for a REST users backend
//!
//! Lists, edits and deletes user records through a fixed collection
//! endpoint (`GET/POST /usuarios`, `PUT/DELETE /usuarios/{id}`).
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (init, list, add, delete, console)
//! - **core**: Record gateway, list/edit view, table renderer, config loading
//! - **models**: Data structures (user record, config, notices)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, UsuariosError};
