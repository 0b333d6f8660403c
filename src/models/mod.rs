pub mod config;
pub mod notice;
pub mod user;

pub use config::*;
pub use notice::*;
pub use user::*;
