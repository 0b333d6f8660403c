pub mod config;
pub mod gateway;
pub mod render;
pub mod view;

pub use config::*;
pub use gateway::*;
pub use render::*;
pub use view::*;
