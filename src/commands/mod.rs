pub mod add;
pub mod confirm;
pub mod console;
pub mod delete;
pub mod init;
pub mod list;

pub use add::*;
pub use confirm::*;
pub use console::*;
pub use delete::*;
pub use init::*;
pub use list::*;
