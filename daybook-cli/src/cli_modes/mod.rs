mod create_mode;
mod delete_mode;
mod edit_mode;
mod install_mode;
mod list_mode;
mod sync_mode;

pub use create_mode::create_mode;
pub use delete_mode::delete_mode;
pub use edit_mode::edit_mode;
pub use install_mode::{daybooks_mode, install_mode};
pub use list_mode::{list_mode, tags_mode};
pub use sync_mode::sync_mode;
