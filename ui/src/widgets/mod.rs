pub mod users;

pub use users::{edit_user_window, users_notice, users_panel};
