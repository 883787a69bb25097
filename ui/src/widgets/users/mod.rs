//! User table widgets.
//!
//! Every widget here takes the table state, binds form inputs in place, and
//! reports clicks as [`roster_business::UserAction`]s for the app to dispatch
//! once the frame is drawn.
//! - `panel`: toolbar, table and add form
//! - `table`: the grid of user rows
//! - `add_form`: first/last name inputs and the submit button
//! - `edit_form`: the single shared edit window
//! - `notice`: the add-form notice

mod add_form;
mod edit_form;
mod notice;
mod panel;
pub mod table;

pub use add_form::add_user_form;
pub use edit_form::edit_user_window;
pub use notice::users_notice;
pub use panel::users_panel;
