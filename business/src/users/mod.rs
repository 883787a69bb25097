//! Users domain module.
//!
//! This module is the single home for:
//! - Wire types of the `/users` endpoint (`model`)
//! - Network IO against it (`api`)
//! - The record store and view state the table is rendered from (`store`, `state`)
//! - Tagged actions and the controller that applies them (`action`, `controller`)
//!
//! UI code should not define domain state. It reads `UserTableController::state()`
//! and triggers changes via `UserTableController::dispatch()`.

mod action;
pub mod api;
mod controller;
mod model;
mod state;
mod store;

pub use action::UserAction;
pub use controller::{RepaintHook, UserTableController};
pub use model::{
    GetUserResponse, ListUsersResponse, Mutation, MutationResponse, NewUser, NumericId, User,
    UserId,
};
pub use state::{
    ADD_INCOMPLETE_NOTICE, ActionKind, ActionOutcome, AddForm, EditForm, UiMode, UsersState,
};
pub use store::UserStore;
