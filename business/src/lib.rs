//! Business layer of the roster user table.
//!
//! Holds everything that is not drawing: configuration, the JSON request
//! helper, the users API client, and the controller that keeps the record
//! store in sync with the server.

pub mod config;
pub mod error;
pub mod http;
pub mod users;

pub use config::BusinessConfig;
pub use error::{ConfigError, RequestError};
pub use http::{Method, server_request};
pub use users::{
    ActionKind, ActionOutcome, AddForm, EditForm, Mutation, NewUser, UiMode, User, UserAction,
    UserId, UserStore, UserTableController, UsersState,
};
