use crate::http::HttpResult;
use crate::users::model::{Mutation, User, UserId};

/// Everything the user can do to the table.
///
/// The UI maps each click or submission to exactly one action and hands it to
/// [`crate::users::UserTableController::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Submit the add form to its declared action URL.
    Submit,
    /// Open the edit form for a row.
    Edit(UserId),
    /// Close the edit form without sending anything.
    Cancel,
    /// Send the edit form as `PUT /users/{id}`.
    Save,
    /// Send `DELETE /users/{id}` for a row.
    Delete(UserId),
    /// Reload the whole table from `GET /users`.
    Refresh,
    /// Hide the add-form notice.
    DismissNotice,
}

/// A finished request, delivered back to the UI thread.
#[derive(Debug)]
pub(crate) enum UserEvent {
    Loaded(HttpResult<Vec<User>>),
    Created(HttpResult<User>),
    Updated {
        user: User,
        result: HttpResult<Mutation>,
    },
    Deleted {
        id: UserId,
        result: HttpResult<Mutation>,
    },
}
