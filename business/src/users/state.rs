//! State of the user table view.
//!
//! The UI only reads this and turns input into [`crate::users::UserAction`]s;
//! every mutation goes through the controller.

use crate::http::Method;
use crate::users::model::{NewUser, User, UserId};
use crate::users::store::UserStore;

/// Shown after every add submission until dismissed.
pub const ADD_INCOMPLETE_NOTICE: &str = "Feature is incomplete!";

/// View-wide mode. At most one row is edited at a time because there is
/// exactly one edit form; `Editing` carries the id stamped on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Viewing,
    Editing {
        id: UserId,
    },
}

impl UiMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Id stamped on the edit form, if any.
    pub fn editing_id(&self) -> Option<&UserId> {
        match self {
            Self::Editing { id } => Some(id),
            Self::Viewing => None,
        }
    }
}

/// The add form: two inputs plus its declared `action` and `method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub first_name: String,
    pub last_name: String,
    pub action: String,
    pub method: Method,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            action: "/users".to_owned(),
            method: Method::Post,
        }
    }
}

impl AddForm {
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Inputs of the shared edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub first_name: String,
    pub last_name: String,
}

impl EditForm {
    pub fn fill_from(&mut self, user: &User) {
        user.first_name.clone_into(&mut self.first_name);
        user.last_name.clone_into(&mut self.last_name);
    }
}

/// Strongly-typed action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Load,
    Create,
    Update,
    Delete,
}

/// Result of the most recently completed request.
///
/// Never rendered; it exists so failures are observable without scraping logs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionOutcome {
    #[default]
    Idle,

    Succeeded {
        kind: ActionKind,
        user: Option<UserId>,
    },

    /// Transport/decode failure or a `success: false` reply.
    Failed {
        kind: ActionKind,
        user: Option<UserId>,
        message: String,
    },
}

/// Everything the table view projects.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub store: UserStore,
    pub mode: UiMode,
    pub add_form: AddForm,
    pub edit_form: EditForm,
    /// Notice shown after an add submission.
    pub notice: Option<&'static str>,
    /// Requests spawned but not yet applied.
    pub in_flight: usize,
    pub last_outcome: ActionOutcome,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Viewing → Editing for `id`, pre-filling the edit form from the store.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in the store.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(user) = self.store.get(&id) else {
            return false;
        };
        self.edit_form.fill_from(user);
        self.mode = UiMode::Editing { id };
        true
    }

    /// Back to viewing. The edit form keeps its last inputs.
    pub fn end_edit(&mut self) {
        self.mode = UiMode::Viewing;
    }

    /// The record a save would send, or `None` while viewing.
    pub fn pending_edit(&self) -> Option<User> {
        let id = *self.mode.editing_id()?;
        Some(User {
            id,
            first_name: self.edit_form.first_name.clone(),
            last_name: self.edit_form.last_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_grace() -> UsersState {
        let mut state = UsersState::new();
        state.store.upsert(User::new(3, "Grace", "Hopper"));
        state.store.upsert(User::new(5, "Alan", "Turing"));
        state
    }

    #[test]
    fn test_default_mode_is_viewing() {
        let state = UsersState::new();
        assert_eq!(state.mode, UiMode::Viewing);
        assert!(state.pending_edit().is_none());
    }

    #[test]
    fn test_begin_edit_prefills_form() {
        let mut state = state_with_grace();

        assert!(state.begin_edit(UserId::from(3)));
        assert_eq!(
            state.mode,
            UiMode::Editing {
                id: UserId::from(3)
            }
        );
        assert_eq!(state.edit_form.first_name, "Grace");
        assert_eq!(state.edit_form.last_name, "Hopper");
    }

    #[test]
    fn test_begin_edit_unknown_row_keeps_mode() {
        let mut state = state_with_grace();

        assert!(!state.begin_edit(UserId::from(42)));
        assert_eq!(state.mode, UiMode::Viewing);
    }

    #[test]
    fn test_editing_another_row_restamps_form() {
        let mut state = state_with_grace();
        state.begin_edit(UserId::from(3));
        state.begin_edit(UserId::from(5));

        assert_eq!(state.mode.editing_id(), Some(&UserId::from(5)));
        assert_eq!(state.edit_form.first_name, "Alan");
    }

    #[test]
    fn test_pending_edit_uses_form_inputs() {
        let mut state = state_with_grace();
        state.begin_edit(UserId::from(3));
        state.edit_form.last_name = "Murray".to_owned();

        assert_eq!(
            state.pending_edit(),
            Some(User::new(3, "Grace", "Murray"))
        );
    }

    #[test]
    fn test_add_form_defaults_to_post_users() {
        let form = AddForm::default();
        assert_eq!(form.action, "/users");
        assert_eq!(form.method, Method::Post);
    }
}
