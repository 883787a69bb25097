//! The user table controller.
//!
//! Owns the record store and the view mode, turns [`UserAction`]s into
//! requests, and applies the replies. Requests run as spawned tasks; their
//! results come back over a `flume` channel and are applied by [`poll`] on the
//! UI thread, so the store is only ever mutated there.
//!
//! On native targets the caller must be inside a Tokio runtime context when
//! dispatching actions that send requests.
//!
//! [`poll`]: UserTableController::poll

use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use crate::BusinessConfig;
use crate::users::action::{UserAction, UserEvent};
use crate::users::api;
use crate::users::model::{Mutation, UserId};
use crate::users::state::{ADD_INCOMPLETE_NOTICE, ActionKind, ActionOutcome, UsersState};

/// Called after a request finishes so the UI can schedule a frame.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct UserTableController {
    config: BusinessConfig,
    state: UsersState,
    sender: Sender<UserEvent>,
    receiver: Receiver<UserEvent>,
    repaint: Option<RepaintHook>,
}

impl std::fmt::Debug for UserTableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserTableController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending_events", &self.receiver.len())
            .field("repaint", &self.repaint.is_some())
            .finish()
    }
}

impl UserTableController {
    pub fn new(config: BusinessConfig) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            state: UsersState::new(),
            sender,
            receiver,
            repaint: None,
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn state(&self) -> &UsersState {
        &self.state
    }

    /// Mutable access for binding form inputs.
    pub fn state_mut(&mut self) -> &mut UsersState {
        &mut self.state
    }

    pub fn set_repaint(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(hook));
    }

    pub fn dispatch(&mut self, action: UserAction) {
        debug!("Dispatching {action:?}");
        match action {
            UserAction::Submit => self.submit(),
            UserAction::Edit(id) => {
                if !self.state.begin_edit(id) {
                    warn!("Edit requested for unknown user {id}");
                }
            }
            UserAction::Cancel => self.state.end_edit(),
            UserAction::Save => self.save(),
            UserAction::Delete(id) => self.delete(id),
            UserAction::Refresh => self.refresh(),
            UserAction::DismissNotice => self.state.notice = None,
        }
    }

    /// Applies every finished request. Call once per frame on the UI thread.
    ///
    /// Returns how many replies were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn submit(&mut self) {
        let form = &self.state.add_form;
        let url = self.config.resolve(&form.action);
        let method = form.method;
        let new_user = form.to_new_user();

        self.spawn(async move {
            UserEvent::Created(api::create_user(&url, method, &new_user).await)
        });

        // Shown on every submission, whatever the server says.
        self.state.notice = Some(ADD_INCOMPLETE_NOTICE);
    }

    fn save(&mut self) {
        let Some(user) = self.state.pending_edit() else {
            debug!("Save ignored: no row is being edited");
            return;
        };
        let config = self.config.clone();

        self.spawn(async move {
            let result = api::update_user(&config, &user).await;
            UserEvent::Updated { user, result }
        });
    }

    fn delete(&mut self, id: UserId) {
        let config = self.config.clone();

        self.spawn(async move {
            let result = api::delete_user(&config, &id).await;
            UserEvent::Deleted { id, result }
        });
    }

    fn refresh(&mut self) {
        let config = self.config.clone();

        self.spawn(async move { UserEvent::Loaded(api::list_users(&config).await) });
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = UserEvent> + Send + 'static,
    {
        self.state.in_flight += 1;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        let task = async move {
            let event = request.await;
            // A closed channel means the controller is gone; there is no table left to update.
            if sender.send(event).is_ok()
                && let Some(repaint) = repaint
            {
                repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        tokio::spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }

    fn apply(&mut self, event: UserEvent) {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);

        match event {
            UserEvent::Loaded(Ok(users)) => {
                info!("Loaded {} users", users.len());
                self.state.store.replace_all(users);
                if let Some(id) = self.state.mode.editing_id().copied()
                    && !self.state.store.contains(&id)
                {
                    self.state.end_edit();
                }
                self.succeed(ActionKind::Load, None);
            }
            UserEvent::Loaded(Err(err)) => {
                self.fail(ActionKind::Load, None, err.to_string());
            }

            UserEvent::Created(Ok(user)) => {
                let id = user.id;
                info!("Created user {id}");
                self.state.store.upsert(user);
                self.succeed(ActionKind::Create, Some(id));
            }
            UserEvent::Created(Err(err)) => {
                self.fail(ActionKind::Create, None, err.to_string());
            }

            UserEvent::Updated {
                user,
                result: Ok(Mutation::Applied),
            } => {
                info!("Updated user {}", user.id);
                self.state
                    .store
                    .rename(&user.id, &user.first_name, &user.last_name);
                self.state.end_edit();
                self.succeed(ActionKind::Update, Some(user.id));
            }
            UserEvent::Updated {
                user,
                result: Ok(Mutation::Rejected { message }),
            } => {
                self.fail(ActionKind::Update, Some(user.id), message);
            }
            UserEvent::Updated {
                user,
                result: Err(err),
            } => {
                self.fail(ActionKind::Update, Some(user.id), err.to_string());
            }

            UserEvent::Deleted {
                id,
                result: Ok(Mutation::Applied),
            } => {
                info!("Deleted user {id}");
                self.state.store.remove(&id);
                if self.state.mode.editing_id() == Some(&id) {
                    self.state.end_edit();
                }
                self.succeed(ActionKind::Delete, Some(id));
            }
            UserEvent::Deleted {
                id,
                result: Ok(Mutation::Rejected { message }),
            } => {
                self.fail(ActionKind::Delete, Some(id), message);
            }
            UserEvent::Deleted { id, result: Err(err) } => {
                self.fail(ActionKind::Delete, Some(id), err.to_string());
            }
        }
    }

    fn succeed(&mut self, kind: ActionKind, user: Option<UserId>) {
        self.state.last_outcome = ActionOutcome::Succeeded { kind, user };
    }

    fn fail(&mut self, kind: ActionKind, user: Option<UserId>, message: String) {
        match user {
            Some(id) => error!("{kind:?} of user {id} failed: {message}"),
            None => error!("{kind:?} failed: {message}"),
        }
        self.state.last_outcome = ActionOutcome::Failed {
            kind,
            user,
            message,
        };
    }
}
