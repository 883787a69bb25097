use roster_business::{BusinessConfig, UserTableController};

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// Owns the user table and talks to the users API.
    pub controller: UserTableController,
}

impl Default for State {
    /// Reads the API base URL from the environment, falling back to same-origin
    /// relative paths when it is unset or unreadable.
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            log::warn!("Ignoring invalid environment config: {err}");
            BusinessConfig::default()
        });

        Self {
            controller: UserTableController::new(config),
        }
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self {
            controller: UserTableController::new(BusinessConfig::new(base_url)),
        }
    }
}
