//! In-memory record store the table is rendered from.

use crate::users::model::{User, UserId};

/// Users keyed by id, in display order.
///
/// Insertion order is the order rows appear in. Re-inserting a known id
/// replaces that record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut store = Self::new();
        for user in users {
            store.upsert(user);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == *id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    /// Appends `user`, or replaces the record with the same id.
    ///
    /// Returns `true` when a new row was appended.
    pub fn upsert(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => {
                *existing = user;
                false
            }
            None => {
                self.users.push(user);
                true
            }
        }
    }

    /// Updates the names of an existing record. Unknown ids are left alone.
    pub fn rename(&mut self, id: &UserId, first_name: &str, last_name: &str) -> bool {
        match self.users.iter_mut().find(|user| user.id == *id) {
            Some(user) => {
                first_name.clone_into(&mut user.first_name);
                last_name.clone_into(&mut user.last_name);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &UserId) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == *id)?;
        Some(self.users.remove(index))
    }

    pub fn replace_all(&mut self, users: impl IntoIterator<Item = User>) {
        *self = Self::from_users(users);
    }
}

impl<'a> IntoIterator for &'a UserStore {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserStore {
        UserStore::from_users([
            User::new(3, "Grace", "Hopper"),
            User::new(5, "Alan", "Turing"),
        ])
    }

    #[test]
    fn test_upsert_appends_in_order() {
        let mut store = sample();
        assert!(store.upsert(User::new(7, "Ada", "Lovelace")));

        let ids: Vec<String> = store.iter().map(|u| u.id.to_string()).collect();
        assert_eq!(ids, ["3", "5", "7"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut store = sample();
        assert!(!store.upsert(User::new(3, "Grace", "Murray")));

        assert_eq!(store.len(), 2);
        let first = store.iter().next().expect("store should not be empty");
        assert_eq!(first, &User::new(3, "Grace", "Murray"));
    }

    #[test]
    fn test_from_users_collapses_duplicate_ids() {
        let store = UserStore::from_users([
            User::new(1, "A", "One"),
            User::new(2, "B", "Two"),
            User::new(1, "A", "Uno"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get(&UserId::from(1)).map(|u| u.last_name.as_str()),
            Some("Uno")
        );
    }

    #[test]
    fn test_rename_unknown_id_is_noop() {
        let mut store = sample();
        let before = store.clone();

        assert!(!store.rename(&UserId::from(99), "No", "Body"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove() {
        let mut store = sample();

        let removed = store.remove(&UserId::from(5));
        assert_eq!(removed, Some(User::new(5, "Alan", "Turing")));
        assert!(!store.contains(&UserId::from(5)));
        assert!(store.remove(&UserId::from(5)).is_none());
    }

    #[test]
    fn test_ids_compare_as_received() {
        let store = sample();
        assert!(store.contains(&UserId::from(3)));
        assert!(!store.contains(&UserId::from("3")));
    }
}
