use crate::storage::{KeyValueStore, LocalStorage, AUTH_USER_KEY};
use dioxus::prelude::*;
use shared_types::access::Viewer;
use shared_types::{Role, Session};

/// Mock administrator credentials.
pub const ADMIN_ID: &str = "ADM_001";
const ADMIN_PASSWORD: &str = "adminpass";
const ADMIN_DISPLAY_NAME: &str = "Lidet Kebede (Admin)";

/// Fixed message shown when [`AuthStore::login`] returns `None`.
pub const LOGIN_FAILED_MESSAGE: &str =
    "Invalid ID or Password. (Try ID: ADM_001 / Pass: adminpass)";

/// Placeholder credential check. There is no credential database: the admin
/// id requires the admin password, every other non-empty id signs in as a
/// student. Not an authentication scheme.
pub fn authenticate(id: &str, password: &str) -> Option<Session> {
    let id = id.trim();
    if id == ADMIN_ID {
        return (password == ADMIN_PASSWORD)
            .then(|| Session::new(ADMIN_ID, ADMIN_DISPLAY_NAME, Role::Admin));
    }
    if id.is_empty() || password.is_empty() {
        return None;
    }
    Some(Session::new(id, format!("User {id}"), Role::Student))
}

/// Owner of the current session and its persisted mirror.
#[derive(Debug, Clone)]
pub struct AuthStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// An anonymous store. Call [`AuthStore::restore`] to pick up a
    /// persisted session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_session(self.session.as_ref())
    }

    /// Read the persisted session. Missing, unreadable or corrupt records
    /// all mean "no session".
    pub fn restore(&mut self) -> Option<Session> {
        let raw = match self.storage.get(AUTH_USER_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted session");
                None
            }
        };
        self.session = raw.and_then(|raw| match Session::from_json(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt persisted session");
                None
            }
        });
        if let Some(session) = &self.session {
            tracing::info!(id = %session.id, role = %session.role, "session restored");
        }
        self.session.clone()
    }

    pub fn login(&mut self, id: &str, password: &str) -> Option<Session> {
        let Some(session) = authenticate(id, password) else {
            tracing::warn!(id = %id.trim(), "login rejected");
            return None;
        };
        match session.to_json() {
            Ok(json) => {
                if let Err(e) = self.storage.set(AUTH_USER_KEY, &json) {
                    tracing::warn!(error = %e, "session not persisted");
                }
            }
            Err(e) => tracing::warn!(error = %e, "session not serializable"),
        }
        tracing::info!(id = %session.id, role = %session.role, "login succeeded");
        self.session = Some(session.clone());
        Some(session)
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(id = %session.id, "logout");
        }
        if let Err(e) = self.storage.remove(AUTH_USER_KEY) {
            tracing::warn!(error = %e, "persisted session not cleared");
        }
    }
}

/// Auth store shared through context.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub store: Signal<AuthStore<LocalStorage>>,
}

impl AuthState {
    /// Build the store and restore any persisted session.
    pub fn restored(storage: LocalStorage) -> Self {
        let mut store = AuthStore::new(storage);
        store.restore();
        Self {
            store: Signal::new(store),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.store.read().session().cloned()
    }

    pub fn viewer(&self) -> Viewer {
        self.store.read().viewer()
    }

    pub fn login(&mut self, id: &str, password: &str) -> Option<Session> {
        self.store.write().login(id, password)
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook returning the current session, if any.
pub fn use_session() -> Option<Session> {
    use_auth().session()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn store() -> (AuthStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (AuthStore::new(storage.clone()), storage)
    }

    #[test]
    fn admin_credentials_yield_admin_session() {
        let (mut auth, storage) = store();
        let session = auth.login("ADM_001", "adminpass").unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.display_name, "Lidet Kebede (Admin)");
        assert_eq!(auth.viewer(), Viewer::Admin);
        assert!(storage.peek(AUTH_USER_KEY).is_some());
    }

    #[test]
    fn admin_id_with_wrong_or_empty_password_fails() {
        let (mut auth, storage) = store();
        assert_eq!(auth.login("ADM_001", "wrong"), None);
        assert_eq!(auth.login("ADM_001", ""), None);
        assert!(!auth.is_authenticated());
        assert_eq!(storage.peek(AUTH_USER_KEY), None);
    }

    #[test]
    fn other_ids_sign_in_as_student() {
        let (mut auth, _) = store();
        let session = auth.login("BDU1234", "x").unwrap();
        assert_eq!(session, Session::new("BDU1234", "User BDU1234", Role::Student));
        assert_eq!(auth.viewer(), Viewer::Member);
    }

    #[test]
    fn empty_id_or_password_fails() {
        assert_eq!(authenticate("", "secret"), None);
        assert_eq!(authenticate("   ", "secret"), None);
        assert_eq!(authenticate("BDU1234", ""), None);
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let (mut auth, _) = store();
        auth.login("BDU1234", "x").unwrap();
        assert_eq!(auth.login("ADM_001", "nope"), None);
        assert_eq!(auth.session().map(|s| s.id.as_str()), Some("BDU1234"));
    }

    #[test]
    fn logout_clears_memory_and_storage_and_is_idempotent() {
        let (mut auth, storage) = store();
        auth.login("BDU1234", "x").unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());
        assert_eq!(storage.peek(AUTH_USER_KEY), None);
        auth.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn restore_reads_persisted_session() {
        let (mut first, storage) = store();
        let session = first.login("ADM_001", "adminpass").unwrap();

        let mut second = AuthStore::new(storage);
        assert_eq!(second.restore(), Some(session));
        assert_eq!(second.viewer(), Viewer::Admin);
    }

    #[test]
    fn restore_treats_missing_or_corrupt_data_as_anonymous() {
        let mut empty = AuthStore::new(MemoryStorage::new());
        assert_eq!(empty.restore(), None);

        for raw in ["not json", r#"{"id":"X","name":"X","role":"root"}"#, "{}"] {
            let mut auth = AuthStore::new(MemoryStorage::with_entries([(AUTH_USER_KEY, raw)]));
            assert_eq!(auth.restore(), None, "accepted {raw}");
            assert_eq!(auth.viewer(), Viewer::Anonymous);
        }
    }

    #[test]
    fn disabled_storage_degrades_without_failing() {
        let mut auth = AuthStore::new(MemoryStorage::disabled());
        assert_eq!(auth.restore(), None);
        let session = auth.login("BDU1234", "x");
        assert!(session.is_some());
        assert!(auth.is_authenticated());
        auth.logout();
        assert!(!auth.is_authenticated());
    }
}
