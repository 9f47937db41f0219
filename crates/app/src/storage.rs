//! Durable key-value storage behind the stores.
//!
//! [`LocalStorage`] mirrors the browser's `localStorage`. Reads are served
//! from a snapshot taken once at startup; writes update the snapshot and are
//! forwarded to the browser. [`MemoryStorage`] backs tests and can simulate a
//! disabled store.

use shared_types::AppError;
#[cfg(test)]
use std::cell::RefCell;
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;

/// Persisted session record.
pub const AUTH_USER_KEY: &str = "auth_user";
/// Persisted explicit light/dark choice.
pub const THEME_MODE_KEY: &str = "theme-mode";
/// Every key the portal reads at startup.
pub const PERSISTED_KEYS: [&str; 2] = [AUTH_USER_KEY, THEME_MODE_KEY];

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&mut self, key: &str) -> Result<(), AppError>;
}

/// Shared in-memory store. Clones see the same entries.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    disabled: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store where every operation fails, like `localStorage` in some
    /// private browsing modes.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// Raw view of an entry, bypassing the disabled flag.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.disabled {
            Err(AppError::storage("storage is disabled"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check()?;
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage`, read through a startup snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalStorage {
    snapshot: HashMap<String, String>,
}

impl LocalStorage {
    pub fn from_snapshot(snapshot: HashMap<String, String>) -> Self {
        Self { snapshot }
    }

    /// Load `keys` from the browser. A failed read yields an empty snapshot:
    /// the portal then starts anonymous with the default theme.
    pub async fn load(keys: &[&str]) -> Self {
        match crate::browser::read_local_storage(keys).await {
            Ok(snapshot) => Self::from_snapshot(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, starting from defaults");
                Self::default()
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.snapshot.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.snapshot.insert(key.to_string(), value.to_string());
        crate::browser::write_local_storage(key, Some(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.snapshot.remove(key);
        crate::browser::write_local_storage(key, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn memory_clones_share_entries() {
        let mut a = MemoryStorage::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap(), Some("v".to_string()));
        a.remove("k").unwrap();
        assert_eq!(b.get("k").unwrap(), None);
    }

    #[test]
    fn disabled_memory_fails_every_operation() {
        let mut store = MemoryStorage::disabled();
        assert_eq!(store.get("k").unwrap_err().kind, AppErrorKind::StorageError);
        assert!(store.set("k", "v").is_err());
        assert!(store.remove("k").is_err());
    }

    #[test]
    fn with_entries_seeds_store() {
        let store = MemoryStorage::with_entries([(THEME_MODE_KEY, "light")]);
        assert_eq!(store.get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn local_storage_reads_snapshot() {
        let snapshot = HashMap::from([(AUTH_USER_KEY.to_string(), "{}".to_string())]);
        let store = LocalStorage::from_snapshot(snapshot);
        assert_eq!(store.get(AUTH_USER_KEY).unwrap().as_deref(), Some("{}"));
        assert_eq!(store.get(THEME_MODE_KEY).unwrap(), None);
    }
}
