use crate::browser::{self, BrowserListener, COLOR_SCHEME_LISTENER};
use crate::storage::{KeyValueStore, LocalStorage, THEME_MODE_KEY};
use dioxus::prelude::*;
use shared_types::ThemeMode;
use shared_ui::theme::ThemeTokens;

const SCHEME_LISTENER: BrowserListener = BrowserListener::new("color-scheme");

fn persisted_mode(storage: &impl KeyValueStore) -> Option<ThemeMode> {
    match storage.get(THEME_MODE_KEY) {
        Ok(raw) => raw.as_deref().and_then(ThemeMode::parse),
        Err(e) => {
            tracing::warn!(error = %e, "could not read theme preference");
            None
        }
    }
}

/// Resolve the starting mode: persisted choice, then the OS signal, then
/// `default_mode`.
pub fn preferred_mode(
    storage: &impl KeyValueStore,
    system_prefers_dark: Option<bool>,
    default_mode: ThemeMode,
) -> ThemeMode {
    persisted_mode(storage)
        .or_else(|| system_prefers_dark.map(ThemeMode::from_prefers_dark))
        .unwrap_or(default_mode)
}

/// Owner of the active mode. Only explicit choices are persisted, so the OS
/// scheme keeps driving the mode until the user picks one.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    mode: ThemeMode,
    system_prefers_dark: Option<bool>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(storage: S, system_prefers_dark: Option<bool>, default_mode: ThemeMode) -> Self {
        let mode = preferred_mode(&storage, system_prefers_dark, default_mode);
        Self {
            storage,
            mode,
            system_prefers_dark,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::for_mode(self.mode)
    }

    pub fn has_explicit_choice(&self) -> bool {
        persisted_mode(&self.storage).is_some()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if let Err(e) = self.storage.set(THEME_MODE_KEY, mode.as_str()) {
            tracing::warn!(error = %e, "theme preference not persisted");
        }
        if self.mode != mode {
            tracing::info!(from = %self.mode, to = %mode, "theme mode changed");
        }
        self.mode = mode;
    }

    /// Apply an OS scheme change unless an explicit choice is persisted.
    /// Returns whether the mode changed.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> bool {
        self.system_prefers_dark = Some(prefers_dark);
        if self.has_explicit_choice() {
            return false;
        }
        let next = ThemeMode::from_prefers_dark(prefers_dark);
        if next == self.mode {
            return false;
        }
        tracing::debug!(to = %next, "following system color scheme");
        self.mode = next;
        true
    }

    /// Forget the explicit choice and fall back to the last OS signal, if
    /// one was seen. OS changes are followed again afterwards.
    pub fn clear_preference(&mut self) {
        if let Err(e) = self.storage.remove(THEME_MODE_KEY) {
            tracing::warn!(error = %e, "theme preference not cleared");
        }
        if let Some(prefers_dark) = self.system_prefers_dark {
            self.mode = ThemeMode::from_prefers_dark(prefers_dark);
        }
        tracing::info!(mode = %self.mode, "following system color scheme");
    }
}

/// Theme store shared through context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub store: Signal<ThemeStore<LocalStorage>>,
}

impl ThemeState {
    pub fn new(storage: LocalStorage, default_mode: ThemeMode) -> Self {
        Self {
            store: Signal::new(ThemeStore::new(storage, None, default_mode)),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.store.read().mode()
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.store.write().toggle_theme()
    }

    pub fn has_explicit_choice(&self) -> bool {
        self.store.read().has_explicit_choice()
    }

    pub fn follow_system(&mut self) {
        self.store.write().clear_preference();
    }

    fn system_scheme_changed(&mut self, prefers_dark: bool) {
        self.store.write().system_scheme_changed(prefers_dark);
    }
}

/// Hook to access theme state.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Keeps the document in sync with [`ThemeState`]: republishes tokens on
/// every mode change and follows the OS color scheme for as long as this
/// component is mounted.
#[component]
pub fn ThemeSync() -> Element {
    let mut theme = use_theme();

    use_effect(move || {
        let tokens = theme.store.read().tokens();
        browser::publish_tokens(&tokens);
    });

    use_future(move || async move {
        let mut channel = SCHEME_LISTENER.install(COLOR_SCHEME_LISTENER);
        while let Ok(prefers_dark) = channel.recv::<bool>().await {
            theme.system_scheme_changed(prefers_dark);
        }
    });

    use_drop(|| SCHEME_LISTENER.teardown());

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store_with(
        entries: &[(&'static str, &'static str)],
        os_dark: Option<bool>,
    ) -> (ThemeStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::with_entries(entries.iter().copied());
        (
            ThemeStore::new(storage.clone(), os_dark, ThemeMode::Dark),
            storage,
        )
    }

    #[test]
    fn persisted_choice_beats_os_signal() {
        let (store, _) = store_with(&[(THEME_MODE_KEY, "dark")], Some(false));
        assert_eq!(store.mode(), ThemeMode::Dark);
        let (store, _) = store_with(&[(THEME_MODE_KEY, "light")], Some(true));
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn os_signal_used_without_persisted_choice() {
        let (store, _) = store_with(&[], Some(false));
        assert_eq!(store.mode(), ThemeMode::Light);
        let (store, _) = store_with(&[], Some(true));
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn default_used_without_any_signal() {
        let storage = MemoryStorage::new();
        assert_eq!(preferred_mode(&storage, None, ThemeMode::Light), ThemeMode::Light);
        assert_eq!(preferred_mode(&storage, None, ThemeMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn malformed_persisted_value_is_ignored() {
        let (store, _) = store_with(&[(THEME_MODE_KEY, "sepia")], Some(false));
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.has_explicit_choice());
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let (mut store, _) = store_with(&[], Some(false));
        let start = store.mode();
        store.toggle_theme();
        assert_ne!(store.mode(), start);
        store.toggle_theme();
        assert_eq!(store.mode(), start);
    }

    #[test]
    fn toggle_and_set_persist_the_choice() {
        let (mut store, storage) = store_with(&[], Some(true));
        assert_eq!(store.toggle_theme(), ThemeMode::Light);
        assert_eq!(storage.peek(THEME_MODE_KEY).as_deref(), Some("light"));
        store.set_mode(ThemeMode::Dark);
        assert_eq!(storage.peek(THEME_MODE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn startup_does_not_persist() {
        let (_, storage) = store_with(&[], Some(true));
        assert_eq!(storage.peek(THEME_MODE_KEY), None);
    }

    #[test]
    fn os_changes_followed_until_explicit_toggle() {
        let (mut store, _) = store_with(&[], Some(true));
        assert_eq!(store.mode(), ThemeMode::Dark);

        assert!(store.system_scheme_changed(false));
        assert_eq!(store.mode(), ThemeMode::Light);

        store.toggle_theme();
        assert_eq!(store.mode(), ThemeMode::Dark);

        assert!(!store.system_scheme_changed(false));
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn clearing_preference_resumes_os_tracking() {
        let (mut store, storage) = store_with(&[(THEME_MODE_KEY, "dark")], Some(false));
        assert!(!store.system_scheme_changed(false));
        assert_eq!(store.mode(), ThemeMode::Dark);

        store.clear_preference();
        assert_eq!(storage.peek(THEME_MODE_KEY), None);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(store.system_scheme_changed(true));
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn clearing_without_os_signal_keeps_mode() {
        let (mut store, _) = store_with(&[(THEME_MODE_KEY, "light")], None);
        store.clear_preference();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert!(!store.has_explicit_choice());
    }

    #[test]
    fn unchanged_os_scheme_is_not_a_change() {
        let (mut store, _) = store_with(&[], Some(true));
        assert!(!store.system_scheme_changed(true));
    }

    #[test]
    fn disabled_storage_still_toggles() {
        let mut store = ThemeStore::new(MemoryStorage::disabled(), Some(false), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.toggle_theme(), ThemeMode::Dark);
        // Nothing could be persisted, so the OS signal still wins.
        assert!(store.system_scheme_changed(false));
    }

    #[test]
    fn tokens_track_mode() {
        let (mut store, _) = store_with(&[], Some(false));
        assert_eq!(store.tokens().mode, ThemeMode::Light);
        store.toggle_theme();
        assert_eq!(store.tokens(), ThemeTokens::dark());
    }
}
