//! UI-facing state container.

use uuid::Uuid;

use crate::api_client::App;

/// Holds the last-fetched record list, the currently viewed record, and
/// transient loading/error flags. Transitions are pure; all I/O happens in
/// the gateway, and this cache is reconciled by reloading rather than
/// trusted as source of truth.
///
/// Constructed and owned by the caller; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    apps: Vec<App>,
    current_app: Option<App>,
    loading: bool,
    error: Option<String>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn current_app(&self) -> Option<&App> {
        self.current_app.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the whole list with a fresh fetch.
    pub fn set_apps(&mut self, apps: Vec<App>) {
        self.apps = apps;
    }

    pub fn add_app(&mut self, app: App) {
        self.apps.push(app);
    }

    pub fn remove_app(&mut self, id: Uuid) {
        self.apps.retain(|app| app.id != id);
    }

    pub fn set_current_app(&mut self, app: Option<App>) {
        self.current_app = app;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_app(name: &str) -> App {
        let now = Utc::now();
        App {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn set_apps_replaces_the_list() {
        let mut store = AppStore::new();
        store.add_app(sample_app("stale"));

        let fresh = vec![sample_app("a"), sample_app("b")];
        store.set_apps(fresh.clone());
        assert_eq!(store.apps(), fresh.as_slice());
    }

    #[test]
    fn add_app_appends() {
        let mut store = AppStore::new();
        store.add_app(sample_app("first"));
        store.add_app(sample_app("second"));

        let names: Vec<&str> = store.apps().iter().map(|app| app.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn remove_app_filters_by_id() {
        let mut store = AppStore::new();
        let keep = sample_app("keep");
        let drop = sample_app("drop");
        store.set_apps(vec![keep.clone(), drop.clone()]);

        store.remove_app(drop.id);
        assert_eq!(store.apps(), std::slice::from_ref(&keep));

        // Removing an unknown id is a no-op.
        store.remove_app(Uuid::new_v4());
        assert_eq!(store.apps().len(), 1);
    }

    #[test]
    fn current_app_and_flags_round_trip() {
        let mut store = AppStore::new();
        assert!(store.current_app().is_none());
        assert!(!store.loading());
        assert!(store.error().is_none());

        let app = sample_app("current");
        store.set_current_app(Some(app.clone()));
        store.set_loading(true);
        store.set_error(Some("request failed".to_string()));

        assert_eq!(store.current_app(), Some(&app));
        assert!(store.loading());
        assert_eq!(store.error(), Some("request failed"));

        store.set_current_app(None);
        store.set_loading(false);
        store.set_error(None);
        assert!(store.current_app().is_none());
        assert!(!store.loading());
        assert!(store.error().is_none());
    }
}
