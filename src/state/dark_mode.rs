// src/state/dark_mode.rs
use crate::constants::{DARK_MODE_CLASS, DARK_MODE_STORAGE_KEY};
use crate::infrastructure::storage::KeyValueStore;
use crate::state::{Observable, Subscription};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Something that carries on/off styling flags, like the class list of a
/// document root element.
pub trait StyleTarget: Send + Sync {
    fn set_class(&self, class: &str, enabled: bool);
}

/// Class list of the presentation root
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    classes: Arc<Mutex<BTreeSet<String>>>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(class)
    }
}

impl StyleTarget for DocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.lock().unwrap_or_else(PoisonError::into_inner);
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

/// Dark-mode preference.
///
/// The initial value comes from storage when a value was persisted, otherwise
/// from the host preference. Each write is persisted as a JSON boolean and
/// mirrored onto the style target; reads have no side effects.
#[derive(Debug, Clone)]
pub struct DarkMode {
    value: Observable<bool>,
}

impl DarkMode {
    pub fn init(
        storage: Arc<dyn KeyValueStore>,
        style: Arc<dyn StyleTarget>,
        host_prefers_dark: bool,
    ) -> Self {
        let initial = stored_preference(storage.as_ref()).unwrap_or(host_prefers_dark);
        debug!(initial, host_prefers_dark, "Resolved dark mode preference");
        style.set_class(DARK_MODE_CLASS, initial);

        let value = Observable::new(initial);
        value.on_write(move |enabled: &bool| {
            let encoded = if *enabled { "true" } else { "false" };
            if let Err(e) = storage.set_item(DARK_MODE_STORAGE_KEY, encoded) {
                warn!(error = %e, "Failed to persist dark mode preference");
            }
        });
        value.on_write(move |enabled: &bool| style.set_class(DARK_MODE_CLASS, *enabled));

        Self { value }
    }

    /// Preference holder without persistence or styling
    pub fn detached(initial: bool) -> Self {
        Self {
            value: Observable::new(initial),
        }
    }

    pub fn get(&self) -> bool {
        self.value.get()
    }

    pub fn set(&self, enabled: bool) {
        self.value.set(enabled);
    }

    pub fn toggle(&self) {
        self.value.update(|enabled| !enabled);
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription<bool>
    where
        F: Fn(&bool) + Send + Sync + 'static,
    {
        self.value.subscribe(callback)
    }
}

impl Default for DarkMode {
    fn default() -> Self {
        Self::detached(false)
    }
}

fn stored_preference(storage: &dyn KeyValueStore) -> Option<bool> {
    let raw = match storage.get_item(DARK_MODE_STORAGE_KEY) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            warn!(error = %e, "Failed to read dark mode preference");
            return None;
        }
    };
    match serde_json::from_str::<bool>(&raw) {
        Ok(enabled) => Some(enabled),
        Err(e) => {
            warn!(%raw, error = %e, "Ignoring malformed dark mode preference");
            None
        }
    }
}
