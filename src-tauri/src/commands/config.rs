use std::sync::Arc;

use tauri::{AppHandle, Runtime};
use tauri_plugin_store::{Store, StoreExt};
use tracing::{info, warn};

use crate::error::SkillPathError;
use crate::preferences::{self, PreferenceBackend, UiPreferences, STORE_FILE};

struct PluginStore<R: Runtime>(Arc<Store<R>>);

impl<R: Runtime> PreferenceBackend for PluginStore<R> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SkillPathError> {
        self.0.set(key, serde_json::json!(value));
        self.0.save().map_err(|e| {
            warn!("Failed to save store: {}", e);
            SkillPathError::Store(e.to_string())
        })
    }
}

fn open_store<R: Runtime>(app: &AppHandle<R>) -> Result<PluginStore<R>, SkillPathError> {
    app.store(STORE_FILE).map(PluginStore).map_err(|e| {
        warn!("Failed to open store: {}", e);
        SkillPathError::Store(e.to_string())
    })
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    let store = open_store(&app)?;
    preferences::write_preference(&store, key, value).map_err(|e| {
        warn!("Rejected preference {}: {}", key, e);
        e.into()
    })
}

#[tauri::command]
pub fn get_ui_preferences(app: AppHandle) -> Result<UiPreferences, String> {
    info!("Loading UI preferences");
    let store = open_store(&app)?;
    Ok(preferences::read_ui_preferences(&store))
}
