mod commands;
pub mod error;
pub mod preferences;

pub use error::SkillPathError;
pub use preferences::{PreferenceBackend, PreferenceKey, UiPreferences};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::set_preference,
            commands::config::get_ui_preferences,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
