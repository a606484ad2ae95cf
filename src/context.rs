//! Form context provider for CV Forge.
//!
//! Provides the form controller and the backend client to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut form = use_form();
//! form.write().add_row();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use cvforge_core::{
    ClientConfig, FormController, GenerateClient, MemoryPreferences, PreferenceStore, Preferences,
};
use dioxus::prelude::*;

/// File name of the preference database inside the data directory.
const PREFERENCES_FILE: &str = "preferences.redb";

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the backend configuration for the application.
pub fn get_client_config() -> ClientConfig {
    crate::get_client_config()
}

/// Open the preference store, falling back to memory if the file is unusable.
///
/// A broken store only costs theme persistence, so the app still starts.
pub fn open_preferences() -> Arc<dyn PreferenceStore> {
    let path = get_data_dir().join(PREFERENCES_FILE);
    match Preferences::open(&path) {
        Ok(prefs) => Arc::new(prefs),
        Err(e) => {
            tracing::error!("Failed to open preferences at {:?}: {}", path, e);
            Arc::new(MemoryPreferences::new())
        }
    }
}

/// Build the controller for a fresh window.
pub fn new_form_controller() -> FormController {
    FormController::new(get_client_config(), open_preferences())
}

/// Hook to access the form controller from context.
pub fn use_form() -> Signal<FormController> {
    use_context::<Signal<FormController>>()
}

/// Hook to access the backend client from context.
pub fn use_client() -> GenerateClient {
    use_context::<GenerateClient>()
}
