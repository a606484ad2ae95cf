//! Persistent preferences using redb.
//!
//! Only the selected theme name is stored today, under the `selectedTheme`
//! key of a single string table.

use crate::error::CvError;
use crate::theme::SELECTED_THEME_KEY;
use parking_lot::RwLock;
use redb::{Database, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// Durable key/value storage for client preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CvError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CvError>;

    /// Name of the last applied theme, if any.
    fn load_theme_name(&self) -> Result<Option<String>, CvError> {
        self.get(SELECTED_THEME_KEY)
    }

    fn save_theme_name(&self, name: &str) -> Result<(), CvError> {
        self.set(SELECTED_THEME_KEY, name)
    }
}

/// Preference storage backed by a redb file.
#[derive(Clone)]
pub struct Preferences {
    db: Arc<RwLock<Database>>,
}

impl Preferences {
    /// Open (or create) the preference database at the given path.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CvError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl PreferenceStore for Preferences {
    fn get(&self, key: &str) -> Result<Option<String>, CvError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CvError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preferences, lost when dropped.
#[derive(Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, CvError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CvError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_preferences() -> (Preferences, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");
        let prefs = Preferences::open(&db_path).unwrap();
        (prefs, temp_dir)
    }

    #[test]
    fn test_preferences_create_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/prefs.redb");
        assert!(Preferences::open(&db_path).is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_missing_theme_name_is_none() {
        let (prefs, _temp) = create_test_preferences();
        assert_eq!(prefs.load_theme_name().unwrap(), None);
    }

    #[test]
    fn test_theme_name_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.redb");

        {
            let prefs = Preferences::open(&db_path).unwrap();
            prefs.save_theme_name("Oceanic Teal").unwrap();
        }

        let reopened = Preferences::open(&db_path).unwrap();
        assert_eq!(
            reopened.load_theme_name().unwrap().as_deref(),
            Some("Oceanic Teal")
        );
    }

    #[test]
    fn test_set_overwrites() {
        let (prefs, _temp) = create_test_preferences();
        prefs.save_theme_name("Deep Violet").unwrap();
        prefs.save_theme_name("Warm Orange").unwrap();
        assert_eq!(prefs.get(SELECTED_THEME_KEY).unwrap().as_deref(), Some("Warm Orange"));
    }

    #[test]
    fn test_memory_preferences_are_shared_between_clones() {
        let prefs = MemoryPreferences::new();
        let other = prefs.clone();
        prefs.save_theme_name("Crimson Red").unwrap();
        assert_eq!(other.load_theme_name().unwrap().as_deref(), Some("Crimson Red"));
    }
}
