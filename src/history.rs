//! Durable storage for the roll history.
//!
//! Only the history survives a session: the transient rolling/settled/cycle
//! state is never persisted, so a fresh session has no in-flight rolls.
//! History is written as JSON under a versioned storage key inside the
//! platform's app-data directory. The store treats every failure here as
//! non-fatal; a missing or unreadable file simply loads as empty history.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::RollSnapshot;

/// Versioned storage key for the persisted roll history.
pub const HISTORY_STORAGE_KEY: &str = "roll_history_v1";

/// App data folder name.
const APP_DATA_FOLDER: &str = "DiceTray";

/// Backing store for the roll history.
///
/// Persistence transports beyond the JSON file below (sync services, remote
/// stores) plug in here; the lifecycle store never blocks on them and never
/// rolls back an in-memory append when a save fails.
pub trait HistoryStore {
    /// Load the persisted history. Missing backing data is an empty history,
    /// not an error.
    fn load(&mut self) -> Result<Vec<RollSnapshot>, String>;

    /// Persist the full history, replacing any previous contents.
    fn save(&mut self, history: &[RollSnapshot]) -> Result<(), String>;
}

/// History persisted as a single JSON file in the app-data directory.
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Open the store at the platform app-data location, creating the
    /// directory if needed.
    pub fn open() -> Result<Self, String> {
        let data_dir = Self::get_data_dir()?;
        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create app data directory {data_dir:?}: {e}"))?;
        Ok(Self {
            path: data_dir.join(format!("{HISTORY_STORAGE_KEY}.json")),
        })
    }

    /// Open the store at a specific file path (for testing).
    pub fn open_at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the app data directory for storing the history file.
    /// Uses LocalAppData on Windows and the XDG data dir on Linux.
    fn get_data_dir() -> Result<PathBuf, String> {
        #[cfg(target_os = "windows")]
        {
            if let Ok(local_app_data) = std::env::var("LOCALAPPDATA") {
                return Ok(PathBuf::from(local_app_data).join(APP_DATA_FOLDER));
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(home) = std::env::var("HOME") {
                return Ok(PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join(APP_DATA_FOLDER));
            }
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
                return Ok(PathBuf::from(data_home).join(APP_DATA_FOLDER));
            }
            if let Ok(home) = std::env::var("HOME") {
                return Ok(PathBuf::from(home)
                    .join(".local")
                    .join("share")
                    .join(APP_DATA_FOLDER));
            }
        }

        std::env::current_dir().map_err(|e| format!("Failed to resolve a data directory: {e}"))
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn load(&mut self) -> Result<Vec<RollSnapshot>, String> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;
        serde_json::from_str(&raw).map_err(|e| format!("Failed to decode roll history: {e}"))
    }

    fn save(&mut self, history: &[RollSnapshot]) -> Result<(), String> {
        let json = serde_json::to_string(history)
            .map_err(|e| format!("Failed to encode roll history: {e}"))?;
        fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryHistoryStore {
    snapshots: Vec<RollSnapshot>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshots(snapshots: Vec<RollSnapshot>) -> Self {
        Self { snapshots }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn load(&mut self) -> Result<Vec<RollSnapshot>, String> {
        Ok(self.snapshots.clone())
    }

    fn save(&mut self, history: &[RollSnapshot]) -> Result<(), String> {
        self.snapshots = history.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DieId, SettledDie, Shape};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn sample_history() -> Vec<RollSnapshot> {
        vec![RollSnapshot {
            dice: vec![SettledDie {
                id: DieId::new("d1"),
                value: 17,
                shape: Shape::D20,
                settled_at: 123,
            }],
            sum: 17,
            timestamp: 124,
        }]
    }

    fn temp_history_path() -> PathBuf {
        // Unique file under the OS temp dir.
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!("dicetray-test-{ts}-{HISTORY_STORAGE_KEY}.json"))
    }

    #[test]
    fn test_missing_file_loads_as_empty_history() {
        let mut store = JsonFileHistoryStore::open_at(temp_history_path());
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_json_file_round_trip() {
        let path = temp_history_path();
        let history = sample_history();

        {
            let mut store = JsonFileHistoryStore::open_at(path.clone());
            store.save(&history).unwrap();
        }
        {
            let mut store = JsonFileHistoryStore::open_at(path.clone());
            assert_eq!(store.load().unwrap(), history);
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_panic() {
        let path = temp_history_path();
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileHistoryStore::open_at(path.clone());
        assert!(store.load().is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_in_memory_round_trip() {
        let mut store = InMemoryHistoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let history = sample_history();
        store.save(&history).unwrap();
        assert_eq!(store.load().unwrap(), history);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
