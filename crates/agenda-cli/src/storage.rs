//! Flat-file JSON persistence: `events.json`, `users.json`,
//! `settings.json` under one data directory.
//!
//! Every save is a whole-file pretty-printed overwrite. Loads are
//! forgiving: a missing or undecodable file yields defaults, and an
//! individually malformed record is skipped with a single warning per
//! file instead of poisoning the rest of the collection.

use std::fs;
use std::path::{Path, PathBuf};

use agenda_core::Event;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::auth::User;

const EVENTS_FILE: &str = "events.json";
const USERS_FILE: &str = "users.json";
const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub user_location: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            user_location: String::new(),
        }
    }
}

/// Handle to the data directory holding the three JSON files.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn load_events(&self) -> Vec<Event> {
        load_records(&self.path(EVENTS_FILE))
    }

    pub fn save_events(&self, events: &[Event]) -> anyhow::Result<()> {
        self.save(EVENTS_FILE, events)
    }

    pub fn load_users(&self) -> Vec<User> {
        load_records(&self.path(USERS_FILE))
    }

    pub fn save_users(&self, users: &[User]) -> anyhow::Result<()> {
        self.save(USERS_FILE, users)
    }

    pub fn load_settings(&self) -> Settings {
        let path = self.path(SETTINGS_FILE);
        let Ok(raw) = fs::read_to_string(&path) else {
            return Settings::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(file = %path.display(), %err, "unreadable settings, using defaults");
            Settings::default()
        })
    }

    pub fn save_settings(&self, settings: &Settings) -> anyhow::Result<()> {
        self.save(SETTINGS_FILE, settings)
    }

    fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(name), json)?;
        Ok(())
    }
}

/// Load an array of records, salvaging what parses. Records that fail to
/// decode are dropped, counted, and reported once.
fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            warn!(file = %path.display(), %err, "unreadable file, starting empty");
            return Vec::new();
        }
    };

    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    let skipped = total - records.len();
    if skipped > 0 {
        warn!(file = %path.display(), skipped, "skipped malformed records");
    }
    records
}
