//! Credential persistence.
//!
//! The session store keeps exactly two string values under fixed keys
//! ([`TOKEN_KEY`], [`EMAIL_KEY`]). Persistence is injected behind
//! [`CredentialStore`] so the store works the same against a durable
//! file, an in-memory map (tests, environments without storage), or any
//! future backend. Reads degrade to "no value" on failure and writes
//! never panic: an environment without working storage behaves as a
//! stateless, always-unauthenticated session.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the identity hint (email).
pub const EMAIL_KEY: &str = "user_email";

/// Default session file name.
const SESSION_FILE_NAME: &str = "session.json";

/// Key/value persistence for session credentials.
///
/// Writes are last-writer-wins and not atomic across keys; the session
/// store always writes both keys inside one synchronous call, which is
/// sufficient for a single-user interactive client.
pub trait CredentialStore: Send + Sync {
    /// Read a value. `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value. Failures are logged, never surfaced.
    fn set(&self, key: &str, value: &str);
    /// Remove a value. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// File-backed credential store.
///
/// Persists a flat JSON map at `<data_dir>/session.json` with 0o600
/// permissions on unix. Every read goes to disk so the newest write in
/// the process wins.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by `<data_dir>/session.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("failed to read session file: {e}");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("failed to parse session file: {e}");
                BTreeMap::new()
            }
        }
    }

    fn save(&self, map: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create session dir: {e}");
                return;
            }
        }

        let json = match serde_json::to_string_pretty(map) {
            Ok(j) => j,
            Err(e) => {
                tracing::warn!("failed to serialize session file: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, &json) {
            tracing::warn!("failed to write session file: {e}");
            return;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&self.path, perms);
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.load();
        let _ = map.insert(key.to_string(), value.to_string());
        self.save(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.load();
        if map.remove(key).is_some() {
            self.save(&map);
        }
    }
}

/// In-memory credential store.
///
/// Fallback for tests and environments without durable storage; state
/// lives only as long as the process.
#[derive(Default)]
pub struct MemoryCredentialStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self
            .values
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let _ = self.values.write().remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
