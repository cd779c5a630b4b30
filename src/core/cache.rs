//! Freshness-checked cache for derived repository state.
//!
//! [`FreshnessCache`] stores caller-computed values under string keys together with
//! a fingerprint: the modification time of every watched path (relative to a caller
//! supplied root, normally the git directory) observed when the value was stored. A
//! read is valid only while every watched path still has the recorded mtime. A path
//! that appeared or disappeared since the write is a mismatch.
//!
//! # Public API
//! - [`FreshnessCache`]: Independent cache instance
//! - [`global`] / [`reset_global`] / [`install_global`]: Process-wide instance
//! - [`MtimeProbe`]: Filesystem stat capability used for fingerprinting
//!
//! # Semantics
//! - **No eviction on staleness**: a stale entry reads as `(None, false)` but stays
//!   stored until [`FreshnessCache::invalidate`] or [`FreshnessCache::invalidate_all`]
//! - **Full replacement**: `set` on an existing key re-captures the fingerprint
//! - **Swap, not clear**: [`reset_global`] installs a new empty instance; holders of
//!   the previous `Arc` keep seeing its data
//! - **No get-or-compute**: two racing misses may both recompute, the later `set` wins

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};
use std::time::SystemTime;

/// Marker files, relative to the git directory, watched by default
pub const DEFAULT_WATCHED_PATHS: &[&str] = &[
    "HEAD",
    "index",
    "logs/HEAD",
    "rebase-merge/done",
    "rebase-merge/git-rebase-todo",
];

/// Modification time of every watched path; `None` marks a path that did not exist
pub type Fingerprint = BTreeMap<PathBuf, Option<SystemTime>>;

/// Source of modification times
pub trait MtimeProbe: Send + Sync {
    fn modified(&self, path: &Path) -> Option<SystemTime>;
}

/// [`MtimeProbe`] backed by `std::fs::metadata`
#[derive(Debug, Default)]
pub struct FsMtimeProbe;

impl MtimeProbe for FsMtimeProbe {
    fn modified(&self, path: &Path) -> Option<SystemTime> {
        fs::metadata(path).and_then(|meta| meta.modified()).ok()
    }
}

struct CacheEntry {
    payload: Arc<dyn Any + Send + Sync>,
    fingerprint: Fingerprint,
}

pub struct FreshnessCache {
    watched: Vec<PathBuf>,
    probe: Box<dyn MtimeProbe>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FreshnessCache {
    /// Cache watching [`DEFAULT_WATCHED_PATHS`]
    pub fn new() -> Self {
        Self::with_watched_paths(DEFAULT_WATCHED_PATHS.iter().map(PathBuf::from))
    }

    /// Cache watching the given relative paths. An empty set makes every stored entry
    /// valid until invalidated.
    pub fn with_watched_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_probe(paths, FsMtimeProbe)
    }

    pub fn with_probe<I, P>(paths: I, probe: impl MtimeProbe + 'static) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            watched: paths.into_iter().map(Into::into).collect(),
            probe: Box::new(probe),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn watched_paths(&self) -> &[PathBuf] {
        &self.watched
    }

    /// Look up `key`, checking freshness against `root`.
    ///
    /// Returns `(Some(payload), true)` for a fresh entry and `(None, false)` when the
    /// key is missing, stale, or holds a payload of a different type.
    pub fn get<T>(&self, key: &str, root: &Path) -> (Option<T>, bool)
    where
        T: Clone + Send + Sync + 'static,
    {
        let entries = self.lock();
        let Some(entry) = entries.get(key) else {
            log::debug!("Cache miss for '{key}'");
            return (None, false);
        };

        if !self.is_fresh(&entry.fingerprint, root) {
            log::debug!("Cache entry '{key}' is stale");
            return (None, false);
        }

        match entry.payload.downcast_ref::<T>() {
            Some(payload) => {
                log::debug!("Cache hit for '{key}'");
                (Some(payload.clone()), true)
            }
            None => {
                log::warn!(
                    "Cache entry '{key}' does not hold a {}",
                    std::any::type_name::<T>()
                );
                (None, false)
            }
        }
    }

    /// Store `payload` under `key`, fingerprinting the watched paths under `root`
    pub fn set<T>(&self, key: impl Into<String>, root: &Path, payload: T)
    where
        T: Send + Sync + 'static,
    {
        let key = key.into();
        let fingerprint = self.fingerprint(root);
        log::debug!(
            "Caching '{key}' with {} watched paths under {}",
            fingerprint.len(),
            root.display()
        );
        self.lock().insert(
            key,
            CacheEntry {
                payload: Arc::new(payload),
                fingerprint,
            },
        );
    }

    /// Whether `key` holds an entry that is fresh under `root`, regardless of its type
    pub fn is_valid(&self, key: &str, root: &Path) -> bool {
        self.lock()
            .get(key)
            .is_some_and(|entry| self.is_fresh(&entry.fingerprint, root))
    }

    pub fn invalidate(&self, key: &str) {
        if self.lock().remove(key).is_some() {
            log::debug!("Invalidated cache entry '{key}'");
        }
    }

    pub fn invalidate_all(&self) {
        let mut entries = self.lock();
        log::debug!("Invalidating all {} cache entries", entries.len());
        entries.clear();
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Current fingerprint of the watched paths under `root`
    pub fn fingerprint(&self, root: &Path) -> Fingerprint {
        self.watched
            .iter()
            .map(|relative| (relative.clone(), self.probe.modified(&root.join(relative))))
            .collect()
    }

    fn is_fresh(&self, recorded: &Fingerprint, root: &Path) -> bool {
        recorded
            .iter()
            .all(|(relative, mtime)| self.probe.modified(&root.join(relative)) == *mtime)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // Entries are replaced whole, so a panic mid-operation cannot leave one torn
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FreshnessCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FreshnessCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreshnessCache")
            .field("watched", &self.watched)
            .field("entries", &self.len())
            .finish()
    }
}

static GLOBAL_CACHE: OnceLock<RwLock<Arc<FreshnessCache>>> = OnceLock::new();

fn global_slot() -> &'static RwLock<Arc<FreshnessCache>> {
    GLOBAL_CACHE.get_or_init(|| RwLock::new(Arc::new(FreshnessCache::new())))
}

/// The process-wide cache, created with default watched paths on first use
pub fn global() -> Arc<FreshnessCache> {
    global_slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide cache with a new empty one using default watched paths.
/// The previous instance is left untouched.
pub fn reset_global() -> Arc<FreshnessCache> {
    install_global(FreshnessCache::new())
}

/// Replace the process-wide cache with `cache`, returning the newly installed instance
pub fn install_global(cache: FreshnessCache) -> Arc<FreshnessCache> {
    let fresh = Arc::new(cache);
    let mut slot = global_slot()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = Arc::clone(&fresh);
    log::debug!("Installed new global cache watching {:?}", fresh.watched);
    fresh
}
