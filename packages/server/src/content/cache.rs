use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(n) => n,
    None => unreachable!(),
};

/// Rendered HTML keyed by request path.
///
/// Purely derived from the store: dropping any entry only costs a re-render.
/// Every invalidation bumps a generation counter; a rendering produced from
/// reads that began before an invalidation is refused on insert.
#[derive(Clone)]
pub struct RenderCache {
    inner: Arc<Mutex<Entries>>,
}

struct Entries {
    lru: LruCache<String, String>,
    generation: u64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RenderCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Entries {
                lru: LruCache::new(capacity),
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Public path a page is served at.
    pub fn public_path(slug: &str) -> String {
        if slug == crate::seed::HOME_SLUG {
            "/".to_string()
        } else {
            format!("/{slug}")
        }
    }

    pub fn editor_path(slug: &str) -> String {
        format!("/admin/pages/{slug}")
    }

    /// Current generation. Take it before reading the store for a rendering
    /// and hand it back to [`RenderCache::insert`].
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.lock().lru.get(path).cloned()
    }

    /// Cache `html` unless an invalidation happened since `generation` was
    /// taken. Returns whether the entry was stored.
    pub fn insert(&self, path: impl Into<String>, html: String, generation: u64) -> bool {
        let mut entries = self.lock();
        if entries.generation != generation {
            tracing::debug!(
                taken = generation,
                current = entries.generation,
                "Discarded rendering from before an invalidation"
            );
            return false;
        }
        entries.lru.put(path.into(), html);
        true
    }

    /// Drop the public and editor renderings of a page. Returns the paths
    /// that were invalidated, whether or not they were cached.
    pub fn invalidate_page(&self, slug: &str) -> Vec<String> {
        let paths = vec![Self::public_path(slug), Self::editor_path(slug)];
        let mut entries = self.lock();
        entries.generation += 1;
        for path in &paths {
            entries.lru.pop(path);
        }
        tracing::debug!(?paths, generation = entries.generation, "Invalidated cached renderings");
        paths
    }

    pub fn len(&self) -> usize {
        self.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
