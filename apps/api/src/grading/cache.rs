//! Bounded in-memory cache for composed scores, keyed by a content hash of the CV and
//! locale. Owned by `AppState`; nothing here is process-global.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::time::Instant;
use tracing::debug;

use crate::ats::Locale;
use crate::models::cv::CvDocument;

/// Hex characters kept from the SHA-256 digest.
const KEY_LEN: usize = 16;

#[derive(Serialize)]
struct KeyMaterial<'a> {
    cv: &'a CvDocument,
    locale: Locale,
}

/// Content hash of the grading payload: rendering-only members never change the key.
pub fn cache_key(cv: &CvDocument, locale: Locale) -> Result<String, serde_json::Error> {
    let stripped = cv.stripped_for_grading();
    let bytes = serde_json::to_vec(&KeyMaterial {
        cv: &stripped,
        locale,
    })?;
    let digest = Sha256::digest(&bytes);

    let mut out = String::with_capacity(KEY_LEN);
    for b in digest.iter().take(KEY_LEN / 2) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    Ok(out)
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

pub struct TtlCache<V> {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a live entry. Expired entries are dropped on the way.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock();
        let now = Instant::now();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => {
                debug!(key, "ATS cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Inserts `value`, purging expired entries first and then, if still full, evicting
    /// the entry closest to expiry.
    pub fn insert(&self, key: String, value: V) {
        let mut entries = self.lock();
        let now = Instant::now();

        entries.retain(|_, e| e.expires_at > now);
        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let nearest = entries
                .iter()
                .min_by_key(|(_, e)| e.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(nearest) = nearest {
                entries.remove(&nearest);
            }
        }

        entries.insert(
            key,
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// A poisoned lock only means another request panicked mid-insert; the map itself is
    /// still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry<V>>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
