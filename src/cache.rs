//! Offline copy of content API responses.
//!
//! Bodies are stored under `{cache_dir}/api/` using the SHA-256 of the request
//! URL as the filename to avoid filesystem issues. Only responses that passed
//! envelope validation are written, so a cached body is always usable.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    enabled: bool,
}

impl ResponseCache {
    pub fn new(cache_root: &Path, enabled: bool) -> Self {
        Self {
            dir: cache_root.join("api"),
            enabled,
        }
    }

    pub fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Previously stored body for `url`, if any.
    pub fn load(&self, url: &str) -> Option<Vec<u8>> {
        if !self.enabled {
            return None;
        }
        fs::read(self.entry_path(url)).ok()
    }

    /// Persist a body for `url`. Errors are ignored to keep the UI responsive.
    pub fn store(&self, url: &str, body: &[u8]) {
        if !self.enabled {
            return;
        }
        if let Err(err) = fs::create_dir_all(&self.dir) {
            debug!(dir = %self.dir.display(), "Skipping response cache write: {err}");
            return;
        }
        let path = self.entry_path(url);
        let tmp = path.with_extension("json.tmp");
        let written = fs::write(&tmp, body).and_then(|_| fs::rename(&tmp, &path));
        if let Err(err) = written {
            debug!(path = %path.display(), "Failed to cache response: {err}");
            let _ = fs::remove_file(&tmp);
        }
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        self.dir.join(format!("{:x}.json", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "quran-companion-cache-{tag}-{}",
            std::process::id()
        ))
    }

    #[test]
    fn stored_body_is_returned_for_same_url_only() {
        let root = temp_root("roundtrip");
        let cache = ResponseCache::new(&root, true);
        cache.store("https://example.test/v1/surah", b"{\"a\":1}");
        assert_eq!(
            cache.load("https://example.test/v1/surah").as_deref(),
            Some(&b"{\"a\":1}"[..])
        );
        assert!(cache.load("https://example.test/v1/surah/2").is_none());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn disabled_cache_never_writes() {
        let root = temp_root("disabled");
        let cache = ResponseCache::new(&root, false);
        cache.store("https://example.test/v1/surah", b"{}");
        assert!(cache.load("https://example.test/v1/surah").is_none());
        assert!(!root.join("api").exists());
    }
}
