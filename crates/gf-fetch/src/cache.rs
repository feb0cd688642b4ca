//! On-disk cache of raw API responses.
//!
//! One file per request at `<dir>/<key>.json`, where the key is the SHA-256
//! of the endpoint and its sorted query parameters. Entries never expire;
//! `gf clean` removes them.

use crate::client::Params;
use crate::error::{FetchError, FetchResult};
use gf_core::compute_checksum;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Content-addressed store of response bodies.
#[derive(Debug, Clone)]
pub struct RequestCache {
    dir: PathBuf,
}

impl RequestCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Key for a request. Parameter order never affects the key.
    pub fn cache_key(endpoint: &str, params: &Params) -> String {
        compute_checksum(&key_material(endpoint, params))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Look up a cached body.
    ///
    /// A missing file is a miss. So is an unreadable or corrupt one, which is
    /// logged and left in place to be overwritten by the next fetch.
    pub async fn get(&self, endpoint: &str, params: &Params) -> Option<Value> {
        let path = self.path_for(&Self::cache_key(endpoint, params));
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Ignoring unreadable cache entry {}: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => {
                log::debug!("Cache hit for {}", endpoint);
                Some(value)
            }
            Err(e) => {
                log::warn!("Ignoring corrupt cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Store a body, replacing any previous entry for the same request.
    pub async fn put(&self, endpoint: &str, params: &Params, body: &Value) -> FetchResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| cache_io(&self.dir, e))?;
        let path = self.path_for(&Self::cache_key(endpoint, params));
        let content = serde_json::to_string(body).map_err(|e| FetchError::CacheIo {
            path: path.display().to_string(),
            source: e.into(),
        })?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| cache_io(&path, e))
    }

    /// Paths of every cache entry. Blocking; meant for maintenance commands.
    ///
    /// Files not ending in `.json` are not entries. A missing directory
    /// counts as an empty cache.
    pub fn entries(&self) -> FetchResult<Vec<PathBuf>> {
        let dir = match fs::read_dir(&self.dir) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(cache_io(&self.dir, e)),
        };
        let mut entries = Vec::new();
        for entry in dir {
            let path = entry.map_err(|e| cache_io(&self.dir, e))?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                entries.push(path);
            }
        }
        entries.sort();
        Ok(entries)
    }

    /// Remove every cache entry, returning how many were removed.
    pub fn clear(&self) -> FetchResult<usize> {
        let entries = self.entries()?;
        for path in &entries {
            fs::remove_file(path).map_err(|e| cache_io(path, e))?;
        }
        Ok(entries.len())
    }
}

/// `endpoint.trim()` plus `?k=v&k=v` over the sorted parameters, if any.
fn key_material(endpoint: &str, params: &Params) -> String {
    let endpoint = endpoint.trim();
    if params.is_empty() {
        return endpoint.to_string();
    }
    let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", endpoint, query.join("&"))
}

fn cache_io(path: &Path, source: std::io::Error) -> FetchError {
    FetchError::CacheIo {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
