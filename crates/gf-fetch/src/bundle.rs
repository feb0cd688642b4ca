//! Fetching a league's fixed set of resources as one bundle.

use crate::cache::RequestCache;
use crate::client::{ApiClient, Params};
use crate::error::{FetchError, FetchResult};
use futures::future::try_join_all;
use serde_json::Value;
use std::sync::Arc;

/// One resource of a collection: a name plus the request that fetches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub name: &'static str,
    pub endpoint: String,
    pub params: Params,
}

/// Resources fetched for a league, in bundle order.
pub const LEAGUE_RESOURCES: &[(&str, &str)] = &[
    ("league", ""),
    ("teams", "/teams"),
    ("rosters", "/rosters"),
    ("players", "/players"),
    ("matchups", "/scoreboard"),
    ("standings", "/standings"),
    ("transactions", "/transactions"),
];

/// Requests making up the bundle of league `league_key`.
pub fn league_resources(league_key: &str) -> Vec<ResourceRequest> {
    LEAGUE_RESOURCES
        .iter()
        .map(|&(name, suffix)| ResourceRequest {
            name,
            endpoint: format!("league/{}{}", league_key, suffix),
            params: Params::new(),
        })
        .collect()
}

/// A fetched resource together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedResource {
    pub name: &'static str,
    pub endpoint: String,
    pub params: Params,
    pub body: Value,
    /// Served from the request cache rather than the network
    pub from_cache: bool,
}

/// All resources of one collection, in resource-table order.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub collection_key: String,
    resources: Vec<FetchedResource>,
}

impl Bundle {
    pub fn new(collection_key: impl Into<String>, resources: Vec<FetchedResource>) -> Self {
        Self {
            collection_key: collection_key.into(),
            resources,
        }
    }

    pub fn resources(&self) -> &[FetchedResource] {
        &self.resources
    }

    /// Raw body of the named resource.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.resources
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.body)
    }

    /// `(name, body)` pairs, in bundle order.
    pub fn bodies(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.resources.iter().map(|r| (r.name, &r.body))
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Number of resources served from the cache.
    pub fn cached_count(&self) -> usize {
        self.resources.iter().filter(|r| r.from_cache).count()
    }
}

/// Fetches bundles through the request cache.
pub struct BundleFetcher {
    client: Arc<dyn ApiClient>,
    cache: RequestCache,
    read_cache: bool,
}

impl BundleFetcher {
    pub fn new(client: Arc<dyn ApiClient>, cache: RequestCache) -> Self {
        Self {
            client,
            cache,
            read_cache: true,
        }
    }

    /// Skip cache lookups so every resource is fetched fresh. Fresh bodies
    /// are still written through.
    pub fn without_cache(mut self) -> Self {
        self.read_cache = false;
        self
    }

    /// Fetch every resource of the league `collection_key` concurrently.
    ///
    /// Any failing resource fails the whole bundle; resources already
    /// written to the cache stay there.
    pub async fn fetch_bundle(&self, collection_key: &str) -> FetchResult<Bundle> {
        let requests = league_resources(collection_key);
        log::info!(
            "Fetching {} resources for {}",
            requests.len(),
            collection_key
        );
        let resources = try_join_all(requests.into_iter().map(|r| self.fetch_resource(r))).await?;
        let bundle = Bundle::new(collection_key, resources);
        log::info!(
            "Fetched bundle for {} ({} from cache)",
            collection_key,
            bundle.cached_count()
        );
        Ok(bundle)
    }

    /// Fetch a single resource, consulting the cache first.
    pub async fn fetch_resource(&self, request: ResourceRequest) -> FetchResult<FetchedResource> {
        let ResourceRequest {
            name,
            endpoint,
            params,
        } = request;

        if self.read_cache {
            if let Some(body) = self.cache.get(&endpoint, &params).await {
                return Ok(FetchedResource {
                    name,
                    endpoint,
                    params,
                    body,
                    from_cache: true,
                });
            }
        }

        let response = self.client.get(&endpoint, &params).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status: response.status,
                body: response.body,
            });
        }
        let body: Value = match serde_json::from_str(&response.body) {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Decode { endpoint, source }),
        };

        if body.is_object() {
            if let Err(e) = self.cache.put(&endpoint, &params, &body).await {
                log::warn!("Could not cache {}: {}", endpoint, e);
            }
        }

        Ok(FetchedResource {
            name,
            endpoint,
            params,
            body,
            from_cache: false,
        })
    }
}

#[cfg(test)]
#[path = "bundle_test.rs"]
mod tests;
