//! gf-fetch - Fetch layer for gridfeed
//!
//! This crate provides the `ApiClient` boundary trait with a reqwest
//! implementation, the on-disk `RequestCache`, and the `BundleFetcher` that
//! pulls a league's resources concurrently.

pub mod bundle;
pub mod cache;
pub mod client;
pub mod error;

pub use bundle::{league_resources, Bundle, BundleFetcher, FetchedResource, ResourceRequest};
pub use cache::RequestCache;
pub use client::{ApiClient, ApiResponse, HttpApiClient, Params};
pub use error::{FetchError, FetchResult};
