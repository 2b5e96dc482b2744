//! Process-wide network cache.
//!
//! ## Purpose
//!
//! This module memoizes compiled networks by `(width, algorithm)` so hot
//! paths that sort many same-width buffers pay the derivation cost once per
//! process. Networks are immutable after construction, so the returned
//! `Arc<Network>` can be applied concurrently to independent buffers without
//! further locking.
//!
//! ## Design notes
//!
//! * **std only**: the cache needs `OnceLock` and `Mutex`; `no_std` callers
//!   compile their own networks and share them however they like.
//! * **Lock scope**: the mutex guards only the map lookup and insert, never
//!   network execution.
//!
//! ## Invariants
//!
//! * Repeated calls with the same key return clones of the same `Arc`.
//! * An invalid `(width, algorithm)` combination never populates the map.

// External dependencies (std)
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};

// Internal dependencies
use crate::engine::network::Network;
use crate::networks::Algorithm;
use crate::primitives::errors::NetworkError;

type CacheMap = BTreeMap<(usize, Algorithm), Arc<Network>>;

static CACHE: OnceLock<Mutex<CacheMap>> = OnceLock::new();

/// Fetch the shared network for `(width, algorithm)`, compiling it on first
/// use.
pub fn shared(width: usize, algorithm: Algorithm) -> Result<Arc<Network>, NetworkError> {
    let cache = CACHE.get_or_init(|| Mutex::new(BTreeMap::new()));

    // A poisoned lock means a panic during a previous insert; the map holds
    // only fully constructed networks, so the data is still usable.
    let mut map = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    if let Some(network) = map.get(&(width, algorithm)) {
        return Ok(Arc::clone(network));
    }

    let network = Arc::new(Network::with_algorithm(algorithm, width)?);
    map.insert((width, algorithm), Arc::clone(&network));
    Ok(network)
}
