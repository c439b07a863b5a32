use std::{
    collections::HashMap,
    fmt,
    hash::Hash,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result as Fallible;
use barbuzz_core::gateways::places::{PlaceDetails, PlacesGateway};
use parking_lot::Mutex;

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug)]
struct Entry<V> {
    expires_at: Instant,
    value: V,
}

pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// A map whose entries expire after a fixed time-to-live.
///
/// Expired entries are dropped lazily on access or
/// explicitly with [`TtlCache::purge_expired`]. Inserting into
/// a full cache purges all expired entries and, if that is not
/// enough, evicts the entry that expires first.
#[derive(Debug)]
pub struct TtlCache<K, V, C = SystemClock> {
    ttl: Duration,
    max_entries: usize,
    clock: C,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            max_entries: DEFAULT_MAX_ENTRIES,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Limits the number of entries, at least one is kept.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: K, value: V) {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            entries.retain(|_, entry| entry.expires_at > now);
            if entries.len() >= self.max_entries {
                let first_expiring = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(key, _)| key.clone());
                if let Some(first_expiring) = first_expiring {
                    entries.remove(&first_expiring);
                }
            }
        }
        let expires_at = now + self.ttl;
        entries.insert(key, Entry { expires_at, value });
    }

    /// Returns the cached value or stores the result of `f`.
    ///
    /// Errors are not cached. The lock is not held while `f` runs,
    /// so concurrent misses may call `f` more than once.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, f: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = f()?;
        self.insert(key, value.clone());
        Ok(value)
    }

    /// Drops all expired entries and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        let len_before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        len_before - entries.len()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    PlaceDetails(String),
    /// Search results depend on the exact position,
    /// so coordinates are compared bitwise.
    Nearby {
        lat_bits: u64,
        lng_bits: u64,
        radius_meters: u32,
        limit: usize,
    },
}

impl CacheKey {
    pub fn place_details(external_id: impl Into<String>) -> Self {
        Self::PlaceDetails(external_id.into())
    }

    pub fn nearby(lat: f64, lng: f64, radius_meters: u32, limit: usize) -> Self {
        Self::Nearby {
            lat_bits: lat.to_bits(),
            lng_bits: lng.to_bits(),
            radius_meters,
            limit,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::PlaceDetails(id) => write!(f, "place_details_{id}"),
            Self::Nearby {
                lat_bits,
                lng_bits,
                radius_meters,
                limit,
            } => write!(
                f,
                "nearby_{}_{}_{radius_meters}_{limit}",
                f64::from_bits(*lat_bits),
                f64::from_bits(*lng_bits),
            ),
        }
    }
}

pub const DEFAULT_PLACE_DETAILS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Caches the details responses of another places gateway.
pub struct CachedPlacesGateway<G, C = SystemClock> {
    inner: G,
    cache: TtlCache<CacheKey, Option<PlaceDetails>, C>,
}

impl<G> CachedPlacesGateway<G> {
    pub fn new(inner: G, ttl: Duration) -> Self {
        Self::with_cache(inner, TtlCache::new(ttl))
    }
}

impl<G, C> CachedPlacesGateway<G, C> {
    pub fn with_cache(inner: G, cache: TtlCache<CacheKey, Option<PlaceDetails>, C>) -> Self {
        Self { inner, cache }
    }
}

impl<G, C> PlacesGateway for CachedPlacesGateway<G, C>
where
    G: PlacesGateway,
    C: Clock,
{
    fn place_details(&self, external_id: &str) -> Fallible<Option<PlaceDetails>> {
        self.cache
            .get_or_try_insert_with(CacheKey::place_details(external_id), || {
                log::debug!("Place details of {external_id} not cached");
                self.inner.place_details(external_id)
            })
    }
}

impl<G, C> fmt::Debug for CachedPlacesGateway<G, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CachedPlacesGateway").finish_non_exhaustive()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
