//! Logical clock and thread identity
//!
//! Timestamps are a serialized counter, not wall-clock time: issuing them
//! under a single lock gives every event a strictly increasing, process-wide
//! total order that is immune to clock skew across cores. Thread identities
//! are dense small integers allocated on first use and cached for the
//! thread's lifetime.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Distinguishes clock instances so independent engines never share a
/// thread-identity cache
static NEXT_CLOCK_TOKEN: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// (clock token, assigned id) pairs for every clock this thread has
    /// used; in practice one entry
    static CACHED_THREAD_IDS: RefCell<Vec<(u64, u64)>> = const { RefCell::new(Vec::new()) };
}

/// Issues thread identities and logical timestamps
///
/// Both counters are process-wide state for one engine; there is no
/// explicit teardown. The two locks are independent, so identity lookups
/// never contend with timestamp issuance.
pub struct TraceClock {
    /// Identity of this clock instance (for the thread-local cache)
    token: u64,

    /// Next thread identity to hand out
    next_thread_id: Mutex<u64>,

    /// Logical time counter
    now: Mutex<u64>,
}

impl TraceClock {
    /// Create a clock with both counters at 0
    pub fn new() -> Self {
        Self {
            token: NEXT_CLOCK_TOKEN.fetch_add(1, Ordering::Relaxed),
            next_thread_id: Mutex::new(0),
            now: Mutex::new(0),
        }
    }

    /// Identity of the calling thread
    ///
    /// The first call on a thread allocates the next value from the
    /// monotonic counter and caches it; later calls return the cached value
    /// without touching the lock.
    pub fn thread_id(&self) -> u64 {
        CACHED_THREAD_IDS.with(|cache| {
            let mut cache = cache.borrow_mut();
            if let Some(&(_, id)) = cache.iter().find(|(token, _)| *token == self.token) {
                return id;
            }
            let id = {
                let mut next = self.next_thread_id.lock();
                let id = *next;
                *next += 1;
                id
            };
            cache.push((self.token, id));
            id
        })
    }

    /// Next logical timestamp
    ///
    /// Incremented and returned atomically under the clock lock; every call
    /// process-wide observes a distinct, strictly increasing value.
    pub fn next_timestamp(&self) -> u64 {
        let mut now = self.now.lock();
        let timestamp = *now;
        *now += 1;
        timestamp
    }
}

impl Default for TraceClock {
    fn default() -> Self {
        Self::new()
    }
}
