use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Sliding-window request limiter with an owned, injectable store.
///
/// Deliberately not a module-level singleton: each service layer constructs
/// its own limiter and passes the current time in, so tests can drive the
/// clock and concurrent deployments can shard by instance. Unrelated to the
/// analysis pipeline, which holds no state at all.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    hits: HashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: HashMap::new(),
        }
    }

    /// Record a request for `key` at `now`. Returns false when the key has
    /// already used its quota within the window; expired hits are pruned on
    /// every call.
    pub fn check_at(&mut self, key: &str, now: Instant) -> bool {
        let hits = self.hits.entry(key.to_string()).or_default();
        hits.retain(|t| now.duration_since(*t) < self.window);

        if hits.len() as u32 >= self.max_requests {
            return false;
        }

        hits.push(now);
        true
    }

    /// Record a request for `key` against the real clock.
    pub fn check(&mut self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    /// Requests left for `key` in the window ending at `now`.
    pub fn remaining_at(&self, key: &str, now: Instant) -> u32 {
        let used = self
            .hits
            .get(key)
            .map(|hits| {
                hits.iter()
                    .filter(|t| now.duration_since(**t) < self.window)
                    .count() as u32
            })
            .unwrap_or(0);

        self.max_requests.saturating_sub(used)
    }
}
