use std::collections::HashMap;

use tokio::time::{Duration, Instant};

use crate::domain::{CachedToken, TokenCache, UserClaims};
use crate::utils::{TOKEN_CACHE_CAPACITY, TOKEN_CACHE_WINDOW_SECONDS};

pub struct HashmapTokenCache {
    entries: HashMap<String, CachedToken>,
    window: Duration,
    capacity: usize,
}

impl HashmapTokenCache {
    pub fn new(window: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            window,
            capacity,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            Duration::from_secs(TOKEN_CACHE_WINDOW_SECONDS),
            TOKEN_CACHE_CAPACITY,
        )
    }

    // Full cache: drop the entry closest to expiry before inserting.
    fn evict_soonest(&mut self) {
        let soonest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(token, _)| token.clone());
        if let Some(token) = soonest {
            self.entries.remove(&token);
        }
    }
}

#[async_trait::async_trait]
impl TokenCache for HashmapTokenCache {
    async fn get(&mut self, raw_token: &str) -> Option<CachedToken> {
        match self.entries.get(raw_token) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.clone()),
            Some(_) => {
                // Lazy eviction: stale entries are dropped on lookup.
                self.entries.remove(raw_token);
                None
            }
            None => None,
        }
    }

    async fn put(&mut self, raw_token: String, claims: UserClaims) {
        if !self.entries.contains_key(&raw_token) && self.entries.len() >= self.capacity {
            self.evict_soonest();
        }
        self.entries.insert(
            raw_token,
            CachedToken {
                claims,
                expires_at: Instant::now() + self.window,
            },
        );
    }

    async fn clear(&mut self) {
        self.entries.clear();
    }

    async fn len(&self) -> usize {
        self.entries.len()
    }
}
