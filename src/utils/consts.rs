// Fixed windows for the auth core. The cache window is deliberately
// independent of the provider's own token expiry: a verified token may be
// served from cache for up to one window after the provider itself would
// reject it.
pub const TOKEN_CACHE_WINDOW_SECONDS: u64 = 300;

// Upper bound on cached tokens; the entry closest to expiry is evicted
// when the cache is full.
pub const TOKEN_CACHE_CAPACITY: usize = 10_000;

// How long Draining may run before the process is forced out.
pub const SHUTDOWN_GRACE_SECONDS: u64 = 8;

pub const BEARER_PREFIX: &str = "Bearer ";

// Mirrors the upload limit of the original deployment (10mb JSON bodies).
pub const JSON_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;
