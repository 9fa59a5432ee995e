//! This binary's admin `/rate/*` routes act directly on the shared limiter;
//! re-exported here under the name the original `ratelimits.go` used so the
//! rest of this crate can refer to `crate::ratelimits::RateLimiter` like any
//! other local module.

pub use indexer_ratelimit::{RateLimiter, DEFAULT_RATE_LIMIT};
