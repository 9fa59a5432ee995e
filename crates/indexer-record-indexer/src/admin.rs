//! Admin HTTP surface for the running pool: live pool resize and rate-limit
//! overrides, grounded on `cmd/record-indexer/admin.go`'s small debug
//! router (the original exposes the same three mutating routes plus
//! `/metrics`, which this binary serves from a separate handler).

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use indexer_ratelimit::RateLimiter;
use jacquard_identity::resolver::IdentityResolver;
use serde::Deserialize;
use tracing::info;

use crate::metrics::encode;
use crate::workerpool::WorkerPool;

pub struct AdminState<R> {
    pub pool: Arc<WorkerPool<R>>,
    pub rate_limiter: Arc<RateLimiter>,
    pub registry: Arc<prometheus::Registry>,
}

// Written by hand rather than derived: `#[derive(Clone)]` would add an
// unneeded `R: Clone` bound, since every field here is already an `Arc`.
impl<R> Clone for AdminState<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            rate_limiter: self.rate_limiter.clone(),
            registry: self.registry.clone(),
        }
    }
}

pub fn router<R: IdentityResolver + Sync + Send + 'static>(state: AdminState<R>) -> Router {
    Router::new()
        .route("/metrics", get(serve_metrics::<R>))
        .route("/pool/resize", post(resize::<R>))
        .route("/rate/set", post(set_rate::<R>))
        .route("/rate/setAll", post(set_all_rates::<R>))
        .with_state(state)
}

async fn serve_metrics<R: IdentityResolver + Sync + Send + 'static>(State(state): State<AdminState<R>>) -> String {
    encode(&state.registry)
}

#[derive(Debug, Deserialize)]
struct ResizeQuery {
    size: usize,
}

async fn resize<R: IdentityResolver + Sync + Send + 'static>(
    State(state): State<AdminState<R>>,
    Query(query): Query<ResizeQuery>,
) -> StatusCode {
    info!(size = query.size, "admin: resizing worker pool");
    state.pool.resize(query.size).await;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
struct SetRateQuery {
    name: String,
    limit: u32,
}

async fn set_rate<R: IdentityResolver + Sync + Send + 'static>(
    State(state): State<AdminState<R>>,
    Query(query): Query<SetRateQuery>,
) -> StatusCode {
    info!(host = %query.name, limit = query.limit, "admin: setting per-host rate limit");
    state.rate_limiter.set_limit(&query.name, query.limit).await;
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
struct SetAllRatesQuery {
    limit: u32,
}

async fn set_all_rates<R: IdentityResolver + Sync + Send + 'static>(
    State(state): State<AdminState<R>>,
    Query(query): Query<SetAllRatesQuery>,
) -> StatusCode {
    info!(limit = query.limit, "admin: setting rate limit for every known host");
    state.rate_limiter.set_all_limits(query.limit).await;
    StatusCode::NO_CONTENT
}
