//! `indexer-record-indexer` binary entry point: wires the scheduler to the
//! worker pool and serves `/metrics` plus the admin mutation routes from one
//! axum server, following the same config/logging/shutdown pattern as every
//! other binary in this workspace.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use indexer_record_indexer::admin::{self, AdminState};
use indexer_record_indexer::metrics::Metrics;
use indexer_record_indexer::{Scheduler, WorkerPool};
use indexer_registry::{PdsRegistry, RepoRegistry};
use jacquard_identity::cache::CachingResolver;
use jacquard_identity::resolver::ResolverOptions;
use jacquard_identity::JacquardResolver;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Config {
    postgres_url: String,
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default)]
    pds_whitelist: Option<String>,
    #[serde(default)]
    collection_blacklist: Option<String>,
    #[serde(default = "default_admin_addr")]
    admin_addr: String,
    #[serde(default = "default_workers")]
    workers: usize,
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_admin_addr() -> String {
    "0.0.0.0:9103".to_string()
}

fn default_workers() -> usize {
    10
}

fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    dotenvy::dotenv().ok();
    let config: Config = envy::prefixed("INDEXER_")
        .from_env()
        .map_err(|e| miette::miette!("failed to load config: {e}"))?;
    setup_logging(&config);
    info!("starting record indexer");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.postgres_url)
        .await
        .map_err(|e| miette::miette!("failed to connect to postgres: {e}"))?;
    indexer_store::migrate(&pool)
        .await
        .map_err(|e| miette::miette!("failed to run migrations: {e}"))?;

    let whitelist_patterns: Vec<String> = config
        .pds_whitelist
        .as_deref()
        .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_else(indexer_registry::whitelist::default_patterns);
    let whitelist = indexer_registry::whitelist::build(&whitelist_patterns)
        .map_err(|e| miette::miette!("invalid PDS whitelist pattern: {e}"))?;

    let collection_blacklist: HashSet<String> = config
        .collection_blacklist
        .as_deref()
        .map(|s| s.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let http = reqwest::Client::builder()
        .user_agent("indexer-record-indexer/0.1")
        .timeout(Duration::from_secs(30 * 60))
        .build()
        .map_err(|e| miette::miette!("failed to build HTTP client: {e}"))?;
    let resolver = CachingResolver::new(JacquardResolver::new(http.clone(), ResolverOptions::default()));

    let pds_registry = PdsRegistry::new(pool.clone(), whitelist);
    let repo_registry = Arc::new(RepoRegistry::new(pool.clone(), pds_registry, resolver));

    let rate_limiter = Arc::new(
        indexer_ratelimit::RateLimiter::load(pool.clone())
            .await
            .map_err(|e| miette::miette!("failed to load rate limiters: {e}"))?,
    );

    let metrics = Arc::new(Metrics::new());
    let prom_registry = Arc::new(metrics.registry().clone());

    let cancel = CancellationToken::new();

    let scheduler = Arc::new(Scheduler::new(pool.clone(), metrics.clone()));
    let dispatch_rx = scheduler.clone().spawn(cancel.clone());

    let worker_pool = Arc::new(WorkerPool::new(
        pool.clone(),
        http,
        repo_registry,
        rate_limiter.clone(),
        metrics.clone(),
        collection_blacklist,
        dispatch_rx,
    ));
    worker_pool.resize(config.workers).await;

    let admin_state = AdminState {
        pool: worker_pool.clone(),
        rate_limiter,
        registry: prom_registry,
    };
    let admin_addr: SocketAddr = config
        .admin_addr
        .parse()
        .map_err(|e| miette::miette!("invalid admin_addr: {e}"))?;
    let app = admin::router(admin_state);
    let admin_server = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(admin_addr).await {
                Ok(listener) => listener,
                Err(err) => {
                    error!(%err, "failed to bind admin listener");
                    return;
                }
            };
            let serve = axum::serve(listener, app);
            tokio::select! {
                result = serve => {
                    if let Err(err) = result {
                        error!(%err, "admin server exited with error");
                    }
                }
                _ = cancel.cancelled() => {}
            }
        })
    };

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| miette::miette!("failed to listen for ctrl-c: {e}"))?;
    info!("shutdown signal received");
    cancel.cancel();
    let _ = admin_server.await;

    Ok(())
}
