//! `indexer-consumer` binary entry point.
//!
//! Runs in one of two modes selected by `CONSUMER_MODE`:
//!
//! - `normal` (default): the supervisor reconciles one `subscribeRepos`
//!   consumer task per enabled, whitelisted PDS.
//! - `relay`: a single discovery-only consumer subscribes to an aggregating
//!   relay's firehose, using it solely to find PDSes faster than the lister
//!   would.
//!
//! Config loading, logging setup, and the `/metrics` HTTP server follow the
//! same pattern as every other binary in this workspace: an env-first config
//! struct, a text-or-json log writer selected by one env var, and a tiny
//! axum server exposing Prometheus text exposition.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use indexer_consumer::metrics::{encode, Metrics};
use indexer_consumer::{RelayConsumer, Supervisor};
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
    #[serde(default = "default_mode")]
    mode: String,
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default)]
    pds_whitelist: Option<String>,
    #[serde(default = "default_metrics_addr")]
    metrics_addr: String,
    postgres_url: String,
    #[serde(default)]
    relay_url: Option<String>,
}

fn default_mode() -> String {
    "normal".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_metrics_addr() -> String {
    "0.0.0.0:9102".to_string()
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

#[derive(Clone)]
struct MetricsState {
    registry: Arc<prometheus::Registry>,
}

async fn serve_metrics(State(state): State<MetricsState>) -> String {
    encode(&state.registry)
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    dotenvy::dotenv().ok();
    let config: Config = envy::prefixed("CONSUMER_")
        .from_env()
        .map_err(|e| miette::miette!("failed to load config: {e}"))?;
    setup_logging(&config);
    info!(mode = %config.mode, "starting consumer");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
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

    let http = reqwest::Client::builder()
        .user_agent("indexer-consumer/0.1")
        .build()
        .map_err(|e| miette::miette!("failed to build HTTP client: {e}"))?;
    let resolver = Arc::new(CachingResolver::new(JacquardResolver::new(
        http,
        ResolverOptions::default(),
    )));

    let metrics = Arc::new(Metrics::new());
    let registry = Arc::new(metrics.registry().clone());
    let cancel = CancellationToken::new();

    let metrics_addr: SocketAddr = config
        .metrics_addr
        .parse()
        .map_err(|e| miette::miette!("invalid metrics_addr: {e}"))?;
    let app = Router::new()
        .route("/metrics", get(serve_metrics))
        .with_state(MetricsState { registry });
    let metrics_server = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(metrics_addr).await {
                Ok(listener) => listener,
                Err(err) => {
                    error!(%err, "failed to bind metrics listener");
                    return;
                }
            };
            let serve = axum::serve(listener, app);
            tokio::select! {
                result = serve => {
                    if let Err(err) = result {
                        error!(%err, "metrics server exited with error");
                    }
                }
                _ = cancel.cancelled() => {}
            }
        })
    };

    let main_task = if config.mode == "relay" {
        let relay_url = config
            .relay_url
            .ok_or_else(|| miette::miette!("CONSUMER_RELAY_URL is required in relay mode"))?;
        let url = url::Url::parse(&relay_url).map_err(|e| miette::miette!("invalid relay url: {e}"))?;
        let pds_registry = Arc::new(PdsRegistry::new(pool.clone(), whitelist));
        let relay = Arc::new(RelayConsumer::new(url, pds_registry, resolver, metrics));
        let cancel = cancel.clone();
        tokio::spawn(async move { relay.run(cancel).await })
    } else {
        let pds_registry = PdsRegistry::new(pool.clone(), whitelist);
        let repo_registry = Arc::new(RepoRegistry::new(pool.clone(), pds_registry, resolver));
        let supervisor = Arc::new(Supervisor::new(pool.clone(), repo_registry, metrics));
        let cancel = cancel.clone();
        tokio::spawn(async move { supervisor.run(cancel).await })
    };

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| miette::miette!("failed to listen for ctrl-c: {e}"))?;
    info!("shutdown signal received");
    cancel.cancel();
    let _ = main_task.await;
    let _ = metrics_server.await;

    Ok(())
}
