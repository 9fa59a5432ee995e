//! `indexer-lister` binary entry point.
//!
//! Config loading, logging setup, and the `/metrics` HTTP server follow the
//! same pattern as every other `cmd/*/main.go` in the original: an
//! env-first config struct, a text-or-json log writer selected by one env
//! var, and a tiny axum server exposing Prometheus text exposition.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use indexer_lister::metrics::{encode, Metrics};
use indexer_lister::Lister;
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
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default)]
    pds_whitelist: Option<String>,
    #[serde(default = "default_metrics_addr")]
    metrics_addr: String,
    postgres_url: String,
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_metrics_addr() -> String {
    "0.0.0.0:9101".to_string()
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
    let config: Config = envy::prefixed("LISTER_")
        .from_env()
        .map_err(|e| miette::miette!("failed to load config: {e}"))?;
    setup_logging(&config);

    info!("starting lister");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
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
        .user_agent("indexer-lister/0.1")
        .build()
        .map_err(|e| miette::miette!("failed to build HTTP client: {e}"))?;

    let resolver = CachingResolver::new(JacquardResolver::new(http.clone(), ResolverOptions::default()));
    let pds_registry = PdsRegistry::new(pool.clone(), whitelist);
    let repo_registry = RepoRegistry::new(pool.clone(), pds_registry, resolver);

    let metrics = Metrics::new();
    let registry = Arc::new(metrics.registry().clone());

    let lister = Arc::new(Lister::new(pool, http, repo_registry, metrics));
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

    let lister_task = {
        let lister = lister.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { lister.run(cancel).await })
    };

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| miette::miette!("failed to listen for ctrl-c: {e}"))?;
    info!("shutdown signal received");
    cancel.cancel();
    let _ = lister_task.await;
    let _ = metrics_server.await;

    Ok(())
}
