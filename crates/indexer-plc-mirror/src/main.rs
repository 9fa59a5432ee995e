//! `indexer-plc-mirror` binary entry point: wires the mirror loop to the
//! serve endpoint and `/metrics`, following the same config/logging/shutdown
//! pattern as every other binary in this workspace.

use std::net::SocketAddr;
use std::sync::Arc;

use indexer_plc_mirror::metrics::Metrics;
use indexer_plc_mirror::mirror::Mirror;
use indexer_plc_mirror::serve::{self, ServeState};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Deserialize)]
struct Config {
    postgres_url: String,
    #[serde(default = "default_log_format")]
    log_format: String,
    #[serde(default = "default_plc_addr")]
    atp_plc_addr: String,
    #[serde(default = "default_listen_addr")]
    listen_addr: String,
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_plc_addr() -> String {
    "https://plc.directory".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:9104".to_string()
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
    let config: Config = envy::prefixed("INDEXER_PLC_")
        .from_env()
        .map_err(|e| miette::miette!("failed to load config: {e}"))?;
    setup_logging(&config);
    info!("starting PLC mirror");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.postgres_url)
        .await
        .map_err(|e| miette::miette!("failed to connect to postgres: {e}"))?;
    indexer_store::migrate(&pool)
        .await
        .map_err(|e| miette::miette!("failed to run migrations: {e}"))?;

    let plc_base: Url = config
        .atp_plc_addr
        .parse()
        .map_err(|e| miette::miette!("invalid atp_plc_addr: {e}"))?;

    let http = reqwest::Client::builder()
        .user_agent("indexer-plc-mirror/0.1")
        .build()
        .map_err(|e| miette::miette!("failed to build HTTP client: {e}"))?;

    let metrics = Arc::new(Metrics::new());
    let prom_registry = Arc::new(metrics.registry().clone());

    let mirror = Arc::new(Mirror::new(pool.clone(), http, plc_base, metrics));

    let cancel = CancellationToken::new();
    let mirror_task = {
        let mirror = mirror.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { mirror.run(cancel).await })
    };

    let serve_state = ServeState {
        pool,
        mirror,
        registry: prom_registry,
    };
    let app = serve::router(serve_state);

    let listen_addr: SocketAddr = config
        .listen_addr
        .parse()
        .map_err(|e| miette::miette!("invalid listen_addr: {e}"))?;
    let http_server = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let listener = match tokio::net::TcpListener::bind(listen_addr).await {
                Ok(listener) => listener,
                Err(err) => {
                    error!(%err, "failed to bind serve listener");
                    return;
                }
            };
            let serve = axum::serve(listener, app);
            tokio::select! {
                result = serve => {
                    if let Err(err) = result {
                        error!(%err, "serve HTTP server exited with error");
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
    let _ = mirror_task.await;
    let _ = http_server.await;

    Ok(())
}
