//! Re-serves DID documents synthesized from the mirrored PLC log, grounded
//! on `indexer-record-indexer`'s axum wiring but with a single read-only
//! route in place of the admin mutation surface.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use indexer_store::{PlcLogEntry, PlcOperation};
use jacquard_common::types::crypto::{KeyCodec, PublicKey};
use serde_json::{json, Value};

use crate::mirror::Mirror;

/// How stale `last_success` may be before the serve endpoint refuses to
/// answer, rather than silently serving a DID document from a mirror that
/// has stopped making progress.
const MAX_STALENESS: Duration = Duration::from_secs(5 * 60);

#[derive(Clone)]
pub struct ServeState {
    pub pool: sqlx::PgPool,
    pub mirror: Arc<Mirror>,
    pub registry: Arc<prometheus::Registry>,
}

pub fn router(state: ServeState) -> Router {
    Router::new()
        .route("/metrics", get(serve_metrics))
        .route("/{did}", get(resolve_did))
        .with_state(state)
}

async fn serve_metrics(State(state): State<ServeState>) -> String {
    crate::metrics::encode(&state.registry)
}

async fn resolve_did(State(state): State<ServeState>, Path(did): Path<String>) -> Response {
    match state.mirror.last_success().await {
        Some(last) if Utc::now().signed_duration_since(last).to_std().unwrap_or(Duration::MAX) <= MAX_STALENESS => {}
        _ => return (StatusCode::SERVICE_UNAVAILABLE, "PLC mirror is stale or has not completed a pass yet").into_response(),
    }

    let entry = match PlcLogEntry::latest_for_did(&state.pool, &did).await {
        Ok(Some(entry)) => entry,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(err) => {
            tracing::warn!(%err, %did, "failed to look up PLC log entry");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let op = match entry.operation.0 {
        PlcOperation::Tombstone(_) => return StatusCode::NOT_FOUND.into_response(),
        PlcOperation::LegacyCreate(legacy) => legacy.as_unsigned_op(),
        PlcOperation::Op(op) => op,
    };

    let doc = did_document(&did, &op);
    let mut response = Response::new(doc.to_string().into());
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/did+json"),
    );
    response
}

/// Synthesizes a DID document from a PLC operation's fields. Deliberately
/// built as ad-hoc JSON rather than through `jacquard_common`'s `DidDocument`
/// type, since that type is meant for parsing documents the identity
/// resolver fetches, not for authoring ones from scratch here.
fn did_document(did: &str, op: &indexer_store::PlcOp) -> Value {
    let verification_method: Vec<Value> = op
        .verification_methods
        .iter()
        .map(|(id, key)| {
            json!({
                "id": format!("{did}#{id}"),
                "type": "Multikey",
                "controller": did,
                "publicKeyMultibase": key.strip_prefix("did:key:").unwrap_or(key),
            })
        })
        .collect();

    let service: Vec<Value> = op
        .services
        .iter()
        .map(|(id, svc)| {
            json!({
                "id": format!("#{id}"),
                "type": svc.ty,
                "serviceEndpoint": svc.endpoint,
            })
        })
        .collect();

    let mut context: Vec<&str> = vec!["https://www.w3.org/ns/did/v1", "https://w3id.org/security/multikey/v1"];
    for key in op.verification_methods.values() {
        let Ok(pk) = PublicKey::decode(key) else {
            continue;
        };
        let suite = match pk.codec {
            KeyCodec::Secp256k1 => Some("https://w3id.org/security/suites/secp256k1-2019/v1"),
            KeyCodec::P256 => Some("https://w3id.org/security/suites/ecdsa-2019/v1"),
            KeyCodec::Ed25519 | KeyCodec::Unknown(_) => None,
        };
        if let Some(suite) = suite {
            if !context.contains(&suite) {
                context.push(suite);
            }
        }
    }

    json!({
        "@context": context,
        "id": did,
        "alsoKnownAs": op.also_known_as,
        "verificationMethod": verification_method,
        "assertionMethod": op.verification_methods.keys().map(|id| format!("{did}#{id}")).collect::<Vec<_>>(),
        "service": service,
    })
}
