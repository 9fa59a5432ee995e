//! A correctness cache wrapping any [`IdentityResolver`], with negative-result
//! caching and an explicit per-DID flush.
//!
//! This is the resolver singleton used as a process-wide shared cache
//! mutable state: constructed once at process startup and injected into
//! consumers/workers, rather than reached for as a bare global, so tests can
//! swap in an uncached or mock resolver. Mirrors the Go original's
//! `did.Resolver.FlushCacheFor`, which the bare `IdentityResolver` trait has
//! no equivalent of.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use jacquard_common::types::did::Did;
use jacquard_common::types::string::Handle;

use crate::resolver::{DidDocResponse, IdentityError, IdentityResolver, ResolverOptions};

/// A cached resolution outcome. Negative results (the DID failed to
/// resolve) are cached too, the same way the Go original's singleflight
/// cache remembers lookup failures rather than retrying them on every
/// firehose event for a dead DID.
#[derive(Clone)]
enum CacheEntry {
    Doc(DidDocResponse),
    NotFound,
}

/// Decorates an [`IdentityResolver`] with an in-memory DID → document cache.
///
/// Handle resolution is not cached here; handles change more often than DID
/// documents and the inner resolver's own fallback chain already handles
/// that path. Only `resolve_did_doc` is memoized, matching what the
/// firehose consumer and worker pool actually call repeatedly for the same
/// DID.
pub struct CachingResolver<R> {
    inner: R,
    cache: RwLock<HashMap<Did<'static>, CacheEntry>>,
}

impl<R> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Drops the cached entry for one DID, forcing the next lookup to hit
    /// the underlying resolver. Called by the firehose consumer on
    /// `#identity` events off the firehose.
    pub fn flush_cache_for(&self, did: &Did<'_>) {
        self.cache.write().unwrap().remove(&did.clone().into_static());
    }

    /// Drops every cached entry.
    pub fn flush_all(&self) {
        self.cache.write().unwrap().clear();
    }
}

impl<R> CachingResolver<Arc<R>> {
    /// Convenience constructor for the common case of wrapping a
    /// reference-counted resolver shared across tasks.
    pub fn shared(inner: Arc<R>) -> Arc<Self> {
        Arc::new(Self::new(inner))
    }
}

impl<R: IdentityResolver + Sync> IdentityResolver for CachingResolver<R> {
    fn options(&self) -> &ResolverOptions {
        self.inner.options()
    }

    async fn resolve_handle(&self, handle: &Handle<'_>) -> Result<Did<'static>, IdentityError> {
        self.inner.resolve_handle(handle).await
    }

    async fn resolve_did_doc(&self, did: &Did<'_>) -> Result<DidDocResponse, IdentityError> {
        let owned = did.clone().into_static();
        if let Some(entry) = self.cache.read().unwrap().get(&owned).cloned() {
            return match entry {
                CacheEntry::Doc(resp) => Ok(resp),
                CacheEntry::NotFound => Err(IdentityError::unsupported_did_method(
                    "cached negative resolution",
                )),
            };
        }
        match self.inner.resolve_did_doc(did).await {
            Ok(resp) => {
                self.cache
                    .write()
                    .unwrap()
                    .insert(owned, CacheEntry::Doc(resp.clone()));
                Ok(resp)
            }
            Err(e) => {
                self.cache.write().unwrap().insert(owned, CacheEntry::NotFound);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{DidStep, HandleStep, PlcSource};
    use bytes::Bytes;
    use http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingResolver {
        opts: ResolverOptions,
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn new() -> Self {
            Self {
                opts: ResolverOptions::new()
                    .plc_source(PlcSource::default())
                    .handle_order(vec![HandleStep::HttpsWellKnown])
                    .did_order(vec![DidStep::PlcHttp])
                    .validate_doc_id(false)
                    .public_fallback_for_handle(false)
                    .build(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl IdentityResolver for CountingResolver {
        fn options(&self) -> &ResolverOptions {
            &self.opts
        }

        async fn resolve_handle(&self, _handle: &Handle<'_>) -> Result<Did<'static>, IdentityError> {
            unimplemented!()
        }

        async fn resolve_did_doc(&self, did: &Did<'_>) -> Result<DidDocResponse, IdentityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DidDocResponse {
                buffer: Bytes::from_static(br#"{"id":"did:plc:alice"}"#),
                status: StatusCode::OK,
                requested: Some(did.clone().into_static()),
            })
        }
    }

    #[tokio::test]
    async fn caches_positive_lookups() {
        let inner = CountingResolver::new();
        let calls = &inner.calls as *const AtomicUsize;
        let resolver = CachingResolver::new(inner);
        let did = Did::new_owned("did:plc:alice").unwrap();
        resolver.resolve_did_doc(&did).await.unwrap();
        resolver.resolve_did_doc(&did).await.unwrap();
        // SAFETY: resolver outlives this raw pointer for the test's duration.
        let count = unsafe { (*calls).load(Ordering::SeqCst) };
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn flush_forces_refetch() {
        let resolver = CachingResolver::new(CountingResolver::new());
        let did = Did::new_owned("did:plc:alice").unwrap();
        resolver.resolve_did_doc(&did).await.unwrap();
        resolver.flush_cache_for(&did);
        resolver.resolve_did_doc(&did).await.unwrap();
        assert_eq!(resolver.inner.calls.load(Ordering::SeqCst), 2);
    }
}
