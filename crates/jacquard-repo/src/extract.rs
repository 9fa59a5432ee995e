//! Read-only extraction of records from a CAR file, independent of the
//! navigable [`Mst`](crate::mst::Mst) used for writes.
//!
//! A full-repo CAR (as returned by `com.atproto.sync.getRepo`) contains the
//! commit block plus every MST node and record block reachable from it.
//! This module walks that structure once, emitting a flat `key -> bytes`
//! map, without ever materializing a navigable tree — the same shape of
//! work the original record indexer's CAR walker does, and considerably
//! cheaper than loading the blocks into a [`BlockStore`](crate::storage::BlockStore)
//! first.

use std::collections::BTreeMap;

use bytes::Bytes;
use cid::Cid as IpldCid;
use iroh_car::CarReader;
use n0_future::stream::StreamExt;
use serde_json::value::RawValue;

use crate::error::{RepoError, RepoErrorKind, Result};
use crate::mst::util::compute_cid;

/// Maximum MST depth walked before giving up; guards against cyclic or
/// adversarial trees masquerading as deep ones.
const MAX_DEPTH: usize = 128;

/// A single extracted record, keyed by its full MST key
/// (`<collection>/<rkey>`), alongside the CBOR block's CID.
pub struct ExtractedRecord {
    pub key: String,
    pub cid: IpldCid,
    /// The record, re-encoded as JSON text. CIDs render as
    /// `{"$link": "..."}` and raw byte strings as `{"$bytes": "<base64>"}`,
    /// matching the DAG-JSON conventions used elsewhere in the protocol.
    pub json: Box<RawValue>,
}

/// Reads every block out of a CAR byte stream, discarding any block whose
/// recomputed CID doesn't match its declared one. Returns the roots
/// declared in the header alongside the verified block map.
async fn read_verified_blocks(car: &[u8]) -> Result<(Vec<IpldCid>, BTreeMap<IpldCid, Bytes>)> {
    let reader = CarReader::new(car).await.map_err(RepoError::car_parse)?;
    let roots = reader.header().roots().to_vec();
    let mut blocks = BTreeMap::new();
    let stream = reader.stream();
    n0_future::pin!(stream);
    while let Some(item) = stream.next().await {
        let (cid, data) = item.map_err(RepoError::car_parse)?;
        match compute_cid(&data) {
            Ok(recomputed) if recomputed == cid => {
                blocks.insert(cid, Bytes::from(data));
            }
            // Hash mismatch (or a non-dag-cbor/sha256 block, which never
            // occurs in a well-formed repo): drop it rather than trust an
            // unverified block.
            _ => {}
        }
    }
    Ok((roots, blocks))
}

/// Extracts every record reachable from a full-repo CAR file.
///
/// Walks from each root's commit block down through the MST, recursing
/// into `v` (value) and then `t` (right subtree) for every entry, and
/// finally into `l` (left subtree) once the entry list is exhausted —
/// the same traversal order a repository's MST invariants assume records
/// appear in.
pub async fn extract_records(car: &[u8]) -> Result<Vec<ExtractedRecord>> {
    let (roots, blocks) = read_verified_blocks(car).await?;
    let mut out: Vec<(String, IpldCid)> = Vec::new();
    let mut visited: std::collections::HashSet<IpldCid> = std::collections::HashSet::new();
    for root in roots {
        walk(&blocks, root, String::new(), &mut visited, 0, &mut out)?;
    }

    let mut records = Vec::with_capacity(out.len());
    for (key, cid) in out {
        let Some(block) = blocks.get(&cid) else {
            continue;
        };
        let json = cbor_block_to_json(block)?;
        records.push(ExtractedRecord { key, cid, json });
    }
    Ok(records)
}

/// Reads only the `rev` field out of the first root's commit block,
/// without walking the tree. Used to cheaply discover how far ahead a
/// fetched CAR is of a previously-known revision.
pub async fn extract_rev(car: &[u8]) -> Result<String> {
    let (roots, blocks) = read_verified_blocks(car).await?;
    let root = roots
        .first()
        .copied()
        .ok_or_else(|| RepoError::invalid("CAR file has no roots"))?;
    let Some(block) = blocks.get(&root) else {
        // The root's own block didn't survive hash verification or was
        // never present — this is the "no new blocks since the requested
        // revision" case callers need to distinguish from a real failure.
        return Err(zero_blocks_error());
    };
    let value: serde_ipld_dagcbor::codec::ValueCodec = serde_ipld_dagcbor::from_slice(block)
        .map_err(RepoError::car_parse)?;
    let rev = value
        .as_map()
        .and_then(|m| m.iter().find(|(k, _)| k.as_str() == Some("rev")))
        .and_then(|(_, v)| v.as_str())
        .ok_or_else(|| RepoError::invalid("commit block missing 'rev' field"))?;
    Ok(rev.to_string())
}

/// Verifies the signature on a CAR's root commit block against the
/// repo's known signing key, without walking the MST.
///
/// This is a separate entry point from [`extract_records`]: callers that
/// only care about the record set never pay for signature verification,
/// and callers that only care about authenticity never pay for a full
/// tree walk.
pub async fn verify_commit_signature(
    car: &[u8],
    pubkey: &jacquard_common::types::crypto::PublicKey<'_>,
) -> Result<()> {
    let (roots, blocks) = read_verified_blocks(car).await?;
    let root = roots
        .first()
        .copied()
        .ok_or_else(|| RepoError::invalid("CAR file has no roots"))?;
    let block = blocks.get(&root).ok_or_else(zero_blocks_error)?;
    let commit = crate::commit::Commit::from_cbor(block)?;
    commit.verify(pubkey).map_err(RepoError::from)
}

fn zero_blocks_error() -> RepoError {
    RepoError::new(RepoErrorKind::NotFound, None)
        .with_context("zero blocks: CAR root not present, nothing new since the requested revision".to_string())
}

fn walk(
    blocks: &BTreeMap<IpldCid, Bytes>,
    root: IpldCid,
    key: String,
    visited: &mut std::collections::HashSet<IpldCid>,
    depth: usize,
    out: &mut Vec<(String, IpldCid)>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(RepoError::invalid_mst(format!(
            "MST depth exceeded {} at {}",
            MAX_DEPTH, root
        )));
    }
    if !visited.insert(root) {
        return Ok(());
    }
    let Some(data) = blocks.get(&root) else {
        return Ok(());
    };
    let node: serde_ipld_dagcbor::codec::ValueCodec =
        match serde_ipld_dagcbor::from_slice(data) {
            Ok(n) => n,
            Err(_) => return Ok(()),
        };
    let Some(map) = node.as_map() else {
        return Ok(());
    };

    if map.iter().any(|(k, _)| k.as_str() == Some("$type")) {
        // Record node: the accumulated key belongs to this block.
        out.push((key, root));
        return Ok(());
    }

    if let Some((_, data_link)) = map.iter().find(|(k, _)| k.as_str() == Some("data")) {
        // Commit node: descend into its MST root with a fresh key.
        if let Some(cid) = data_link.as_link() {
            if blocks.contains_key(&cid) {
                walk(blocks, cid, String::new(), visited, depth + 1, out)?;
            }
        }
        return Ok(());
    }

    if let Some((_, entries)) = map.iter().find(|(k, _)| k.as_str() == Some("e")) {
        let entries = entries
            .as_array()
            .ok_or_else(|| RepoError::invalid_mst("MST node 'e' field is not an array"))?;
        let mut current_key = key;
        for entry in entries {
            let entry_map = entry
                .as_map()
                .ok_or_else(|| RepoError::invalid_mst("MST entry is not a map"))?;
            let get = |name: &str| entry_map.iter().find(|(k, _)| k.as_str() == Some(name)).map(|(_, v)| v);
            let prefix_len = get("p")
                .and_then(|v| v.as_i64())
                .ok_or_else(|| RepoError::invalid_mst("MST entry missing 'p'"))? as usize;
            let key_suffix = get("k")
                .and_then(|v| v.as_bytes())
                .ok_or_else(|| RepoError::invalid_mst("MST entry missing 'k'"))?;
            let value = get("v")
                .and_then(|v| v.as_link())
                .ok_or_else(|| RepoError::invalid_mst("MST entry missing 'v'"))?;
            // 't' must be present as a field (possibly null) even though
            // its value may be absent.
            let tree = get("t").ok_or_else(|| RepoError::invalid_mst("MST entry missing 't'"))?;

            if current_key.is_empty() {
                if prefix_len != 0 {
                    return Err(RepoError::invalid_mst("incomplete key in first MST entry"));
                }
                current_key = String::from_utf8_lossy(key_suffix).into_owned();
            } else {
                if prefix_len > current_key.len() {
                    return Err(RepoError::invalid_mst("MST key prefix longer than current key"));
                }
                let mut rebuilt = current_key.as_bytes()[..prefix_len].to_vec();
                rebuilt.extend_from_slice(key_suffix);
                current_key = String::from_utf8_lossy(&rebuilt).into_owned();
            }

            if blocks.contains_key(&value) {
                walk(blocks, value, current_key.clone(), visited, depth + 1, out)?;
            }
            if let Some(tree_cid) = tree.as_link() {
                if blocks.contains_key(&tree_cid) {
                    walk(blocks, tree_cid, current_key.clone(), visited, depth + 1, out)?;
                }
            }
        }
    }

    if let Some((_, left)) = map.iter().find(|(k, _)| k.as_str() == Some("l")) {
        if let Some(cid) = left.as_link() {
            if blocks.contains_key(&cid) {
                walk(blocks, cid, String::new(), visited, depth + 1, out)?;
            }
        }
    }

    Ok(())
}

fn cbor_block_to_json(data: &[u8]) -> Result<Box<RawValue>> {
    let value: serde_ipld_dagcbor::codec::ValueCodec =
        serde_ipld_dagcbor::from_slice(data).map_err(RepoError::car_parse)?;
    let text = serde_json::to_string(&value).map_err(RepoError::serialization)?;
    RawValue::from_string(text).map_err(RepoError::serialization)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use jacquard_common::types::recordkey::Rkey;
    use jacquard_common::types::string::{Did, Nsid, RecordKey};
    use jacquard_common::types::tid::Ticker;
    use jacquard_common::types::value::RawData;
    use jacquard_common::IntoStatic;
    use smol_str::SmolStr;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::mst::{Mst, RecordWriteOp};
    use crate::repo::Repository;
    use crate::storage::{BlockStore, MemoryBlockStore};

    fn test_record(n: u32) -> BTreeMap<SmolStr, RawData<'static>> {
        let mut record = BTreeMap::new();
        record.insert(SmolStr::new("$type"), RawData::String("app.bsky.feed.post".into()));
        record.insert(SmolStr::new("text"), RawData::String(format!("post #{n}").into()));
        record
    }

    /// Builds a two-record repo, commits it, and exports the resulting CAR
    /// to bytes, exactly the shape `com.atproto.sync.getRepo` returns.
    async fn build_repo_car() -> Vec<u8> {
        let storage = Arc::new(MemoryBlockStore::new());
        let did = Did::new("did:plc:test").unwrap();
        let signing_key = k256::ecdsa::SigningKey::random(&mut rand::rngs::OsRng);

        let mst = Mst::new(storage.clone());
        let data = mst.persist().await.unwrap();
        let rev = Ticker::new().next(None);
        let commit = crate::commit::Commit::new_unsigned(did.clone().into_static(), data, rev, None)
            .sign(&signing_key)
            .unwrap();
        let commit_cbor = commit.to_cbor().unwrap();
        let commit_cid = storage.put(&commit_cbor).await.unwrap();

        let mut repo = Repository::new(storage, mst, commit.into_static(), commit_cid);

        let ops = vec![
            RecordWriteOp::Create {
                collection: Nsid::new("app.bsky.feed.post").unwrap().into_static(),
                rkey: RecordKey(Rkey::new("record1").unwrap()),
                record: test_record(1),
            },
            RecordWriteOp::Create {
                collection: Nsid::new("app.bsky.feed.post").unwrap().into_static(),
                rkey: RecordKey(Rkey::new("record2").unwrap()),
                record: test_record(2),
            },
        ];
        let (_ops, commit_data) = repo
            .create_commit(&ops, &did, Some(*repo.current_commit_cid()), &signing_key)
            .await
            .unwrap();
        let new_commit_cid = repo.apply_commit(commit_data).await.unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        repo.export_car(temp_file.path(), new_commit_cid).await.unwrap();
        tokio::fs::read(temp_file.path()).await.unwrap()
    }

    #[tokio::test]
    async fn extract_records_finds_every_record() {
        let car = build_repo_car().await;
        let records = extract_records(&car).await.unwrap();
        let mut keys: Vec<_> = records.iter().map(|r| r.key.clone()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "app.bsky.feed.post/record1".to_string(),
                "app.bsky.feed.post/record2".to_string(),
            ]
        );
    }

    /// Property 3: re-extracting the same CAR twice is idempotent — same
    /// keys, same CIDs, same JSON text, in the same order.
    #[tokio::test]
    async fn extract_records_is_idempotent() {
        let car = build_repo_car().await;
        let first = extract_records(&car).await.unwrap();
        let second = extract_records(&car).await.unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.key, b.key);
            assert_eq!(a.cid, b.cid);
            assert_eq!(a.json.get(), b.json.get());
        }
    }

    /// Property 4: extraction is deterministic regardless of how many times
    /// the CAR bytes are re-read — rebuilding the same repo twice yields
    /// records with identical keys and CIDs.
    #[tokio::test]
    async fn extract_records_is_deterministic_across_rebuilds() {
        let car_a = build_repo_car().await;
        let car_b = build_repo_car().await;
        let records_a = extract_records(&car_a).await.unwrap();
        let records_b = extract_records(&car_b).await.unwrap();
        let mut keys_a: Vec<_> = records_a.iter().map(|r| r.key.clone()).collect();
        let mut keys_b: Vec<_> = records_b.iter().map(|r| r.key.clone()).collect();
        keys_a.sort();
        keys_b.sort();
        assert_eq!(keys_a, keys_b);
    }

    #[tokio::test]
    async fn extract_rev_reads_commit_rev_without_walking_tree() {
        let car = build_repo_car().await;
        let rev = extract_rev(&car).await.unwrap();
        assert!(!rev.is_empty());
    }

    /// Property 5: a block whose bytes were tampered with after being
    /// written (so its hash no longer matches its declared CID) is dropped
    /// rather than trusted, so the record it held is absent from the
    /// output instead of surfacing corrupted data.
    #[tokio::test]
    async fn read_verified_blocks_drops_blocks_with_hash_mismatch() {
        let car = build_repo_car().await;
        let (roots, mut blocks) = read_verified_blocks(&car).await.unwrap();
        let valid_count = blocks.len();
        assert!(valid_count > 0);

        // Corrupt one non-root block's bytes in place without updating its
        // key, so its CID no longer matches its content.
        let victim = *blocks.keys().find(|cid| !roots.contains(*cid)).unwrap();
        blocks.insert(victim, Bytes::from_static(b"corrupted"));

        // Rebuild a CAR from the tampered block map and confirm
        // read_verified_blocks silently excludes it rather than trusting it.
        let car_bytes = crate::car::write_car_bytes(roots[0], blocks).await.unwrap();
        let (_, reverified) = read_verified_blocks(&car_bytes).await.unwrap();
        assert!(!reverified.contains_key(&victim));
        assert_eq!(reverified.len(), valid_count - 1);
    }

    #[tokio::test]
    async fn extract_rev_errors_on_empty_car_bytes() {
        let err = extract_rev(&[]).await.unwrap_err();
        assert!(matches!(err.kind(), RepoErrorKind::Car));
    }
}
