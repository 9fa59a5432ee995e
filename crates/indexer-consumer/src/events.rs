//! Firehose event bodies not covered by `jacquard_repo::commit::firehose`
//! (which only models the modern `#commit` shape). The legacy event names
//! named in the wire protocol — `#handle`, `#migrate`, `#tombstone` — were
//! folded into `#identity`/`#account` in later protocol revisions but can
//! still appear from older relay software, so the consumer still dispatches
//! on them.

use jacquard_common::types::string::{Datetime, Did};

#[derive(Debug, serde::Deserialize)]
pub struct InfoBody<'a> {
    #[serde(borrow)]
    pub name: std::borrow::Cow<'a, str>,
    #[serde(default, borrow)]
    pub message: Option<std::borrow::Cow<'a, str>>,
}

impl InfoBody<'_> {
    /// The one `#info` name the consumer treats specially: a server-side
    /// signal that the requested cursor is no longer available, which the
    /// consumer handles identically to an implicit reset on the next frame.
    pub fn is_outdated_cursor(&self) -> bool {
        self.name == "OutdatedCursor"
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct IdentityBody<'a> {
    #[serde(borrow)]
    pub did: Did<'a>,
    pub seq: i64,
    #[allow(dead_code)]
    pub time: Datetime,
}

#[derive(Debug, serde::Deserialize)]
pub struct HandleBody<'a> {
    #[serde(borrow)]
    pub did: Did<'a>,
    #[allow(dead_code)]
    pub handle: std::borrow::Cow<'a, str>,
    pub seq: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct MigrateBody<'a> {
    #[serde(borrow)]
    pub did: Did<'a>,
    #[serde(rename = "migrateTo")]
    #[allow(dead_code)]
    pub migrate_to: Option<std::borrow::Cow<'a, str>>,
    pub seq: i64,
}

#[derive(Debug, serde::Deserialize)]
pub struct TombstoneBody<'a> {
    #[serde(borrow)]
    pub did: Did<'a>,
    pub seq: i64,
}

/// Body of an `op: -1` error frame, which terminates the stream.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}
