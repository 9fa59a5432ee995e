#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetRepoParams<'a> {
    #[serde(borrow)]
    pub did: jacquard_common::types::string::Did<'a>,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    #[serde(borrow)]
    pub since: std::option::Option<jacquard_common::CowStr<'a>>,
}

/// CAR bytes for one repo, optionally sliced to everything since `since`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, jacquard_derive::IntoStatic)]
pub struct GetRepoOutput {
    pub body: bytes::Bytes,
}

#[jacquard_derive::open_union]
#[derive(
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Clone,
    PartialEq,
    Eq,
    thiserror::Error,
    miette::Diagnostic
)]
#[serde(tag = "error", content = "message")]
#[serde(bound(deserialize = "'de: 'a"))]
pub enum GetRepoError<'a> {
    #[serde(rename = "RepoNotFound")]
    RepoNotFound(std::option::Option<String>),
    #[serde(rename = "RepoTakendown")]
    RepoTakendown(std::option::Option<String>),
    #[serde(rename = "RepoSuspended")]
    RepoSuspended(std::option::Option<String>),
    #[serde(rename = "RepoDeactivated")]
    RepoDeactivated(std::option::Option<String>),
}
impl std::fmt::Display for GetRepoError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RepoNotFound(msg) => {
                write!(f, "RepoNotFound")?;
                if let Some(msg) = msg {
                    write!(f, ": {}", msg)?;
                }
                Ok(())
            }
            Self::RepoTakendown(msg) => {
                write!(f, "RepoTakendown")?;
                if let Some(msg) = msg {
                    write!(f, ": {}", msg)?;
                }
                Ok(())
            }
            Self::RepoSuspended(msg) => {
                write!(f, "RepoSuspended")?;
                if let Some(msg) = msg {
                    write!(f, ": {}", msg)?;
                }
                Ok(())
            }
            Self::RepoDeactivated(msg) => {
                write!(f, "RepoDeactivated")?;
                if let Some(msg) = msg {
                    write!(f, ": {}", msg)?;
                }
                Ok(())
            }
            Self::Unknown(_) => write!(f, "Unknown error"),
        }
    }
}

/// Response type for com.atproto.sync.getRepo
pub struct GetRepoResponse;

impl jacquard_common::xrpc::XrpcResp for GetRepoResponse {
    const NSID: &'static str = "com.atproto.sync.getRepo";
    const ENCODING: &'static str = "application/vnd.ipld.car";
    type Output<'de> = GetRepoOutput;
    type Err<'de> = GetRepoError<'de>;

    fn encode_output(output: &Self::Output<'_>) -> Result<Vec<u8>, jacquard_common::xrpc::EncodeError> {
        Ok(output.body.to_vec())
    }

    fn decode_output<'de>(
        body: &'de [u8],
    ) -> Result<Self::Output<'de>, jacquard_common::error::DecodeError>
    where
        Self::Output<'de>: serde::Deserialize<'de>,
    {
        Ok(GetRepoOutput {
            body: bytes::Bytes::copy_from_slice(body),
        })
    }
}

impl<'a> jacquard_common::xrpc::XrpcRequest for GetRepoParams<'a> {
    const NSID: &'static str = "com.atproto.sync.getRepo";
    const METHOD: jacquard_common::xrpc::XrpcMethod = jacquard_common::xrpc::XrpcMethod::Query;

    type Response = GetRepoResponse;
}

/// Endpoint type for com.atproto.sync.getRepo
pub struct GetRepoRequest;

impl jacquard_common::xrpc::XrpcEndpoint for GetRepoRequest {
    const PATH: &'static str = "/xrpc/com.atproto.sync.getRepo";
    const METHOD: jacquard_common::xrpc::XrpcMethod = jacquard_common::xrpc::XrpcMethod::Query;

    type Request<'de> = GetRepoParams<'de>;
    type Response = GetRepoResponse;
}
