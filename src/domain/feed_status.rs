use serde::Serialize;

/// Whether the remote feed could be queried. An empty list with `Ok` means nothing happened nearby.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Ok,
    Unavailable,
}
