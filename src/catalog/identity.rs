use serde::{Deserialize, Serialize};

/// Stable identifier for a block entry (e.g.
/// `roboflow_core/polygon_visualization@v1`).
///
/// The manifest also lists alias identifiers per block, but lookup matches
/// the primary id only; aliases are carried for callers that want them.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
