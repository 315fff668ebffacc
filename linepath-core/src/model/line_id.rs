use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifies the transit line that owns a collection of sections.
#[derive(
    Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
