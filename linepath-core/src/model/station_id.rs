use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an identifier for a station. station names and locations live in the station
/// registry, the line model only ever compares these identifiers.
#[derive(
    Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
