use std::fmt::Display;

use itertools::Itertools;
use linepath_core::model::{LineId, Section, StationId};
use serde::{Deserialize, Serialize};

/// the result of building or validating a line
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineReport {
    pub line_id: LineId,
    pub stations: Vec<StationId>,
    pub sections: Vec<Section>,
    pub total_length: u64,
}

impl Display for LineReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stations.iter().join("\n"))
    }
}
