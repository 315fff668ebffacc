use linepath_core::model::{Section, SectionError, StationId};
use serde::{Deserialize, Serialize};

/// a row of a section file: `up_station,down_station,length`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRow {
    pub up_station: StationId,
    pub down_station: StationId,
    pub length: u64,
}

impl TryFrom<&SectionRow> for Section {
    type Error = SectionError;

    fn try_from(value: &SectionRow) -> Result<Self, Self::Error> {
        Section::new(value.up_station, value.down_station, value.length)
    }
}
