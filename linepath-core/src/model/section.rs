use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{SectionError, StationId};

/// a directed, weighted connection between two stations on a line.
///
/// a [`Section`] is a value: once built it is never modified. shortening a section
/// during a split produces a new [`Section`] that replaces the old one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SectionConfig", into = "SectionConfig")]
pub struct Section {
    up_station: StationId,
    down_station: StationId,
    length: u64,
}

/// serialized form of a [`Section`]. deserialization is routed through
/// [`Section::new`] so that a decoded section always holds its invariants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionConfig {
    pub up_station: StationId,
    pub down_station: StationId,
    pub length: u64,
}

impl Section {
    /// creates a new section.
    ///
    /// # Arguments
    ///
    /// * `up_station`   - station where this section begins
    /// * `down_station` - station where this section ends
    /// * `length`       - distance between the two stations, must be positive
    ///
    /// # Returns
    ///
    /// the section, or an error if the endpoints match or the length is zero
    pub fn new(
        up_station: StationId,
        down_station: StationId,
        length: u64,
    ) -> Result<Section, SectionError> {
        let invalid = |message: &str| SectionError::InvalidEdge {
            up_station,
            down_station,
            length,
            message: String::from(message),
        };
        if up_station == down_station {
            return Err(invalid("up and down stations must differ"));
        }
        if length == 0 {
            return Err(invalid("length must be positive"));
        }
        Ok(Section {
            up_station,
            down_station,
            length,
        })
    }

    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn is_up_station(&self, station: StationId) -> bool {
        self.up_station == station
    }

    pub fn is_down_station(&self, station: StationId) -> bool {
        self.down_station == station
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.is_up_station(station) || self.is_down_station(station)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}->{}({})",
            self.up_station, self.down_station, self.length
        )
    }
}

impl TryFrom<SectionConfig> for Section {
    type Error = SectionError;

    fn try_from(value: SectionConfig) -> Result<Self, Self::Error> {
        Section::new(value.up_station, value.down_station, value.length)
    }
}

impl From<Section> for SectionConfig {
    fn from(value: Section) -> Self {
        SectionConfig {
            up_station: value.up_station,
            down_station: value.down_station,
            length: value.length,
        }
    }
}
