use super::StationId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("invalid section {up_station}->{down_station} with length {length}: {message}")]
    InvalidEdge {
        up_station: StationId,
        down_station: StationId,
        length: u64,
        message: String,
    },
    #[error("section length {new_length} must be positive and shorter than the length {existing_length} of the section it divides")]
    InvalidSectionLength { new_length: u64, existing_length: u64 },
    #[error("section {0}->{1} does not connect to any station on the line")]
    NoInsertionPoint(StationId, StationId),
    #[error("stations {0} and {1} are both already on the line")]
    StationsAlreadyRegistered(StationId, StationId),
    #[error("total length of the line exceeds {}", u64::MAX)]
    LengthOverflow,
    #[error("sections do not form a single path: {0}")]
    BrokenPath(String),
}
