use super::{RepositoryError, SectionId, SectionRecord};
use crate::model::{LineId, Section, StationId};

/// storage for the sections of every line. the line model never talks to
/// storage directly, callers load a line's records, build
/// [`crate::model::Sections`] from them and write back the difference.
///
/// implementations are not expected to guard against interleaved edits of the
/// same line, callers serialize mutations per line.
pub trait SectionRepository {
    /// all sections stored for a line, in the order they were saved.
    fn find_all_by_line(&self, line_id: LineId) -> Result<Vec<SectionRecord>, RepositoryError>;

    /// stores a section for a line, assigning it a new id.
    fn save(&mut self, line_id: LineId, section: Section) -> Result<SectionRecord, RepositoryError>;

    /// removes the sections with the given ids. fails without removing anything
    /// if any id is unknown.
    fn delete_by_ids(&mut self, ids: &[SectionId]) -> Result<(), RepositoryError>;

    /// the section of a line running from `up_station` to `down_station`.
    fn find_by_up_station_id_and_down_station_id(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
    ) -> Result<Option<SectionRecord>, RepositoryError>;
}
