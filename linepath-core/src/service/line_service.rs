use crate::{
    model::{LineId, Section, Sections, StationId},
    repository::{SectionId, SectionRecord, SectionRepository},
};

use super::LineServiceError;

/// runs line edits against a [`SectionRepository`]: load a line's sections,
/// apply the change in memory, then write back only what changed.
///
/// the service holds the repository mutably, so one instance performs one
/// mutation at a time. coordinating several services over shared storage is
/// left to the storage layer.
pub struct LineService<'a, R: SectionRepository> {
    repository: &'a mut R,
}

impl<'a, R: SectionRepository> LineService<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// adds a section to a line and persists the result.
    ///
    /// # Arguments
    ///
    /// * `line_id`      - line receiving the section
    /// * `up_station`   - station where the new section begins
    /// * `down_station` - station where the new section ends
    /// * `length`       - length of the new section
    ///
    /// # Returns
    ///
    /// the stations of the line after insertion, in path order
    pub fn add_section(
        &mut self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        length: u64,
    ) -> Result<Vec<StationId>, LineServiceError> {
        let section = Section::new(up_station, down_station, length)?;
        let records = self.repository.find_all_by_line(line_id)?;
        let mut sections = sections_of(&records);
        sections.add_section(section)?;
        let stations = sections.get_stations()?;

        let removed: Vec<SectionId> = records
            .iter()
            .filter(|r| !sections.sections().contains(&r.section))
            .map(|r| r.id)
            .collect();
        let added: Vec<Section> = sections
            .sections()
            .iter()
            .filter(|s| !records.iter().any(|r| &r.section == *s))
            .cloned()
            .collect();

        // save before deleting, an interrupted write leaves extra sections rather than a gap
        for section in added {
            let record = self.repository.save(line_id, section)?;
            log::debug!("line {line_id}: saved section {} as {}", record.section, record.id);
        }
        if !removed.is_empty() {
            log::debug!("line {line_id}: removing replaced sections {removed:?}");
            self.repository.delete_by_ids(&removed)?;
        }

        Ok(stations)
    }

    /// the stations of a line in path order.
    pub fn get_stations(&self, line_id: LineId) -> Result<Vec<StationId>, LineServiceError> {
        let records = self.repository.find_all_by_line(line_id)?;
        let stations = sections_of(&records).get_stations()?;
        Ok(stations)
    }

    /// the sections of a line, as stored.
    pub fn get_sections(&self, line_id: LineId) -> Result<Sections, LineServiceError> {
        let records = self.repository.find_all_by_line(line_id)?;
        Ok(sections_of(&records))
    }

    /// the stored section of a line running from `up_station` to `down_station`.
    pub fn find_section(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
    ) -> Result<Option<SectionRecord>, LineServiceError> {
        let found = self.repository.find_by_up_station_id_and_down_station_id(
            line_id,
            up_station,
            down_station,
        )?;
        Ok(found)
    }
}

fn sections_of(records: &[SectionRecord]) -> Sections {
    Sections::new(records.iter().map(|r| r.section.clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::LineService;
    use crate::{
        model::{LineId, Section, SectionError, StationId},
        repository::{
            InMemorySectionRepository, RepositoryError, SectionId, SectionRecord,
            SectionRepository,
        },
        service::LineServiceError,
    };

    const LINE: LineId = LineId(1);

    /// in-memory storage that refuses writes after `saves_left` successful saves.
    struct LimitedStorage {
        inner: InMemorySectionRepository,
        saves_left: usize,
    }

    impl SectionRepository for LimitedStorage {
        fn find_all_by_line(&self, line_id: LineId) -> Result<Vec<SectionRecord>, RepositoryError> {
            self.inner.find_all_by_line(line_id)
        }

        fn save(
            &mut self,
            line_id: LineId,
            section: Section,
        ) -> Result<SectionRecord, RepositoryError> {
            if self.saves_left == 0 {
                return Err(RepositoryError::WriteError(format!(
                    "no room to save section {section}"
                )));
            }
            self.saves_left -= 1;
            self.inner.save(line_id, section)
        }

        fn delete_by_ids(&mut self, ids: &[SectionId]) -> Result<(), RepositoryError> {
            self.inner.delete_by_ids(ids)
        }

        fn find_by_up_station_id_and_down_station_id(
            &self,
            line_id: LineId,
            up_station: StationId,
            down_station: StationId,
        ) -> Result<Option<SectionRecord>, RepositoryError> {
            self.inner
                .find_by_up_station_id_and_down_station_id(line_id, up_station, down_station)
        }
    }

    fn stations(ids: &[u64]) -> Vec<StationId> {
        ids.iter().copied().map(StationId).collect()
    }

    #[test]
    fn test_add_section_persists_new_sections() {
        let mut repo = InMemorySectionRepository::new();
        let mut service = LineService::new(&mut repo);
        service
            .add_section(LINE, StationId(1), StationId(2), 5)
            .expect("first insert");
        let result = service
            .add_section(LINE, StationId(2), StationId(3), 3)
            .expect("append back");
        assert_eq!(result, stations(&[1, 2, 3]));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_split_replaces_stored_section() {
        let mut repo = InMemorySectionRepository::new();
        let mut service = LineService::new(&mut repo);
        service
            .add_section(LINE, StationId(1), StationId(3), 10)
            .expect("first insert");
        let result = service
            .add_section(LINE, StationId(1), StationId(2), 4)
            .expect("split");
        assert_eq!(result, stations(&[1, 2, 3]));

        let replaced = service
            .find_section(LINE, StationId(1), StationId(3))
            .expect("query");
        assert_eq!(replaced, None);
        let remainder = service
            .find_section(LINE, StationId(2), StationId(3))
            .expect("query")
            .expect("remainder section should be stored");
        assert_eq!(remainder.section.length(), 6);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_failed_insert_leaves_storage_untouched() {
        let mut repo = InMemorySectionRepository::new();
        let mut service = LineService::new(&mut repo);
        service
            .add_section(LINE, StationId(1), StationId(2), 5)
            .expect("first insert");
        let result = service.add_section(LINE, StationId(3), StationId(4), 3);
        assert!(matches!(
            result,
            Err(LineServiceError::SectionError(SectionError::NoInsertionPoint(..)))
        ));
        let result = service.add_section(LINE, StationId(1), StationId(3), 5);
        assert!(matches!(
            result,
            Err(LineServiceError::SectionError(
                SectionError::InvalidSectionLength { .. }
            ))
        ));
        let result = service.add_section(LINE, StationId(5), StationId(5), 3);
        assert!(matches!(
            result,
            Err(LineServiceError::SectionError(SectionError::InvalidEdge { .. }))
        ));
        assert_eq!(
            service.get_stations(LINE).expect("stations"),
            stations(&[1, 2])
        );
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_divided_section() {
        let mut storage = LimitedStorage {
            inner: InMemorySectionRepository::new(),
            saves_left: 2,
        };
        let mut service = LineService::new(&mut storage);
        service
            .add_section(LINE, StationId(1), StationId(3), 10)
            .expect("first insert");
        // the split needs two saves but only one is left
        let result = service.add_section(LINE, StationId(1), StationId(2), 4);
        assert!(matches!(
            result,
            Err(LineServiceError::RepositoryError(RepositoryError::WriteError(_)))
        ));
        let divided = service
            .find_section(LINE, StationId(1), StationId(3))
            .expect("query");
        assert!(divided.is_some(), "divided section must not be deleted before saves finish");
    }

    #[test]
    fn test_find_section_is_scoped_to_line() {
        let mut repo = InMemorySectionRepository::new();
        let mut service = LineService::new(&mut repo);
        service
            .add_section(LineId(2), StationId(1), StationId(2), 9)
            .expect("line two");
        service
            .add_section(LineId(1), StationId(1), StationId(2), 5)
            .expect("line one");
        let found = service
            .find_section(LineId(1), StationId(1), StationId(2))
            .expect("query")
            .expect("line one holds 1->2");
        assert_eq!(found.line_id, LineId(1));
        assert_eq!(found.section.length(), 5);
        let missing = service
            .find_section(LineId(3), StationId(1), StationId(2))
            .expect("query");
        assert_eq!(missing, None);
    }

    #[test]
    fn test_lines_are_independent() {
        let mut repo = InMemorySectionRepository::new();
        let mut service = LineService::new(&mut repo);
        service
            .add_section(LineId(1), StationId(1), StationId(2), 5)
            .expect("line one");
        service
            .add_section(LineId(2), StationId(8), StationId(9), 5)
            .expect("line two is empty, so this is a first insert");
        assert_eq!(
            service.get_stations(LineId(2)).expect("stations"),
            stations(&[8, 9])
        );
        assert_eq!(service.get_sections(LineId(1)).expect("sections").len(), 1);
    }

    #[test]
    fn test_get_stations_reports_broken_storage() {
        let mut repo = InMemorySectionRepository::new();
        let disjoint = [(1, 2), (3, 4)];
        for (up, down) in disjoint {
            let section = Section::new(StationId(up), StationId(down), 1).expect("valid section");
            repo.save(LINE, section).expect("save");
        }
        let service = LineService::new(&mut repo);
        assert!(matches!(
            service.get_stations(LINE),
            Err(LineServiceError::SectionError(SectionError::BrokenPath(_)))
        ));
    }
}
