use std::collections::BTreeMap;

use super::{RepositoryError, SectionId, SectionRecord, SectionRepository};
use crate::model::{LineId, Section, StationId};

/// a [`SectionRepository`] backed by an ordered map. ids are handed out in
/// increasing order so iteration order matches save order.
#[derive(Debug, Default)]
pub struct InMemorySectionRepository {
    records: BTreeMap<SectionId, SectionRecord>,
    next_id: u64,
}

impl InMemorySectionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SectionRepository for InMemorySectionRepository {
    fn find_all_by_line(&self, line_id: LineId) -> Result<Vec<SectionRecord>, RepositoryError> {
        let records = self
            .records
            .values()
            .filter(|r| r.line_id == line_id)
            .cloned()
            .collect();
        Ok(records)
    }

    fn save(&mut self, line_id: LineId, section: Section) -> Result<SectionRecord, RepositoryError> {
        self.next_id += 1;
        let record = SectionRecord {
            id: SectionId(self.next_id),
            line_id,
            section,
        };
        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn delete_by_ids(&mut self, ids: &[SectionId]) -> Result<(), RepositoryError> {
        if let Some(missing) = ids.iter().find(|id| !self.records.contains_key(*id)) {
            return Err(RepositoryError::SectionNotFound(*missing));
        }
        for id in ids {
            self.records.remove(id);
        }
        Ok(())
    }

    fn find_by_up_station_id_and_down_station_id(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
    ) -> Result<Option<SectionRecord>, RepositoryError> {
        let found = self
            .records
            .values()
            .find(|r| {
                r.line_id == line_id
                    && r.section.is_up_station(up_station)
                    && r.section.is_down_station(down_station)
            })
            .cloned();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::InMemorySectionRepository;
    use crate::model::{LineId, Section, StationId};
    use crate::repository::{RepositoryError, SectionId, SectionRepository};

    fn section(up: u64, down: u64, length: u64) -> Section {
        Section::new(StationId(up), StationId(down), length)
            .expect("test invariant failed: invalid section")
    }

    #[test]
    fn test_save_assigns_increasing_ids() {
        let mut repo = InMemorySectionRepository::new();
        let first = repo.save(LineId(1), section(1, 2, 5)).expect("save");
        let second = repo.save(LineId(1), section(2, 3, 5)).expect("save");
        assert!(first.id < second.id);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_find_all_by_line_filters_lines() {
        let mut repo = InMemorySectionRepository::new();
        repo.save(LineId(1), section(1, 2, 5)).expect("save");
        repo.save(LineId(2), section(7, 8, 5)).expect("save");
        repo.save(LineId(1), section(2, 3, 5)).expect("save");
        let line_one = repo.find_all_by_line(LineId(1)).expect("load");
        let sections: Vec<Section> = line_one.into_iter().map(|r| r.section).collect();
        assert_eq!(sections, vec![section(1, 2, 5), section(2, 3, 5)]);
        assert!(repo.find_all_by_line(LineId(3)).expect("load").is_empty());
    }

    #[test]
    fn test_delete_by_ids() {
        let mut repo = InMemorySectionRepository::new();
        let first = repo.save(LineId(1), section(1, 2, 5)).expect("save");
        let _ = repo.save(LineId(1), section(2, 3, 5)).expect("save");
        repo.delete_by_ids(&[first.id]).expect("delete");
        assert_eq!(repo.len(), 1);

        let result = repo.delete_by_ids(&[SectionId(99), first.id]);
        assert!(matches!(result, Err(RepositoryError::SectionNotFound(SectionId(99)))));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_find_by_up_and_down_station() {
        let mut repo = InMemorySectionRepository::new();
        let other_line = repo.save(LineId(2), section(1, 2, 9)).expect("save");
        let saved = repo.save(LineId(1), section(1, 2, 5)).expect("save");
        let found = repo
            .find_by_up_station_id_and_down_station_id(LineId(1), StationId(1), StationId(2))
            .expect("query");
        assert_eq!(found, Some(saved));
        let found = repo
            .find_by_up_station_id_and_down_station_id(LineId(2), StationId(1), StationId(2))
            .expect("query");
        assert_eq!(found, Some(other_line));
        let reversed = repo
            .find_by_up_station_id_and_down_station_id(LineId(1), StationId(2), StationId(1))
            .expect("query");
        assert_eq!(reversed, None);
    }
}
