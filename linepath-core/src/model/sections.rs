use std::{collections::HashSet, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{strategy::SectionAddStrategy, Section, SectionError, StationId};

/// the sections of a single transit line.
///
/// sections are kept in insertion order, not path order. adjacency is found by
/// scanning the collection, which is fine at the scale of a single line. after
/// every successful [`Sections::add_section`] the sections form exactly one simple
/// directed path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections(Vec<Section>);

impl Sections {
    /// wraps a section list loaded from storage. the list is trusted to form a
    /// single path, see [`Sections::validate`] to check that it does.
    pub fn new(sections: Vec<Section>) -> Self {
        Self(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Section> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// inserts a section into the line, extending it at either end or dividing
    /// an existing section.
    ///
    /// # Arguments
    ///
    /// * `section` - the section to insert
    ///
    /// # Returns
    ///
    /// the sections after insertion, or an error if the section cannot be placed.
    /// on error the sections are left unchanged.
    pub fn add_section(&mut self, section: Section) -> Result<&[Section], SectionError> {
        let strategy = SectionAddStrategy::classify(&self.0, &section)?;
        strategy.check_length(&self.0, &section)?;
        if self.contains_station(section.up_station())
            && self.contains_station(section.down_station())
        {
            return Err(SectionError::StationsAlreadyRegistered(
                section.up_station(),
                section.down_station(),
            ));
        }
        log::debug!("adding section {section} with strategy '{strategy}'");
        strategy.apply(&mut self.0, section)?;
        Ok(&self.0)
    }

    /// walks the line from its first station to its last.
    ///
    /// # Returns
    ///
    /// the stations in path order, one more than the number of sections, or an
    /// error if the sections do not form a single path.
    pub fn get_stations(&self) -> Result<Vec<StationId>, SectionError> {
        if self.0.is_empty() {
            return Ok(vec![]);
        }

        let mut cursor = self.get_first_section().ok_or_else(|| {
            SectionError::BrokenPath(String::from(
                "every up station is also a down station, sections contain a cycle",
            ))
        })?;

        let mut stations = Vec::with_capacity(self.0.len() + 1);
        stations.push(cursor.up_station());
        stations.push(cursor.down_station());

        // bounded by the section count so a cycle past the first section cannot spin forever
        while let Some(next) = self.find_by_up_section(cursor.down_station()) {
            if stations.len() > self.0.len() {
                return Err(SectionError::BrokenPath(format!(
                    "walk from {} revisits station {}",
                    stations[0],
                    next.up_station()
                )));
            }
            cursor = next;
            stations.push(cursor.down_station());
        }

        if stations.len() != self.0.len() + 1 {
            return Err(SectionError::BrokenPath(format!(
                "walk reached {} of {} sections, line is disconnected after station {}",
                stations.len() - 1,
                self.0.len(),
                cursor.down_station()
            )));
        }

        Ok(stations)
    }

    /// number of sections on the line.
    pub fn count_of_stations(&self) -> usize {
        self.0.len()
    }

    /// the section whose up station is not the down station of any section.
    /// `None` for an empty line, or when no section qualifies.
    pub fn get_first_section(&self) -> Option<&Section> {
        self.0
            .iter()
            .find(|s| self.find_by_down_section(s.up_station()).is_none())
    }

    /// the section starting at `station`.
    pub fn find_by_up_section(&self, station: StationId) -> Option<&Section> {
        self.0.iter().find(|s| s.is_up_station(station))
    }

    /// the section ending at `station`.
    pub fn find_by_down_section(&self, station: StationId) -> Option<&Section> {
        self.0.iter().find(|s| s.is_down_station(station))
    }

    pub fn has_next_section(&self, section: &Section) -> bool {
        self.find_by_up_section(section.down_station()).is_some()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.0.iter().any(|s| s.contains_station(station))
    }

    /// sum of all section lengths, i.e. the length of the line.
    pub fn total_length(&self) -> Result<u64, SectionError> {
        self.0
            .iter()
            .try_fold(0u64, |acc, s| acc.checked_add(s.length()))
            .ok_or(SectionError::LengthOverflow)
    }

    /// confirms that the sections form exactly one simple path. used on section
    /// lists that did not come through [`Sections::add_section`].
    pub fn validate(&self) -> Result<(), SectionError> {
        let up_stations: HashSet<StationId> = self.0.iter().map(Section::up_station).collect();
        if up_stations.len() != self.0.len() {
            let repeated = self.0.iter().map(Section::up_station).duplicates().join(", ");
            return Err(SectionError::BrokenPath(format!(
                "stations [{repeated}] begin more than one section"
            )));
        }
        let down_stations: HashSet<StationId> =
            self.0.iter().map(Section::down_station).collect();
        if down_stations.len() != self.0.len() {
            let repeated = self.0.iter().map(Section::down_station).duplicates().join(", ");
            return Err(SectionError::BrokenPath(format!(
                "stations [{repeated}] end more than one section"
            )));
        }
        let _ = self.get_stations()?;
        Ok(())
    }
}

impl Display for Sections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sections[{}]", self.0.iter().join(", "))
    }
}
