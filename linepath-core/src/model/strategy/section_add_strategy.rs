use std::fmt::Display;

use crate::model::{Section, SectionError};

use super::split_ops;

/// the topological cases for inserting a new [`Section`] into a line.
///
/// a strategy is chosen by [`SectionAddStrategy::classify`] from the existing
/// sections and the endpoints of the new section, and then applied to the
/// section collection with [`SectionAddStrategy::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAddStrategy {
    /// the line has no sections yet.
    FirstInsert,
    /// the new section starts where an existing section starts. the section at
    /// `index` is divided at the new section's down station.
    SplitSharedUp { index: usize },
    /// the new section ends where an existing section ends. the section at
    /// `index` is divided at the new section's up station.
    SplitSharedDown { index: usize },
    /// the new section starts at the last station of the line.
    AppendBack,
    /// the new section ends at the first station of the line.
    AppendFront,
}

impl SectionAddStrategy {
    /// picks the insertion case for `section`. splits are tested before appends
    /// so that a section sharing an endpoint with an existing section refines
    /// that section instead of branching off of it.
    pub fn classify(
        sections: &[Section],
        section: &Section,
    ) -> Result<SectionAddStrategy, SectionError> {
        if sections.is_empty() {
            return Ok(Self::FirstInsert);
        }

        if let Some(index) = sections
            .iter()
            .position(|s| s.is_up_station(section.up_station()))
        {
            return Ok(Self::SplitSharedUp { index });
        }

        if let Some(index) = sections
            .iter()
            .position(|s| s.is_down_station(section.down_station()))
        {
            return Ok(Self::SplitSharedDown { index });
        }

        if sections
            .iter()
            .any(|s| s.is_down_station(section.up_station()))
        {
            return Ok(Self::AppendBack);
        }

        if sections
            .iter()
            .any(|s| s.is_up_station(section.down_station()))
        {
            return Ok(Self::AppendFront);
        }

        Err(SectionError::NoInsertionPoint(
            section.up_station(),
            section.down_station(),
        ))
    }

    /// checks the length of `section` against the section it would divide. appends
    /// and first inserts accept any length.
    pub fn check_length(&self, sections: &[Section], section: &Section) -> Result<(), SectionError> {
        match self {
            Self::FirstInsert | Self::AppendBack | Self::AppendFront => Ok(()),
            Self::SplitSharedUp { index } | Self::SplitSharedDown { index } => {
                split_ops::check_split(sections, *index, section)
            }
        }
    }

    /// applies this insertion case to the section collection.
    pub fn apply(&self, sections: &mut Vec<Section>, section: Section) -> Result<(), SectionError> {
        match self {
            Self::FirstInsert | Self::AppendBack | Self::AppendFront => {
                sections.push(section);
                Ok(())
            }
            Self::SplitSharedUp { index } => split_ops::split_shared_up(sections, *index, section),
            Self::SplitSharedDown { index } => {
                split_ops::split_shared_down(sections, *index, section)
            }
        }
    }
}

impl Display for SectionAddStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FirstInsert => "first insert",
            Self::SplitSharedUp { .. } => "split on shared up station",
            Self::SplitSharedDown { .. } => "split on shared down station",
            Self::AppendBack => "append back",
            Self::AppendFront => "append front",
        };
        write!(f, "{name}")
    }
}
