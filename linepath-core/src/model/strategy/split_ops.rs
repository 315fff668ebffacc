use crate::model::{Section, SectionError};

/// divides the section at `index` with `section`, which shares its up station.
/// the existing section is replaced by `section` followed by the remainder
/// running from `section`'s down station to the existing down station.
pub fn split_shared_up(
    sections: &mut Vec<Section>,
    index: usize,
    section: Section,
) -> Result<(), SectionError> {
    let existing = target(sections, index)?;
    let remaining = remaining_length(&existing, &section)?;
    let remainder = Section::new(section.down_station(), existing.down_station(), remaining)?;
    sections.splice(index..=index, [section, remainder]);
    Ok(())
}

/// divides the section at `index` with `section`, which shares its down station.
/// the existing section is replaced by the remainder running from the existing
/// up station to `section`'s up station, followed by `section`.
pub fn split_shared_down(
    sections: &mut Vec<Section>,
    index: usize,
    section: Section,
) -> Result<(), SectionError> {
    let existing = target(sections, index)?;
    let remaining = remaining_length(&existing, &section)?;
    let remainder = Section::new(existing.up_station(), section.up_station(), remaining)?;
    sections.splice(index..=index, [remainder, section]);
    Ok(())
}

/// confirms that `section` fits inside the section at `index` without changing anything.
pub fn check_split(sections: &[Section], index: usize, section: &Section) -> Result<(), SectionError> {
    let existing = target(sections, index)?;
    remaining_length(&existing, section).map(|_| ())
}

fn target(sections: &[Section], index: usize) -> Result<Section, SectionError> {
    sections.get(index).cloned().ok_or_else(|| {
        SectionError::BrokenPath(format!(
            "split target index {index} is out of bounds for {} sections",
            sections.len()
        ))
    })
}

/// length left over after cutting `section` out of `existing`.
fn remaining_length(existing: &Section, section: &Section) -> Result<u64, SectionError> {
    if section.length() == 0 || section.length() >= existing.length() {
        return Err(SectionError::InvalidSectionLength {
            new_length: section.length(),
            existing_length: existing.length(),
        });
    }
    Ok(existing.length() - section.length())
}
