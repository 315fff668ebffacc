use serde::{Deserialize, Serialize};

use super::SectionId;
use crate::model::{LineId, Section};

/// a [`Section`] as held by storage, tagged with its id and owning line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: SectionId,
    pub line_id: LineId,
    pub section: Section,
}
