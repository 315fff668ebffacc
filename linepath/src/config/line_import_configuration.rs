use linepath_core::model::LineId;
use serde::{Deserialize, Serialize};

use super::{config_ops, OutputFormat};
use crate::app::LineAppError;

/// defines behaviors for building a line from a section file
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LineImportConfiguration {
    /// line that receives the imported sections
    pub line_id: LineId,
    /// if true, rows that cannot be inserted are logged and skipped instead of
    /// stopping the import.
    pub ignore_invalid_sections: bool,
    pub output_format: OutputFormat,
    /// allow replacing an existing output file
    pub overwrite: bool,
}

impl Default for LineImportConfiguration {
    fn default() -> Self {
        Self {
            line_id: LineId(1),
            ignore_invalid_sections: false,
            output_format: OutputFormat::Text,
            overwrite: false,
        }
    }
}

impl TryFrom<&String> for LineImportConfiguration {
    type Error = LineAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        config_ops::read_config_file(f)
    }
}
