use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how a line report is written
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// one station id per line
    #[default]
    Text,
    /// stations, sections and total length as a JSON object
    Json,
}
