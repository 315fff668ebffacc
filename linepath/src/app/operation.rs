//! line building and validation commands for section files.
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::{line_ops, LineAppError};
use crate::config::{LineImportConfiguration, OutputFormat};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum LineOperation {
    /// insert each section of a file into an empty line, in file order, and report the stations
    Build {
        /// CSV file with header `up_station,down_station,length`
        #[arg(long)]
        sections_file: String,
        /// path to a .toml or .json file with import parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// write the report here instead of stdout
        #[arg(long)]
        output_file: Option<String>,
        /// overrides the output format of the configuration file
        #[arg(long, value_enum)]
        output_format: Option<OutputFormat>,
    },
    /// check that the sections of a file already form a single line, and report the stations
    Validate {
        /// CSV file with header `up_station,down_station,length`
        #[arg(long)]
        sections_file: String,
        /// path to a .toml or .json file with import parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// write the report here instead of stdout
        #[arg(long)]
        output_file: Option<String>,
        /// overrides the output format of the configuration file
        #[arg(long, value_enum)]
        output_format: Option<OutputFormat>,
    },
}

impl LineOperation {
    pub fn run(&self) -> Result<(), LineAppError> {
        match self {
            LineOperation::Build {
                sections_file,
                configuration_file,
                output_file,
                output_format,
            } => {
                let conf = configuration(configuration_file.as_ref(), output_format)?;
                let rows = line_ops::read_section_file(sections_file)?;
                log::info!("read {} sections from {sections_file}", rows.len());
                let report = line_ops::build_line(&rows, &conf)?;
                line_ops::write_report(&report, &conf, output_file.as_ref())
            }
            LineOperation::Validate {
                sections_file,
                configuration_file,
                output_file,
                output_format,
            } => {
                let conf = configuration(configuration_file.as_ref(), output_format)?;
                let rows = line_ops::read_section_file(sections_file)?;
                log::info!("read {} sections from {sections_file}", rows.len());
                let report = line_ops::validate_line(&rows, &conf)?;
                line_ops::write_report(&report, &conf, output_file.as_ref())
            }
        }
    }
}

fn configuration(
    configuration_file: Option<&String>,
    output_format: &Option<OutputFormat>,
) -> Result<LineImportConfiguration, LineAppError> {
    let mut conf = line_ops::read_configuration(configuration_file)?;
    if let Some(format) = output_format {
        conf.output_format = *format;
    }
    Ok(conf)
}
