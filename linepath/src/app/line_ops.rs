use std::{fs::File, io::Read, path::Path};

use linepath_core::{
    model::{Section, Sections},
    repository::InMemorySectionRepository,
    service::LineService,
};

use super::{LineAppError, LineReport, SectionRow};
use crate::config::{LineImportConfiguration, OutputFormat};

/// reads `up_station,down_station,length` rows with a header line.
pub fn read_section_rows<R: Read>(reader: R) -> Result<Vec<SectionRow>, LineAppError> {
    let rows = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize::<SectionRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// inserts each row into an empty line in file order, as a sequence of edits
/// against a section repository.
pub fn build_line(
    rows: &[SectionRow],
    conf: &LineImportConfiguration,
) -> Result<LineReport, LineAppError> {
    let mut repository = InMemorySectionRepository::new();
    let mut service = LineService::new(&mut repository);
    for (idx, row) in rows.iter().enumerate() {
        // row numbers count the header line
        let row_number = idx + 2;
        match service.add_section(conf.line_id, row.up_station, row.down_station, row.length) {
            Ok(stations) => {
                log::debug!(
                    "row {row_number}: added {}->{}, line has {} stations",
                    row.up_station,
                    row.down_station,
                    stations.len()
                );
            }
            Err(e) if conf.ignore_invalid_sections => {
                log::warn!("row {row_number}: skipping section: {e}");
            }
            Err(e) => {
                return Err(LineAppError::RowError {
                    row: row_number,
                    source: e,
                })
            }
        }
    }
    let sections = service.get_sections(conf.line_id)?;
    let stations = sections.get_stations()?;
    log::info!(
        "built line {} with {} stations from {} rows",
        conf.line_id,
        stations.len(),
        rows.len()
    );
    Ok(LineReport {
        line_id: conf.line_id,
        stations,
        total_length: sections.total_length()?,
        sections: sections.into_inner(),
    })
}

/// treats the rows as an already stored line and checks that they form a
/// single path.
pub fn validate_line(
    rows: &[SectionRow],
    conf: &LineImportConfiguration,
) -> Result<LineReport, LineAppError> {
    let sections = rows
        .iter()
        .map(Section::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let sections = Sections::new(sections);
    sections.validate()?;
    let stations = sections.get_stations()?;
    log::info!(
        "line {} is a single path of {} stations",
        conf.line_id,
        stations.len()
    );
    Ok(LineReport {
        line_id: conf.line_id,
        stations,
        total_length: sections.total_length()?,
        sections: sections.into_inner(),
    })
}

pub fn read_configuration(
    configuration_file: Option<&String>,
) -> Result<LineImportConfiguration, LineAppError> {
    match configuration_file {
        None => Ok(LineImportConfiguration::default()),
        Some(f) => {
            log::info!("reading linepath configuration from {f}");
            LineImportConfiguration::try_from(f)
        }
    }
}

pub fn read_section_file(sections_file: &str) -> Result<Vec<SectionRow>, LineAppError> {
    let file = File::open(sections_file)?;
    read_section_rows(file)
}

/// renders the report in the configured format, to `output_file` if given,
/// otherwise to stdout.
pub fn write_report(
    report: &LineReport,
    conf: &LineImportConfiguration,
    output_file: Option<&String>,
) -> Result<(), LineAppError> {
    let rendered = match conf.output_format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    match output_file {
        None => {
            println!("{rendered}");
            Ok(())
        }
        Some(f) => {
            if Path::new(f).exists() && !conf.overwrite {
                return Err(LineAppError::OutputExistsError(f.clone()));
            }
            std::fs::write(f, rendered)?;
            log::info!("wrote line {} report to {f}", report.line_id);
            Ok(())
        }
    }
}
