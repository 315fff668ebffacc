use linepath_core::{model::SectionError, service::LineServiceError};

#[derive(thiserror::Error, Debug)]
pub enum LineAppError {
    #[error("{0}")]
    ConfigurationError(String),
    #[error("failure reading section rows: {0}")]
    CsvError(#[from] csv::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("failure encoding report: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("row {row}: {source}")]
    RowError { row: usize, source: LineServiceError },
    #[error(transparent)]
    SectionError(#[from] SectionError),
    #[error(transparent)]
    LineServiceError(#[from] LineServiceError),
    #[error("output file {0} already exists, set 'overwrite' to replace it")]
    OutputExistsError(String),
}
