use super::SectionId;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("section id {0} not found")]
    SectionNotFound(SectionId),
    /// raised by storage backends that fail to persist a section
    #[error("failure writing sections: {0}")]
    WriteError(String),
}
