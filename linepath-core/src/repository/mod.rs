mod in_memory_section_repository;
mod repository_error;
mod section_id;
mod section_record;
mod section_repository;

pub use in_memory_section_repository::InMemorySectionRepository;
pub use repository_error::RepositoryError;
pub use section_id::SectionId;
pub use section_record::SectionRecord;
pub use section_repository::SectionRepository;
