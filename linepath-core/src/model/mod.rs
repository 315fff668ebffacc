mod line_id;
mod section;
mod section_error;
mod sections;
mod station_id;
pub mod strategy;

pub use line_id::LineId;
pub use section::{Section, SectionConfig};
pub use section_error::SectionError;
pub use sections::Sections;
pub use station_id::StationId;
