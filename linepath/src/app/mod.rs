mod line_app;
mod line_app_error;
mod line_ops;
mod line_report;
mod operation;
mod section_row;

pub use line_app::LineApp;
pub use line_app_error::LineAppError;
pub use line_ops::{build_line, read_section_rows, validate_line};
pub use line_report::LineReport;
pub use operation::LineOperation;
pub use section_row::SectionRow;
