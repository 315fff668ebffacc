mod line_service;
mod line_service_error;

pub use line_service::LineService;
pub use line_service_error::LineServiceError;
