mod config_ops;
mod line_import_configuration;
mod output_format;

pub use line_import_configuration::LineImportConfiguration;
pub use output_format::OutputFormat;
