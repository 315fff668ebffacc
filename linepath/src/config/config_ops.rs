use std::path::Path;

use serde::de::DeserializeOwned;

use crate::app::LineAppError;

/// file formats accepted for configuration files, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

/// reads a `.toml` or `.json` file into a configuration type.
pub fn read_config_file<T: DeserializeOwned>(f: &str) -> Result<T, LineAppError> {
    let format = config_format(f)?;
    let s = std::fs::read_to_string(f)
        .map_err(|e| LineAppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
    decode(&s, format)
        .map_err(|e| LineAppError::ConfigurationError(format!("failure decoding {f}: {e}")))
}

fn config_format(f: &str) -> Result<ConfigFormat, LineAppError> {
    match Path::new(f).extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(LineAppError::ConfigurationError(format!(
            "unsupported file type: {f}"
        ))),
    }
}

fn decode<T: DeserializeOwned>(s: &str, format: ConfigFormat) -> Result<T, String> {
    match format {
        ConfigFormat::Toml => toml::from_str(s).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(s).map_err(|e| e.to_string()),
    }
}
