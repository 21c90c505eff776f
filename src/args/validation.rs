use super::types::Args;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The data file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if `origin` isn't an http(s) origin
pub fn check_origin(origin: &str) -> Result<(), String> {
    let origin = origin.trim();
    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| format!("Allowed origin '{origin}' must start with http:// or https://"))?;
    if rest.trim_end_matches('/').is_empty() || rest.trim_end_matches('/').contains('/') {
        return Err(format!(
            "Allowed origin '{origin}' must be scheme and host only, without a path"
        ));
    }
    Ok(())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the server configuration is invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host is required".to_string());
        }
        if self.allowed_origin.is_empty() {
            return Err("At least one allowed origin is required".to_string());
        }
        for origin in &self.allowed_origin {
            check_origin(origin)?;
        }
        Ok(())
    }
}
