use crate::error::{AnalysisError, Result};
use std::fs;
use std::path::Path;

/// Generate the default truthfinder.toml template
pub fn generate_default_config_template() -> String {
    r#"# TruthFinder Configuration
# Settings for the article analysis service client

[service]
# URL that article URLs are POSTed to for analysis
endpoint = "https://truthfinderai-backend.onrender.com"
# Health probe path, resolved against the endpoint's host
health_path = "/health"
# Request timeout in seconds (analysis can be slow on cold starts)
timeout_seconds = 60

# Extra headers sent with every request (optional)
[service.headers]
"User-Agent" = "truthfinder/0.1"
"#
    .to_string()
}

/// Write the default configuration file.
///
/// Returns `true` when a file was written. An existing file is left untouched
/// unless `overwrite` is set.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, overwrite: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(AnalysisError::Io)?;
        }
    }

    fs::write(path, generate_default_config_template()).map_err(AnalysisError::Io)?;
    Ok(true)
}
