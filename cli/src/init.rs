use crate::error::{Result, ResultExt};
use crate::ui;
use truth_finder::config::ensure_config_file_exists;

pub fn execute(config_path: String, force: bool) -> Result<()> {
    ui::section_header("TruthFinder Configuration Setup");

    let written = ensure_config_file_exists(&config_path, force)
        .with_context(|| format!("Failed to write {}", config_path))?;

    if written {
        ui::success_message(&format!("Created {}", config_path));
        ui::info_message(&format!(
            "Edit {} to point at your analysis service",
            config_path
        ));
    } else {
        ui::warning_message(&format!(
            "{} already exists; use --force to overwrite it",
            config_path
        ));
    }

    Ok(())
}
