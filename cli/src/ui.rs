use colored::Colorize;

/// Print a status message
pub fn status_message(message: &str) {
    eprintln!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

/// Print a success message
pub fn success_message(message: &str) {
    eprintln!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    eprintln!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    eprintln!("{} {}", "ℹ️ ".blue(), message.blue());
}
