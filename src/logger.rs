// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Colored, timestamped diagnostics. Lines go to stderr so stdout carries
// nothing but the confirmation message.

use colored::*;
use chrono::Local;

pub enum LogLevel {
	Info,
	Success,
	Warning,
	Error,
}

pub fn format_line(level: &LogLevel, timestamp: &str, message: &str) -> String {
	let prefix = match level {
		LogLevel::Info => "𝒊 ".blue().bold(),
		LogLevel::Success => "✔ ".green().bold(),
		LogLevel::Warning => "⚠ ".yellow().bold(),
		LogLevel::Error => "✘ ".red().bold(),
	};

	format!("[{}] {} {}", timestamp.dimmed(), prefix, message)
}

pub fn log(level: LogLevel, message: &str) {
	let timestamp = Local::now().format("%H:%M:%S").to_string();
	eprintln!("{}", format_line(&level, &timestamp, message));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_contains_timestamp_and_message() {
		colored::control::set_override(false);
		let line = format_line(&LogLevel::Success, "12:34:56", "done");
		assert_eq!(line, "[12:34:56] ✔  done");
	}
}
