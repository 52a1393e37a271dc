// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                            FAVICON EMITTER                                   ║
// ║                     Placeholder favicon.ico writer                           ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Drops a fixed favicon.ico into the working directory. The file is a
// placeholder that browsers fall back from in favour of the SVG icon, so the
// bytes are deliberately not a valid icon image.
//
// 📦 OUTPUT LAYOUT
// ----------------
//   [ICO header: 22 bytes] [Pseudo-PNG: 33 bytes] [Zero tail: 1384 bytes]
//
// The output is identical on every run. Stdout receives exactly one line,
// "Favicon files created!", and only after the file has been written.
//
// ══════════════════════════════════════════════════════════════════════════════

mod logger;
mod constants;
mod io;
mod emit;

use clap::Parser;
use emit::emit;
use crate::logger::{log, LogLevel};
use colored::*;

/// Writes a placeholder favicon.ico into the current directory
#[derive(Parser)]
#[command(name = "favicon-emitter")]
#[command(version)]
#[command(about = "Write a placeholder favicon.ico to the current directory", long_about = None)]
struct Cli {}

fn main() {
	let _cli = Cli::parse();

	log(LogLevel::Info, &format!("Emitting {}", constants::OUTPUT_FILE.cyan()));

	if let Err(e) = emit() {
		log(LogLevel::Error, &e.to_string());
		std::process::exit(1);
	}
}
