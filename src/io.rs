// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// File access for the emitter. Opening and writing fail with distinct error
// kinds so callers can tell "could not open" apart from "failed mid-write".

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
	#[error("Cannot open '{}' for writing: {source}", path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Write to '{}' failed: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Creates (or truncates) a file for binary writing.
pub fn create_file(path: &Path) -> Result<File, EmitError> {
	File::create(path).map_err(|source| EmitError::FileAccess { path: path.to_path_buf(), source })
}

/// Writes all bytes and flushes. The handle is closed when this returns.
pub fn write_all_to(file: File, bytes: &[u8], path: &Path) -> Result<(), EmitError> {
	let io_err = |source: std::io::Error| EmitError::Io { path: path.to_path_buf(), source };
	let mut writer = BufWriter::new(file);
	writer.write_all(bytes).map_err(io_err)?;
	writer.flush().map_err(io_err)?;
	Ok(())
}
