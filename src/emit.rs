// ══════════════════════════════════════════════════════════════════════════════
// EMIT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Assembles the placeholder favicon (header, pseudo-bitmap, zero tail) and
// writes it to favicon.ico. The confirmation line is printed only once the
// bytes are on disk.

use std::io::Write;
use std::path::{Path, PathBuf};
use crc32fast::Hasher;
use crate::constants::{SVG_SOURCE, ICO_HEADER, PSEUDO_BITMAP, PADDING_LEN, FAVICON_LEN, OUTPUT_FILE, CONFIRMATION};
use crate::io::{create_file, write_all_to, EmitError};
use crate::logger::{log, LogLevel};

/// Header, pseudo-bitmap, then `PADDING_LEN` zero bytes.
pub fn build_payload() -> Vec<u8> {
	let mut payload = Vec::with_capacity(FAVICON_LEN);
	payload.extend_from_slice(&ICO_HEADER);
	payload.extend_from_slice(&PSEUDO_BITMAP);
	payload.resize(payload.len() + PADDING_LEN, 0);
	payload
}

/// Writes the payload to `path`, truncating anything already there.
pub fn write_favicon(path: &Path) -> Result<u64, EmitError> {
	let payload = build_payload();
	let file = create_file(path)?;
	write_all_to(file, &payload, path)?;

	let mut hasher = Hasher::new();
	hasher.update(&payload);
	log(LogLevel::Info, &format!("Wrote {} bytes. CRC32: {:08X}", payload.len(), hasher.finalize()));
	Ok(payload.len() as u64)
}

/// Emits `dir/favicon.ico`, then writes the confirmation line to `out`.
pub fn emit_in<W: Write>(dir: &Path, out: &mut W) -> Result<PathBuf, EmitError> {
	log(LogLevel::Info, &format!("SVG artwork held in memory ({} bytes)", SVG_SOURCE.len()));

	let path = dir.join(OUTPUT_FILE);
	if path.exists() {
		log(LogLevel::Warning, &format!("Overwriting {}", path.display()));
	}

	write_favicon(&path)?;

	writeln!(out, "{}", CONFIRMATION).map_err(|source| EmitError::Io { path: PathBuf::from("<confirmation output>"), source })?;
	log(LogLevel::Success, &format!("Favicon ready → {}", path.display()));
	Ok(path)
}

/// Emits favicon.ico in the working directory and confirms on stdout.
pub fn emit() -> Result<PathBuf, EmitError> {
	emit_in(Path::new("."), &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn payload_layout_is_header_bitmap_then_zeros() {
		let payload = build_payload();
		assert_eq!(payload.len(), ICO_HEADER.len() + PSEUDO_BITMAP.len() + PADDING_LEN);
		assert_eq!(&payload[..ICO_HEADER.len()], &ICO_HEADER);
		let bitmap_end = ICO_HEADER.len() + PSEUDO_BITMAP.len();
		assert_eq!(&payload[ICO_HEADER.len()..bitmap_end], &PSEUDO_BITMAP);
		assert!(payload[bitmap_end..].iter().all(|&b| b == 0));
	}

	#[test]
	fn emit_writes_file_and_confirms() {
		let dir = TempDir::new().unwrap();
		let mut out = Vec::new();

		let path = emit_in(dir.path(), &mut out).unwrap();

		assert_eq!(path, dir.path().join("favicon.ico"));
		let written = std::fs::read(&path).unwrap();
		assert_eq!(written.len(), 1439);
		assert_eq!(written, build_payload());
		assert_eq!(String::from_utf8(out).unwrap(), "Favicon files created!\n");
	}

	#[test]
	fn second_run_overwrites_with_identical_bytes() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join(OUTPUT_FILE);
		std::fs::write(&path, vec![0xFF; 4096]).unwrap();

		emit_in(dir.path(), &mut Vec::new()).unwrap();
		let first = std::fs::read(&path).unwrap();
		emit_in(dir.path(), &mut Vec::new()).unwrap();
		let second = std::fs::read(&path).unwrap();

		assert_eq!(first.len(), FAVICON_LEN);
		assert_eq!(first, second);
	}

	#[test]
	fn unwritable_location_fails_without_confirmation() {
		let dir = TempDir::new().unwrap();
		let missing = dir.path().join("missing");
		let mut out = Vec::new();

		let result = emit_in(&missing, &mut out);

		assert!(matches!(result, Err(EmitError::FileAccess { .. })));
		assert!(out.is_empty());
		assert!(!missing.join(OUTPUT_FILE).exists());
	}

	struct BrokenPipe;

	impl Write for BrokenPipe {
		fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
			Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn failing_confirmation_writer_is_io_error_after_file_written() {
		let dir = TempDir::new().unwrap();

		let result = emit_in(dir.path(), &mut BrokenPipe);

		match result {
			Err(EmitError::Io { path, source }) => {
				assert_eq!(path, PathBuf::from("<confirmation output>"));
				assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
			}
			other => panic!("expected Io, got {:?}", other),
		}
		assert_eq!(std::fs::read(dir.path().join(OUTPUT_FILE)).unwrap().len(), FAVICON_LEN);
	}

	#[cfg(target_os = "linux")]
	#[test]
	fn full_device_fails_with_io_error() {
		let path = Path::new("/dev/full");
		assert!(matches!(write_favicon(path), Err(EmitError::Io { .. })));
	}

	#[test]
	fn write_favicon_reports_byte_count() {
		let dir = TempDir::new().unwrap();
		let n = write_favicon(&dir.path().join("icon.ico")).unwrap();
		assert_eq!(n, FAVICON_LEN as u64);
	}
}
