//! Source buffer loading and emission.
//!
//! The buffer is opaque bytes end to end: it is never decoded as text, so
//! sources with non-ASCII literals (or any other encoding) pass through the
//! pipeline untouched except where a rule matches.

use crate::error::{Result, SrcpatchError};
use std::io::{Read, Write};
use std::path::Path;

/// Read the full byte content of the source file; `-` reads stdin instead.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
	if path.as_os_str() == "-" {
		let mut buffer = Vec::new();
		std::io::stdin()
			.read_to_end(&mut buffer)
			.map_err(|source| SrcpatchError::StdinRead { source })?;
		return Ok(buffer);
	}

	std::fs::read(path).map_err(|source| SrcpatchError::SourceRead {
		path: path.to_path_buf(),
		source,
	})
}

/// Write the transformed buffer to stdout as raw bytes.
pub fn write_stdout(buffer: &[u8]) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	stdout
		.write_all(buffer)
		.and_then(|()| stdout.flush())
		.map_err(|source| SrcpatchError::OutputWrite { source })
}
