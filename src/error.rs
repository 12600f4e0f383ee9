use std::path::PathBuf;

/// Library-level structured errors for srcpatch.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SrcpatchError {
	#[error("Failed to read source file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read source from stdin")]
	StdinRead {
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid rewrite pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to write patched output")]
	OutputWrite {
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using SrcpatchError.
pub type Result<T> = std::result::Result<T, SrcpatchError>;
