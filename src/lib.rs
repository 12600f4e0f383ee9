//! Srcpatch - build-time patcher for third-party signing library sources.
//!
//! This library provides the core functionality for srcpatch, including:
//! - The fixed, ordered rewrite rule pipeline (platform-API substitutions,
//!   string-literal macro rewrites, timestamp fixes, call-signature updates,
//!   sensitive-log suppression)
//! - Byte-level literal and regex substitution/deletion rules
//! - Source buffer loading (file or stdin) and raw stdout emission
//!
//! # Example
//!
//! ```
//! use srcpatch_cli::rules::{PipelineOptions, apply_pipeline, build_pipeline};
//!
//! let rules = build_pipeline(&PipelineOptions::default()).unwrap();
//! let patched = apply_pipeline(&rules, b"std::wstring name = L\"alt\";");
//! assert_eq!(patched, b"std::string name = U(\"alt\");");
//! ```

pub mod error;
pub mod rules;
pub mod source;

pub use error::{Result, SrcpatchError};
