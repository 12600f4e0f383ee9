//! The rewrite engine for srcpatch.
//!
//! This module handles:
//! - Byte-level literal and regex substitution/deletion rules
//! - The fixed, ordered pipeline those rules are applied in

pub mod pipeline;
pub mod rewriter;

pub use pipeline::{PipelineOptions, apply_pipeline, build_pipeline};
pub use rewriter::RewriteRule;
