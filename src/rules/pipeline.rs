use crate::error::Result;
use crate::rules::rewriter::RewriteRule;

/// Options selecting which variant of the rewrite pipeline to build.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
	/// Leave debug/sensitive log statements untouched.
	pub keep_debug_logs: bool,
}

/// Matches a wide string literal `L"…"`, escapes included, capturing the
/// quoted text (quotes and all) as group 1. `(?-u)` so the character classes
/// match arbitrary bytes; literals may hold non-UTF-8 text.
const WIDE_LITERAL: &str = r#"(?-u)L("([^"\\]|\\.)*")"#;

/// Matches the per-byte digest dump: from `odslog("HMAC_OUT:");` through the
/// closing brace of the second byte loop. `(?s-u)` so `.` crosses newlines
/// and matches arbitrary bytes; lazy `.*?` inside each brace pair so the
/// match stops at the intended closing brace instead of running to the last
/// `}` in the file.
const DIGEST_DUMP_BLOCK: &str = r#"(?s-u)odslog\("HMAC_OUT:"\);\s*for\s*\(int i = 0; i < digest_len; i\+\+\)\s*\{.*?\}\s*odslog\("NP:"\);\s*for\s*\(int i = 0; i < digest_len; i\+\+\)\s*\{.*?\}"#;

/// Build the ordered rewrite pipeline.
///
/// Order is significant: later rules run over the output of earlier ones.
/// The byte patterns are coupled to the upstream AltSign source snapshot;
/// any rule whose target is absent no-ops silently.
pub fn build_pipeline(options: &PipelineOptions) -> Result<Vec<RewriteRule>> {
	let mut rules = vec![
		// UTF-16 wide literals L"…" become U("…") macro calls on the same
		// quoted text, and the wide string type follows suit.
		RewriteRule::pattern(WIDE_LITERAL, b"U(${1})")?,
		RewriteRule::literal(b"std::wstring", b"std::string"),
		// boost::filesystem is only used where std::filesystem now suffices.
		RewriteRule::literal(b"boost/filesystem.hpp", b"filesystem"),
		RewriteRule::literal(b"boost::filesystem", b"std::filesystem"),
		// Timestamps are already UTC: render a literal Z suffix and convert
		// with gmtime instead of localtime.
		RewriteRule::literal(b"\"%FT%T%z\"", b"\"%Y-%m-%dT%H:%M:%SZ\""),
		RewriteRule::literal(b"localtime(", b"gmtime("),
		// Case-sensitive filesystems need the canonical header casing.
		RewriteRule::literal(b"winsock2.h", b"WinSock2.h"),
		// libplist's plist_from_memory grew a fourth format-out argument.
		RewriteRule::literal(
			b"plist_from_memory((const char *)plistData.data(), (int)plistData.size(), &plist);",
			b"plist_from_memory((const char *)plistData.data(), (int)plistData.size(), &plist, nullptr);",
		),
		RewriteRule::literal(
			b"plist_from_memory((const char*)rawEntitlements.data(), (int)rawEntitlements.size(), &plist);",
			b"plist_from_memory((const char*)rawEntitlements.data(), (int)rawEntitlements.size(), &plist, nullptr);",
		),
		RewriteRule::literal(
			b"plist_from_memory((const char *)pointer, (unsigned int)length, &parsedPlist);",
			b"plist_from_memory((const char *)pointer, (unsigned int)length, &parsedPlist, nullptr);",
		),
	];

	// Reduce high-volume/sensitive debug noise in CLI logs.
	if !options.keep_debug_logs {
		rules.push(RewriteRule::literal(
			b"odslog(\"Signing Progress: \" << signingProgress);",
			b"",
		));
		rules.push(RewriteRule::literal(
			b"odslog(\"Data: \" << decryptedData->data());",
			b"",
		));
		rules.push(RewriteRule::literal(
			b"odslog(\"Got token for \" << app << \"!\\nValue : \" << token);",
			b"odslog(\"Got token for \" << app << \"!\");",
		));
		rules.push(RewriteRule::delete(DIGEST_DUMP_BLOCK)?);
	}

	Ok(rules)
}

/// Run a buffer through the pipeline, top to bottom.
pub fn apply_pipeline(rules: &[RewriteRule], input: &[u8]) -> Vec<u8> {
	let mut buffer = input.to_vec();
	for rule in rules {
		buffer = rule.apply(&buffer);
	}
	buffer
}
