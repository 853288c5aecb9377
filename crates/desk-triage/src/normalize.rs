//! Complaint text canonicalization.

/// Canonicalize raw complaint text for rule matching.
///
/// Trims surrounding whitespace and lowercases the result. Punctuation is
/// kept and the text is not tokenized -- rule matching downstream is
/// substring-based. Whitespace-only input normalizes to the empty string,
/// which callers must reject before classification.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
