//! Response sanitizer — pulls a structured candidate out of raw model text.
//!
//! Models wrap payloads in code fences or surround them with prose despite
//! instructions not to. The extraction order is a documented heuristic, not
//! a contract with the upstream model: bracket span for array payloads,
//! fence strip otherwise, trimmed original as the last resort.

/// Extracts the candidate payload from raw model output.
///
/// `expects_array` comes from the requested content kind. When set, the
/// substring from the first `[` to the last `]` (inclusive) is the
/// candidate; fences and prose around the array are discarded. Otherwise
/// code fences are stripped and the remainder trimmed. Text with neither
/// comes back unchanged apart from trimming — that path serves free-text
/// chat replies, which are never validated as structured data.
pub fn extract_candidate(raw: &str, expects_array: bool) -> String {
    if expects_array {
        if let Some(span) = bracket_span(raw) {
            return span.to_string();
        }
    }
    strip_code_fences(raw).trim().to_string()
}

/// Substring from the first `[` to the last `]`, inclusive.
fn bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences, tolerating any
/// alphanumeric language tag on the opening fence.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag on the opening fence line, if any.
    let rest = match rest.find('\n') {
        Some(idx) if rest[..idx].chars().all(|c| c.is_ascii_alphanumeric()) => &rest[idx + 1..],
        _ => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest.trim())
}
