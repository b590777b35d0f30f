//! Text Normalization Module
//!
//! Small pure helpers shared by the extractors:
//! - Whitespace collapsing
//! - Credential stripping (text before the first comma)
//! - Name splitting, with one policy per directory layout
//! - Employee ID extraction from profile links

/// Query marker that identifies a profile link in the employee directory
pub const EMPLOYEE_ID_MARKER: &str = "empID=";

/// Credentials that mark a paragraph as a faculty bio.
/// Matched case-sensitively as plain substrings.
pub const CREDENTIALS: [&str; 5] = ["MD", "FASA", "DO", "MBA", "PhD"];

/// Collapse runs of whitespace to single spaces and trim the ends
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Everything before the first comma, e.g. "John Smith, MD" -> "John Smith"
pub fn strip_credentials(text: &str) -> &str {
    match text.find(',') {
        Some(idx) => &text[..idx],
        None => text,
    }
}

/// Split used by the employee directory.
///
/// The first token is the first name; the remaining tokens, joined by single
/// spaces, form the last name. A single token leaves the last name empty.
pub fn split_name_first_token(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.split_first() {
        Some((first, rest)) => (first.to_string(), rest.join(" ")),
        None => (String::new(), String::new()),
    }
}

/// Split used by the credential bios.
///
/// Three or more tokens: the first two form the first name, the rest the last
/// name. Otherwise the first token is the first name and the second (if any)
/// the last name.
pub fn split_name_first_two(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    if parts.len() > 2 {
        (parts[..2].join(" "), parts[2..].join(" "))
    } else {
        (
            parts.first().map(|s| s.to_string()).unwrap_or_default(),
            parts.get(1).map(|s| s.to_string()).unwrap_or_default(),
        )
    }
}

/// True when any credential appears anywhere in the text.
/// No word-boundary check: "DO" inside "DOCTOR" counts.
pub fn mentions_credential(text: &str) -> bool {
    CREDENTIALS.iter().any(|c| text.contains(c))
}

/// The unmodified text following the first `empID=` in a link target
pub fn employee_id(href: &str) -> Option<&str> {
    href.find(EMPLOYEE_ID_MARKER)
        .map(|idx| &href[idx + EMPLOYEE_ID_MARKER.len()..])
}

pub fn email_for(id: &str, domain: &str) -> String {
    format!("{}@{}", id, domain)
}
