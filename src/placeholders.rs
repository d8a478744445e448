//! Template placeholder extraction
//!
//! Templates embed variables as `{{name}}` where `name` is one or more ASCII
//! word characters (`[A-Za-z0-9_]`). The composer and the template manager both
//! derive variable slots through this module so that what an author sees while
//! editing is exactly what the sender is asked to fill in.

use std::collections::HashSet;

const OPEN: &[u8] = b"{{";
const CLOSE: &[u8] = b"}}";

/// Extracts the distinct placeholder names in `text`, in order of first appearance.
///
/// No whitespace is tolerated inside the braces, so `{{ name }}` is not a
/// placeholder. Scanning resumes right after a match, or one character after a
/// failed candidate, which means `{{{a}}` still yields `a`.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match match_placeholder_at(bytes, i) {
            Some(end) => {
                // Word characters are ASCII, so these byte offsets are char boundaries
                let name = &text[i + OPEN.len()..end];
                if seen.insert(name) {
                    names.push(name.to_string());
                }
                i = end + CLOSE.len();
            }
            None => i += 1,
        }
    }

    names
}

/// Variable slots of a template, taken over its subject and body together.
pub fn template_slots(subject: &str, body: &str) -> Vec<String> {
    extract_placeholders(&format!("{} {}", subject, body))
}

/// Returns the end offset of the name when a placeholder starts at `pos`.
fn match_placeholder_at(bytes: &[u8], pos: usize) -> Option<usize> {
    if !bytes[pos..].starts_with(OPEN) {
        return None;
    }

    let name_start = pos + OPEN.len();
    let name_end = bytes[name_start..]
        .iter()
        .position(|b| !is_word_byte(*b))
        .map_or(bytes.len(), |offset| name_start + offset);

    if name_end == name_start || !bytes[name_end..].starts_with(CLOSE) {
        return None;
    }

    Some(name_end)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
