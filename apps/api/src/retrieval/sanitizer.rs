//! Normalizes raw model text into a JSON candidate.
//!
//! Best-effort only: nothing here validates JSON, and no input is rejected.

const FENCE: &str = "```";

/// Language tags recognised directly after an opening fence, in match order.
const FENCE_TAGS: &[&str] = &["json", "javascript", "js"];

/// Strips code fences, surrounding whitespace and stray edge backticks.
///
/// The single pass is repeated until the text stops changing, so
/// `clean(clean(x)) == clean(x)` holds for every input.
pub fn clean(raw: &str) -> String {
    let mut current = clean_once(raw);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let without_fences = remove_fences(text);
    let trimmed = without_fences.trim();
    let trimmed = trimmed.strip_prefix('`').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('`').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Removes every ``` fence together with an optional language tag and the
/// whitespace that follows it.
fn remove_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];

        if let Some(tag) = FENCE_TAGS.iter().find(|tag| rest.starts_with(**tag)) {
            rest = &rest[tag.len()..];
        }
        rest = rest.trim_start();
    }

    out.push_str(rest);
    out
}
