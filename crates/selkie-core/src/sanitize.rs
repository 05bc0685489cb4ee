//! Label cleanup for generated Mermaid text.
//!
//! Flowchart node labels and the mindmap title share one cleaning chain:
//! strip bracket and quote characters, spell out `&`, collapse whitespace,
//! then cap the length. Spider branch labels only lose parentheses because
//! the `root)text(` line is the only shape-sensitive position in that
//! serialization.

/// Maximum displayed label length before truncation kicks in.
pub const LABEL_LIMIT: usize = 30;

const ELLIPSIS: &str = "...";

/// Strips characters that would break Mermaid node syntax and collapses
/// runs of whitespace into single spaces. `&` becomes `and`.
pub fn clean_label(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '(' | ')' | '[' | ']' | '{' | '}' | '#' | '"' | '\'' => {}
            '&' => cleaned.push_str("and"),
            _ => cleaned.push(ch),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() > max_len {
        let keep = max_len.saturating_sub(ELLIPSIS.len());
        let mut out: String = label.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        label.to_owned()
    }
}

/// Cleans a node label for flowchart output. An empty result falls back to
/// `Node` so every emitted line keeps visible text.
pub fn sanitize_label(raw: &str, max_len: usize) -> String {
    let cleaned = clean_label(raw);
    if cleaned.is_empty() {
        return "Node".to_owned();
    }
    truncate_label(&cleaned, max_len)
}

/// Removes parentheses only, for spider mindmap branch labels.
pub fn strip_parentheses(label: &str) -> String {
    label.chars().filter(|ch| !matches!(ch, '(' | ')')).collect()
}

/// Derives the diagram title from the first H1 text, when present.
/// Missing or empty headings fall back to `Mindmap`.
pub fn title_label(heading: Option<&str>) -> String {
    let cleaned = heading.map(clean_label).unwrap_or_default();
    if cleaned.is_empty() {
        return "Mindmap".to_owned();
    }
    truncate_label(&cleaned, LABEL_LIMIT)
}
