//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Escape a value for use inside a double-quoted DOT string
pub fn escape_dot(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape a value for use inside a double-quoted Mermaid label
pub fn escape_mermaid(input: &str) -> String {
    input.replace('"', "#quot;").replace('\n', "<br/>")
}
