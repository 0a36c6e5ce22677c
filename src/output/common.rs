//! Common utilities for output formatters

/// Escape a value for CSV output
/// Handles commas, quotes, and line breaks according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// `memory_quota_gb` -> `Memory Quota Gb`
pub fn title_case(field: &str) -> String {
    field
        .split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_escape_csv_with_line_breaks() {
        assert_eq!(escape_csv("has\nnewline"), "\"has\nnewline\"");
        assert_eq!(escape_csv("has\rreturn"), "\"has\rreturn\"");
    }

    #[test]
    fn test_escape_csv_empty() {
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("name"), "Name");
        assert_eq!(title_case("is_default"), "Is Default");
        assert_eq!(title_case("memory_quota_gb"), "Memory Quota Gb");
        assert_eq!(title_case("id"), "Id");
    }
}
