use std::fmt::Write;
use unicode_general_category::GeneralCategory;
use unicode_general_category::get_general_category;

/// Renders a URL or metric spec for diagnostics with control and format
/// characters written as `\uXXXX`.
pub fn safe_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match get_general_category(c) {
            GeneralCategory::Control | GeneralCategory::Format => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(
            safe_display("http://localhost:8080/jolokia"),
            "http://localhost:8080/jolokia"
        );
        assert_eq!(safe_display("värd.c3p0"), "värd.c3p0");
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(safe_display("a\nb"), "a\\u000Ab");
        assert_eq!(safe_display("\u{1b}[2J"), "\\u001B[2J");
    }

    #[test]
    fn test_format_characters() {
        assert_eq!(safe_display("x\u{200b}y"), "x\\u200By");
        assert_eq!(safe_display("\u{e0001}"), "\\uE0001");
    }
}
