//! Script naming: label derivation and sanitization
//!
//! A code block's first line is expected to be a comment marker followed by
//! a descriptive word, e.g. `// agent_model`. That word becomes the label
//! used in the script's file name.

/// Return the raw label of a code block: its second whitespace-delimited token.
///
/// Returns `None` when the block has fewer than two tokens.
pub fn raw_label(text: &str) -> Option<&str> {
    text.split_whitespace().nth(1)
}

/// Keep only alphanumeric characters, `_` and `-`.
///
/// Everything else is dropped, not replaced.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || *ch == '-')
        .collect()
}

/// Compose `{ordinal}_{label}.{extension}`
pub fn script_file_name(ordinal: usize, label: &str, extension: &str) -> String {
    format!("{}_{}.{}", ordinal, label, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_label_takes_second_token() {
        assert_eq!(raw_label("## intro_demo\nsome code"), Some("intro_demo"));
        assert_eq!(raw_label("  //   spaced\tout"), Some("spaced"));
    }

    #[test]
    fn test_raw_label_requires_two_tokens() {
        assert_eq!(raw_label(""), None);
        assert_eq!(raw_label("   \n\t"), None);
        assert_eq!(raw_label("//"), None);
    }

    #[test]
    fn test_sanitize_drops_punctuation() {
        assert_eq!(sanitize_label("don't-stop!"), "dont-stop");
        assert_eq!(sanitize_label("foo's"), "foos");
        assert_eq!(sanitize_label("intro_demo"), "intro_demo");
        assert_eq!(sanitize_label("(a+b)*c"), "abc");
    }

    #[test]
    fn test_sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_label("café."), "café");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for label in ["don't-stop!", "x.y/z", "__ok--", "ünï©ode", ""] {
            let once = sanitize_label(label);
            assert_eq!(sanitize_label(&once), once);
        }
    }

    #[test]
    fn test_script_file_name() {
        assert_eq!(script_file_name(1, "intro_demo", "wppl"), "1_intro_demo.wppl");
        assert_eq!(script_file_name(12, "dont-stop", "js"), "12_dont-stop.js");
    }
}
