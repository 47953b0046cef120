//! Extractive summary from the leading sentences of a text.

/// Sentence-like spans kept in the summary.
pub const SUMMARY_SENTENCES: usize = 2;
/// Longest summary kept before the ellipsis is appended.
pub const MAX_SUMMARY_CHARS: usize = 300;
pub const ELLIPSIS: char = '…';

/// Join the first `SUMMARY_SENTENCES` spans of `text` (split on `.`, `!` and
/// `?`) with `". "`, trim, and cut to `MAX_SUMMARY_CHARS` characters plus an
/// ellipsis when longer.
///
/// Spans are not trimmed before joining, so `"A. B."` gives `"A.  B"`.
pub fn leading_excerpt(text: &str) -> String {
    let spans: Vec<&str> = text
        .split(['.', '!', '?'])
        .take(SUMMARY_SENTENCES)
        .collect();
    let joined = spans.join(". ");
    truncate_chars(joined.trim(), MAX_SUMMARY_CHARS)
}

/// Cut `s` to `max` characters and append `ELLIPSIS` if anything was cut.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + ELLIPSIS.len_utf8());
            out.push_str(&s[..byte_idx]);
            out.push(ELLIPSIS);
            out
        }
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_two_spans() {
        let text = "Premier point. Deuxième point! Troisième point? Quatrième.";
        assert_eq!(leading_excerpt(text), "Premier point.  Deuxième point");
    }

    #[test]
    fn test_no_terminator_keeps_whole_text() {
        assert_eq!(leading_excerpt("  sans ponctuation  "), "sans ponctuation");
    }

    #[test]
    fn test_leading_terminators_leave_only_the_joiner() {
        assert_eq!(leading_excerpt("..."), ".");
        assert_eq!(leading_excerpt("!?"), ".");
    }

    #[test]
    fn test_truncation_counts_characters() {
        // 310 two-byte characters, no terminator.
        let text = "é".repeat(310);
        let excerpt = leading_excerpt(&text);
        assert_eq!(excerpt.chars().count(), 301);
        assert!(excerpt.ends_with(ELLIPSIS));
        assert_eq!(excerpt.chars().filter(|c| *c == 'é').count(), 300);
    }

    #[test]
    fn test_exactly_max_is_not_truncated() {
        let text = "a".repeat(MAX_SUMMARY_CHARS);
        let excerpt = leading_excerpt(&text);
        assert_eq!(excerpt, text);
        assert!(!excerpt.ends_with(ELLIPSIS));
    }
}
