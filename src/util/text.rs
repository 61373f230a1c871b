use std::borrow::Cow;

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `s` (CJK and emoji count as two).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate `s` to at most `max_width` columns, appending "..." when cut.
///
/// Widths of three or less have no room for an ellipsis, so those return the
/// longest prefix that fits. Returns `Cow::Borrowed` when nothing is cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if max_width <= ELLIPSIS_WIDTH {
        let end = prefix_end(s, max_width);
        return if end == s.len() {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s[..end].to_string())
        };
    }

    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let cut = prefix_end(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
}

/// Byte index ending the longest prefix of `s` that fits in `width` columns.
fn prefix_end(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// Greedy word wrap to `width` columns.
///
/// Paragraph breaks (`\n`) are kept. A word wider than the line is split at
/// the column limit. Always returns at least one line.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in s.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut w = display_width(word);

            if used > 0 && used + 1 + w > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }

            while w > width {
                if used > 0 {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                let cut = prefix_end(word, width).max(word.chars().next().map_or(0, char::len_utf8));
                lines.push(word[..cut].to_string());
                word = &word[cut..];
                w = display_width(word);
            }
            if word.is_empty() {
                continue;
            }

            if used > 0 {
                line.push(' ');
                used += 1;
            }
            line.push_str(word);
            used += w;
        }
        lines.push(line);
    }

    lines
}

fn is_stripped_control(b: u8) -> bool {
    b == 0x1b || b == 0x7f || (b < 0x20 && b != b'\t' && b != b'\n' && b != b'\r')
}

/// Strip terminal control characters and ANSI escape sequences.
///
/// Model-generated text is rendered straight into the terminal, so anything
/// that could move the cursor or retitle the window is removed:
/// - C0 controls and DEL, except tab, newline and carriage return
/// - CSI sequences (`ESC [` ... final byte 0x40-0x7E)
/// - OSC sequences (`ESC ]` ... BEL or `ESC \`)
/// - a bare ESC
///
/// Clean input is returned borrowed.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().copied().any(is_stripped_control) {
        return Cow::Borrowed(s);
    }

    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut i = 0;

    while i < len {
        match bytes[i] {
            0x1b if bytes.get(i + 1) == Some(&b'[') => {
                i += 2;
                while i < len {
                    let c = bytes[i];
                    i += 1;
                    if (0x40..=0x7e).contains(&c) {
                        break;
                    }
                }
            }
            0x1b if bytes.get(i + 1) == Some(&b']') => {
                i += 2;
                while i < len {
                    if bytes[i] == 0x07 {
                        i += 1;
                        break;
                    }
                    if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            b if is_stripped_control(b) => i += 1,
            _ => {
                let start = i;
                while i < len && !is_stripped_control(bytes[i]) {
                    i += 1;
                }
                // Only ASCII bytes stop the run, so the slice is on a char boundary.
                out.push_str(&s[start..i]);
            }
        }
    }

    Cow::Owned(out)
}

/// Short age of an article relative to `now`: "now", "5m", "3h", "2d", or
/// "Mar 04" after a week. Strings that are not RFC 3339 render verbatim.
pub fn relative_time(published_at: &str, now: DateTime<Utc>) -> Cow<'_, str> {
    let Ok(published) = DateTime::parse_from_rfc3339(published_at.trim()) else {
        return Cow::Borrowed(published_at);
    };
    let published = published.with_timezone(&Utc);
    let age = now.signed_duration_since(published);

    let label = if age.num_minutes() < 1 {
        "now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h", age.num_hours())
    } else if age.num_days() < 7 {
        format!("{}d", age.num_days())
    } else {
        published.format("%b %d").to_string()
    };
    Cow::Owned(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_to_width("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
        assert_eq!(wrap_to_width("short", 10), vec!["short"]);
        assert_eq!(wrap_to_width("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs_and_splits_long_words() {
        assert_eq!(wrap_to_width("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_to_width("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        for line in wrap_to_width("世界世界世界 news", 4) {
            assert!(display_width(&line) <= 4, "{line:?} too wide");
        }
    }

    #[test]
    fn test_ascii_truncation() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }

    #[test]
    fn test_cjk_truncation() {
        assert_eq!(display_width("最新新闻"), 8);
        assert_eq!(truncate_to_width("最新新闻", 7), "最新...");
        assert_eq!(truncate_to_width("最新新闻", 5), "最...");
        assert_eq!(truncate_to_width("最新", 10), "最新");
    }

    #[test]
    fn test_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Test", 1), "T");
        assert_eq!(truncate_to_width("Test", 3), "Tes");
        assert_eq!(truncate_to_width("Hi", 3), "Hi");
        assert_eq!(truncate_to_width("新闻", 1), "");
        assert_eq!(truncate_to_width("新闻", 3), "新");
    }

    #[test]
    fn test_indic_text_does_not_panic() {
        let title = "ताज़ा खबरें और विश्लेषण";
        let cut = truncate_to_width(title, 10);
        assert!(display_width(&cut) <= 10);
    }

    #[test]
    fn test_strip_clean_text_returns_borrowed() {
        let input = "line1\nline2\ttabbed\r\nwindows";
        let result = strip_control_chars(input);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, input);
    }

    #[test]
    fn test_strip_removes_controls_and_del() {
        assert_eq!(strip_control_chars("he\x00ll\x07o\x08 w\x0bor\x0cld\x7f!"), "hello world!");
    }

    #[test]
    fn test_strip_ansi_sequences() {
        assert_eq!(strip_control_chars("\x1b[31mRed\x1b[0m text"), "Red text");
        assert_eq!(strip_control_chars("before\x1b[2Aafter"), "beforeafter");
        assert_eq!(strip_control_chars("\x1b]0;title\x07safe"), "safe");
        assert_eq!(strip_control_chars("\x1b]0;title\x1b\\safe"), "safe");
        assert_eq!(strip_control_chars("bare\x1besc"), "bareesc");
    }

    #[test]
    fn test_strip_unicode_preserved() {
        assert_eq!(strip_control_chars("科技 \x1b[1m新闻\x1b[0m"), "科技 新闻");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2024-05-14T11:59:30Z", now), "now");
        assert_eq!(relative_time("2024-05-14T11:55:00Z", now), "5m");
        assert_eq!(relative_time("2024-05-14T09:00:00Z", now), "3h");
        assert_eq!(relative_time("2024-05-12T12:00:00Z", now), "2d");
        assert_eq!(relative_time("2024-03-04T08:00:00Z", now), "Mar 04");
        assert_eq!(relative_time("2024-05-14T13:30:00+02:00", now), "30m");
    }

    #[test]
    fn test_relative_time_passes_through_free_form() {
        let now = Utc::now();
        assert_eq!(relative_time("2 hours ago", now), "2 hours ago");
        assert_eq!(relative_time("", now), "");
    }
}
