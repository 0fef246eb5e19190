//! # Text Encoding and Wrapping
//!
//! The base-14 fonts are written with `WinAnsiEncoding`. Characters outside
//! that code page (emoji, CJK, …) have no glyph and are dropped from the
//! output bytes; the layout strings keep them.

use super::metrics::Metrics;

/// Unicode characters WinAnsi places in 0x80..=0x9F.
const WIN_ANSI_HIGH: &[(char, u8)] = &[
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Map a character to its WinAnsi byte, if it has one.
pub fn encode_char(c: char) -> Option<u8> {
    match c {
        '\t' => Some(b' '),
        ' '..='~' => Some(c as u8),
        '\u{A0}'..='\u{FF}' => Some(c as u32 as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

/// Encode one line of text for a `Tj` operator.
///
/// Unencodable characters are dropped together with the single space that
/// follows them, and leading spaces are trimmed, so
/// `"📧 a@b.com | 📍 NYC"` is written as `"a@b.com | NYC"`.
pub fn encode_line(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut after_dropped = false;

    for c in s.chars() {
        match encode_char(c) {
            None => after_dropped = true,
            Some(b' ') if after_dropped => after_dropped = false,
            Some(byte) => {
                bytes.push(byte);
                after_dropped = false;
            }
        }
    }

    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    bytes.split_off(start)
}

/// Greedy word wrap.
///
/// Explicit `\n` breaks are kept as paragraph boundaries (an empty paragraph
/// yields an empty line). Words wider than `max_width` are split by
/// characters. Empty input produces a single empty line.
pub fn wrap(text: &str, max_width: f32, metrics: &Metrics) -> Vec<String> {
    let space = metrics.char_width(' ');
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut line = String::new();
        let mut width = 0.0f32;

        for word in paragraph.split_whitespace() {
            let word_width = metrics.str_width(word);

            if !line.is_empty() {
                if width + space + word_width <= max_width {
                    line.push(' ');
                    line.push_str(word);
                    width += space + word_width;
                    continue;
                }
                lines.push(std::mem::take(&mut line));
                width = 0.0;
            }

            if word_width <= max_width {
                line.push_str(word);
                width = word_width;
                continue;
            }

            // Word alone overflows: hard-break it by characters
            for c in word.chars() {
                let w = metrics.char_width(c);
                if width + w > max_width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    width = 0.0;
                }
                line.push(c);
                width += w;
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{FontFamily, FontStyle};

    fn metrics() -> Metrics {
        Metrics::new(FontFamily::Helvetica, FontStyle::Regular, 10.0)
    }

    #[test]
    fn test_encode_char() {
        assert_eq!(encode_char('A'), Some(b'A'));
        assert_eq!(encode_char('é'), Some(0xE9));
        assert_eq!(encode_char('€'), Some(0x80));
        assert_eq!(encode_char('—'), Some(0x97));
        assert_eq!(encode_char('📧'), None);
        assert_eq!(encode_char('\t'), Some(b' '));
    }

    #[test]
    fn test_encode_line_drops_emoji() {
        assert_eq!(encode_line("📧 a@b.com | 📍 NYC"), b"a@b.com | NYC".to_vec());
        assert_eq!(encode_line("a 📱 b"), b"a b".to_vec());
        assert_eq!(encode_line("ok  📍"), b"ok  ".to_vec());
        assert_eq!(encode_line("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert!(encode_line("").is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 100.0, &metrics()), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_empty_is_one_empty_line() {
        assert_eq!(wrap("", 100.0, &metrics()), vec![String::new()]);
    }

    #[test]
    fn test_wrap_keeps_paragraph_breaks() {
        let lines = wrap("first\n\nthird\r\nfourth", 100.0, &metrics());
        assert_eq!(lines, vec!["first", "", "third", "fourth"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        let m = metrics();
        // Room for "aaaa bbbb" but not "aaaa bbbb cccc"
        let max = m.str_width("aaaa bbbb") + 0.01;
        let lines = wrap("aaaa bbbb cccc dddd", max, &m);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc dddd"]);
        for line in &lines {
            assert!(m.str_width(line) <= max);
        }
    }

    #[test]
    fn test_wrap_splits_long_word() {
        let m = metrics();
        let max = m.str_width("0000") + 0.01;
        let lines = wrap("0123456789", max, &m);
        assert_eq!(lines, vec!["0123", "4567", "89"]);
    }
}
