//! Small text helpers shared by the rules and the CLI.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// True if `text` has at least one Unicode letter.
///
/// Values like `"+95 9 123 456"` or `"©"` are the same in every language
/// and are not worth flagging as untranslated.
///
/// ```
/// use isim_i18n::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Buy eSIM"));
/// assert!(contains_alphabetic("ဝယ်ယူရန်"));
/// assert!(!contains_alphabetic("24/7"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was dropped. Wide characters are never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    Cow::Owned(out)
}

/// Newlines and tabs flattened to spaces so a value fits on one line.
pub fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r', '\t']) {
        Cow::Owned(text.replace(['\n', '\r', '\t'], " "))
    } else {
        Cow::Borrowed(text)
    }
}
