//! Locale-aware ordering and folding of names.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics: NFD decompose and drop combining marks ("Müller" -> "Muller").
/// Letters without a decomposition (Ø, Ł, Đ, ...) map to their base letter.
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.nfd().filter(|c| !is_combining_mark(*c)) {
        match c {
            'Ø' => out.push('O'),
            'ø' => out.push('o'),
            'Ł' => out.push('L'),
            'ł' => out.push('l'),
            'Đ' => out.push('D'),
            'đ' | 'ð' => out.push('d'),
            'Ð' => out.push('D'),
            'Ħ' => out.push('H'),
            'ħ' => out.push('h'),
            'ı' => out.push('i'),
            'Æ' => out.push_str("AE"),
            'æ' => out.push_str("ae"),
            'Œ' => out.push_str("OE"),
            'œ' => out.push_str("oe"),
            'ß' => out.push_str("ss"),
            _ => out.push(c),
        }
    }
    out
}

/// Primary sort key for a name: folded and lower-cased.
pub fn key(s: &str) -> String {
    fold(s).to_lowercase()
}

/// Compare two names the way a browser's `localeCompare` orders Latin names:
/// accents and case only break ties.
pub fn compare(a: &str, b: &str) -> Ordering {
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

// Combining Diacritical Marks and their supplements/extended blocks.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{FE20}'..='\u{FE2F}'
    )
}
