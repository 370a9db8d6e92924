//! XSS detection: the HTML5-subset tokenizer plus tag/attribute/URL
//! blacklist classification.
//!
//! The classifier walks the token stream once, tracking only the class of
//! the last attribute name so the following value can be judged. Input is
//! re-tokenized from five starting states because an injected payload may
//! land in text, in an unquoted attribute, or inside any quote style.

use tracing::trace;

pub mod data;
pub mod html5;

pub use html5::{Html5Flags, Html5State, Html5TokenKind};

use data::AttrClass;

#[cfg(test)]
mod tests;

/// All starting contexts, in check order.
const CONTEXTS: [Html5Flags; 5] = [
    Html5Flags::DataState,
    Html5Flags::ValueNoQuote,
    Html5Flags::ValueSingleQuote,
    Html5Flags::ValueDoubleQuote,
    Html5Flags::ValueBackQuote,
];

/// True when any starting context yields an attack token.
pub fn is_xss(input: &[u8]) -> bool {
    CONTEXTS.iter().any(|&flags| {
        let hit = is_xss_in_context(input, flags);
        if hit {
            trace!(context = ?flags, "xss detected");
        }
        hit
    })
}

/// Tokenize from one starting state and classify every token.
pub fn is_xss_in_context(input: &[u8], flags: Html5Flags) -> bool {
    let mut h5 = Html5State::new(input, flags);
    let mut attr = AttrClass::None;

    while h5.next() {
        if h5.token_type != Html5TokenKind::AttrValue {
            attr = AttrClass::None;
        }

        match h5.token_type {
            Html5TokenKind::Doctype => return true,
            Html5TokenKind::TagNameOpen => {
                if is_black_tag(h5.token()) {
                    return true;
                }
            }
            Html5TokenKind::AttrName => {
                attr = classify_attr(h5.token());
            }
            Html5TokenKind::AttrValue => {
                match attr {
                    AttrClass::None => {}
                    AttrClass::Black => return true,
                    AttrClass::AttrUrl => {
                        if is_black_url(h5.token()) {
                            return true;
                        }
                    }
                    AttrClass::Style => return true,
                    AttrClass::AttrIndirect => {
                        // the value itself names an attribute
                        if classify_attr(h5.token()) != AttrClass::None {
                            return true;
                        }
                    }
                }
                attr = AttrClass::None;
            }
            Html5TokenKind::TagComment => {
                let token = h5.token();

                // IE treats a backtick as a tag-ending character
                if token.contains(&b'`') {
                    return true;
                }

                if h5.token_len > 3 {
                    // IE conditional comments and XML processing directives
                    if token[0] == b'[' && token[1..3].eq_ignore_ascii_case(b"if") {
                        return true;
                    }
                    if token[..3].eq_ignore_ascii_case(b"xml") {
                        return true;
                    }
                }

                if h5.token_len > 5 {
                    // IE <?import> and XML entity definitions
                    if name_matches_prefix(b"IMPORT", token, 6)
                        || name_matches_prefix(b"ENTITY", token, 6)
                    {
                        return true;
                    }
                }
            }
            _ => {}
        }
    }
    false
}

/// Tag blacklist plus the `svg*` / `xsl*` families.
fn is_black_tag(name: &[u8]) -> bool {
    if name.len() < 3 {
        return false;
    }

    for tag in data::BLACK_TAGS.iter() {
        if name_matches(tag.as_bytes(), name) {
            return true;
        }
    }

    name[..3].eq_ignore_ascii_case(b"svg") || name[..3].eq_ignore_ascii_case(b"xsl")
}

/// Attribute-name classification, NUL-skipping and case-insensitive.
fn classify_attr(name: &[u8]) -> AttrClass {
    if name.len() < 2 {
        return AttrClass::None;
    }

    if name.len() >= 5 {
        // on* event handlers: match the remainder against the event list
        if name[..2].eq_ignore_ascii_case(b"on") {
            let rest = &name[2..];
            for event in data::EVENT_HANDLERS.iter() {
                let n = rest.len().min(event.len());
                if name_matches_prefix(event.as_bytes(), rest, n) {
                    return AttrClass::Black;
                }
            }
        }

        // XMLNS / XLINK declarations conjure arbitrary tags
        if name_matches_prefix(b"XMLNS", name, 5) || name_matches_prefix(b"XLINK", name, 5) {
            return AttrClass::Black;
        }
    }

    for entry in data::BLACK_ATTRS.iter() {
        if name_matches(entry.name.as_bytes(), name) {
            return entry.class;
        }
    }

    AttrClass::None
}

/// URL-valued attributes: reject script-bearing schemes, decoding HTML
/// numeric entities on the fly.
fn is_black_url(url: &[u8]) -> bool {
    // control characters and high bytes before the scheme are ignored by
    // browsers
    let start = url
        .iter()
        .position(|&b| b > 32 && b < 127)
        .unwrap_or(url.len());
    let trimmed = &url[start..];

    data::BLACK_URL_SCHEMES
        .iter()
        .any(|scheme| htmlencode_startswith(scheme.as_bytes(), trimmed))
}

/// Case-insensitive equality against an uppercase pattern; NUL bytes in
/// `input` are invisible.
fn name_matches(pattern: &[u8], input: &[u8]) -> bool {
    name_matches_prefix(pattern, input, input.len())
}

/// Like [`name_matches`] but reads at most `n` bytes of `input`; true
/// iff the pattern is exactly consumed.
fn name_matches_prefix(pattern: &[u8], input: &[u8], n: usize) -> bool {
    let mut pi = 0;
    for &b in input.iter().take(n) {
        if b == 0 {
            continue;
        }
        if pi >= pattern.len() {
            return false;
        }
        if pattern[pi] != b.to_ascii_uppercase() {
            return false;
        }
        pi += 1;
    }
    pi == pattern.len()
}

/// Decode one HTML numeric character reference at the start of `src`.
/// Returns `(code_point, bytes_consumed)`; plain bytes decode to
/// themselves. Values are capped at `0x1000FF`; on overflow the `&` is
/// returned as a literal.
pub(crate) fn html_decode_char_at(src: &[u8]) -> (i32, usize) {
    if src.is_empty() {
        return (-1, 0);
    }
    if src[0] != b'&' || src.len() < 2 {
        return (i32::from(src[0]), 1);
    }
    if src[1] != b'#' {
        return (i32::from(b'&'), 1);
    }

    if src.len() > 2 && matches!(src[2], b'x' | b'X') {
        if src.len() <= 3 {
            return (i32::from(b'&'), 1);
        }
        let mut val = match hex_value(src[3]) {
            Some(v) => v,
            None => return (i32::from(b'&'), 1),
        };
        let mut i = 4;
        while i < src.len() {
            let ch = src[i];
            if ch == b';' {
                return (val, i + 1);
            }
            let digit = match hex_value(ch) {
                Some(v) => v,
                None => return (val, i),
            };
            val = val * 16 + digit;
            if val > 0x1000FF {
                return (i32::from(b'&'), 1);
            }
            i += 1;
        }
        (val, i)
    } else {
        if src.len() <= 2 {
            return (i32::from(b'&'), 1);
        }
        let ch = src[2];
        if !ch.is_ascii_digit() {
            return (i32::from(b'&'), 1);
        }
        let mut val = i32::from(ch - b'0');
        let mut i = 3;
        while i < src.len() {
            let ch = src[i];
            if ch == b';' {
                return (val, i + 1);
            }
            if !ch.is_ascii_digit() {
                return (val, i);
            }
            val = val * 10 + i32::from(ch - b'0');
            if val > 0x1000FF {
                return (i32::from(b'&'), 1);
            }
            i += 1;
        }
        (val, i)
    }
}

fn hex_value(b: u8) -> Option<i32> {
    match b {
        b'0'..=b'9' => Some(i32::from(b - b'0')),
        b'a'..=b'f' => Some(i32::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(i32::from(b - b'A' + 10)),
        _ => None,
    }
}

/// Does the haystack start with `needle` once HTML numeric references
/// are decoded? Leading control bytes, NULs and LFs are skipped the way
/// browsers skip them.
pub(crate) fn htmlencode_startswith(needle: &[u8], haystack: &[u8]) -> bool {
    let mut ni = 0;
    let mut pos = 0;
    let mut first = true;

    while pos < haystack.len() {
        if ni >= needle.len() {
            return true;
        }
        let (decoded, consumed) = html_decode_char_at(&haystack[pos..]);
        pos += consumed;

        if first && decoded <= 32 {
            // leading whitespace and control characters
            continue;
        }
        first = false;

        if decoded == 0 {
            // embedded NULs are invisible
            continue;
        }
        if decoded == 10 {
            // so are linefeeds
            continue;
        }

        let mut cb = decoded;
        if (b'a' as i32..=b'z' as i32).contains(&cb) {
            cb -= 0x20;
        }
        if i32::from(needle[ni]) != cb {
            return false;
        }
        ni += 1;
    }

    ni >= needle.len()
}
