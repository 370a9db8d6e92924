//! Inline SQL-injection and cross-site-scripting payload detection.
//!
//! Two pure predicates over raw bytes, built for the hot path of a web
//! application firewall: no I/O, no global mutable state, no allocation
//! proportional to input size, and worst-case linear time. The input is
//! never mutated or decoded; all comparisons are byte-oriented with
//! ASCII-only case folding.
//!
//! SQL-injection detection lexes the input under several quote/dialect
//! contexts, folds the token stream into a short fingerprint and looks
//! the fingerprint up in an embedded corpus of known attack shapes.
//! XSS detection runs an HTML5-subset tokenizer from five starting
//! states and checks tags, attributes and URLs against blacklists.
//!
//! ```
//! assert!(injectscan::is_sqli(b"1' OR '1'='1"));
//! assert!(injectscan::is_xss(b"<script>alert(1);</script>"));
//! assert!(!injectscan::is_sqli(b"john.doe@example.com"));
//! assert!(!injectscan::is_xss(b"<p>Hello World</p>"));
//! ```
//!
//! Both predicates are freely callable from multiple threads: every call
//! owns its state and the embedded tables are read-only.

pub mod sqli;
pub mod xss;

pub use sqli::{Fingerprint, SqliFlags, SqliResult, SqliState};
pub use xss::{Html5Flags, Html5State};

/// True when the input contains a SQL-injection payload.
///
/// Empty input is never an attack.
pub fn is_sqli(input: &[u8]) -> bool {
    if input.is_empty() {
        return false;
    }
    SqliState::new(input, SqliFlags::default()).detect()
}

/// True when the input contains an XSS payload.
///
/// Empty input is never an attack.
pub fn is_xss(input: &[u8]) -> bool {
    if input.is_empty() {
        return false;
    }
    xss::is_xss(input)
}

/// Like [`is_sqli`], but also reports the fingerprint behind the
/// verdict. A negative verdict carries the fingerprint of the plain
/// (no-quote, ANSI) pass; a positive one carries the fingerprint of the
/// context pass that matched.
pub fn detect_sqli(input: &[u8]) -> SqliResult {
    if input.is_empty() {
        return SqliResult {
            is_injection: false,
            fingerprint: Fingerprint::empty(),
        };
    }
    let mut state = SqliState::new(input, SqliFlags::default());
    if state.detect() {
        return SqliResult {
            is_injection: true,
            fingerprint: state.last_fingerprint(),
        };
    }
    let fingerprint = state.fingerprint_pass(SqliFlags::default());
    SqliResult {
        is_injection: false,
        fingerprint,
    }
}
