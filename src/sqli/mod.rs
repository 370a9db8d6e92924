//! SQL-injection detection: lexing, token folding, fingerprinting and the
//! blacklist/whitelist classifier.
//!
//! Detection is a pure function of the input bytes. One [`SqliState`] is
//! built per call, run through up to five `(quote, dialect)` context
//! passes, and dropped when the verdict returns. Each pass lexes the
//! input, folds the token stream into a window of at most [`MAX_TOKENS`]
//! slots, renders the window as a fingerprint string and looks that up in
//! the embedded corpus.

use bitflags::bitflags;
use tracing::trace;

pub mod data;
pub mod lexer;

pub use lexer::{Lexer, Token, TokenKind};

#[cfg(test)]
mod tests;

/// Folding window size; no fingerprint is longer than this.
pub const MAX_TOKENS: usize = 5;

/// Fingerprint buffer capacity (max length plus terminator headroom).
const FINGERPRINT_SIZE: usize = 8;

bitflags! {
    /// Quote-context and dialect selection for one parse pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SqliFlags: u32 {
        const QUOTE_NONE = 1;
        const QUOTE_SINGLE = 2;
        const QUOTE_DOUBLE = 4;
        const SQL_ANSI = 8;
        const SQL_MYSQL = 16;
    }
}

impl SqliFlags {
    pub fn is_ansi(self) -> bool {
        self.contains(SqliFlags::SQL_ANSI)
    }

    pub fn is_mysql(self) -> bool {
        self.contains(SqliFlags::SQL_MYSQL)
    }

    pub(crate) fn in_quote_context(self) -> bool {
        self.intersects(SqliFlags::QUOTE_SINGLE | SqliFlags::QUOTE_DOUBLE)
    }

    /// The delimiter byte implied by the quote context, 0 for none.
    pub(crate) fn quote_byte(self) -> u8 {
        if self.contains(SqliFlags::QUOTE_SINGLE) {
            b'\''
        } else if self.contains(SqliFlags::QUOTE_DOUBLE) {
            b'"'
        } else {
            0
        }
    }
}

impl Default for SqliFlags {
    fn default() -> Self {
        SqliFlags::QUOTE_NONE | SqliFlags::SQL_ANSI
    }
}

/// A folded token sequence rendered as type codes, at most five bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Fingerprint {
    pub(crate) fn new(raw: [u8; FINGERPRINT_SIZE]) -> Self {
        Fingerprint(raw)
    }

    pub fn empty() -> Self {
        Fingerprint([0; FINGERPRINT_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8] {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(FINGERPRINT_SIZE);
        &self.0[..len]
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl core::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

/// Outcome of one [`detect_sqli`](crate::detect_sqli) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqliResult {
    pub is_injection: bool,
    pub fingerprint: Fingerprint,
}

/// Counters gathered during one context pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliStats {
    /// `-- ` comments (dash dash whitespace).
    pub comment_ddw: i32,
    /// `--x` comments (dash dash, no whitespace).
    pub comment_ddx: i32,
    /// C-style comments.
    pub comment_c: i32,
    /// `#` comments, counted even when ANSI reads `#` as an operator.
    pub comment_hash: i32,
    /// Rewrite rules applied by the folder.
    pub folds: i32,
    /// Tokens the lexer produced, including folded-away ones.
    pub tokens: usize,
}

/// Per-call workspace: the token window, fingerprint buffer and lexer
/// statistics for the current context pass.
pub struct SqliState<'a> {
    input: &'a [u8],
    flags: SqliFlags,
    pub tokens: [Token; FINGERPRINT_SIZE],
    token_count: usize,
    fingerprint: [u8; FINGERPRINT_SIZE],
    stats_comment_ddw: i32,
    stats_comment_ddx: i32,
    stats_comment_c: i32,
    stats_comment_hash: i32,
    stats_folds: i32,
    stats_tokens: usize,
}

enum PairFold {
    /// A rule rewrote the window; rescan from the top.
    Folded,
    /// The degenerate `{` bareword case; folding stops with an evil slot.
    Evil,
    /// No rule matched.
    None,
}

impl<'a> SqliState<'a> {
    pub fn new(input: &'a [u8], flags: SqliFlags) -> Self {
        let flags = if flags.is_empty() { SqliFlags::default() } else { flags };
        SqliState {
            input,
            flags,
            tokens: [Token::default(); FINGERPRINT_SIZE],
            token_count: 0,
            fingerprint: [0; FINGERPRINT_SIZE],
            stats_comment_ddw: 0,
            stats_comment_ddx: 0,
            stats_comment_c: 0,
            stats_comment_hash: 0,
            stats_folds: 0,
            stats_tokens: 0,
        }
    }

    fn reset(&mut self, flags: SqliFlags) {
        *self = SqliState::new(self.input, flags);
    }

    /// Number of folded tokens from the last pass.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Lexed-token count of the last pass, including folded-away ones.
    pub fn stats_tokens(&self) -> usize {
        self.stats_tokens
    }

    /// All counters of the last pass.
    pub fn stats(&self) -> SqliStats {
        SqliStats {
            comment_ddw: self.stats_comment_ddw,
            comment_ddx: self.stats_comment_ddx,
            comment_c: self.stats_comment_c,
            comment_hash: self.stats_comment_hash,
            folds: self.stats_folds,
            tokens: self.stats_tokens,
        }
    }

    /// Run every context pass and return true on the first blacklisted,
    /// non-whitelisted fingerprint.
    pub fn detect(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }

        let fp = self.fingerprint_pass(SqliFlags::QUOTE_NONE | SqliFlags::SQL_ANSI);
        if self.check_fingerprint(&fp) {
            return true;
        }
        if self.reparse_as_mysql() {
            let fp = self.fingerprint_pass(SqliFlags::QUOTE_NONE | SqliFlags::SQL_MYSQL);
            if self.check_fingerprint(&fp) {
                return true;
            }
        }

        if self.input.contains(&b'\'') {
            let fp = self.fingerprint_pass(SqliFlags::QUOTE_SINGLE | SqliFlags::SQL_ANSI);
            if self.check_fingerprint(&fp) {
                return true;
            }
            if self.reparse_as_mysql() {
                let fp = self.fingerprint_pass(SqliFlags::QUOTE_SINGLE | SqliFlags::SQL_MYSQL);
                if self.check_fingerprint(&fp) {
                    return true;
                }
            }
        }

        if self.input.contains(&b'"') {
            let fp = self.fingerprint_pass(SqliFlags::QUOTE_DOUBLE | SqliFlags::SQL_MYSQL);
            if self.check_fingerprint(&fp) {
                return true;
            }
        }

        false
    }

    /// MySQL-only comment syntax seen during the previous pass warrants a
    /// second look under MySQL rules.
    fn reparse_as_mysql(&self) -> bool {
        self.stats_comment_ddx > 0 || self.stats_comment_hash > 0
    }

    /// Reset to `flags`, then lex + fold + render the fingerprint.
    pub fn fingerprint_pass(&mut self, flags: SqliFlags) -> Fingerprint {
        self.reset(flags);
        let mut count = self.fold();

        // An empty backtick-quoted trailer is MySQL comment syntax.
        if count > 2 {
            let last = &mut self.tokens[count - 1];
            if last.kind == TokenKind::Bareword
                && last.str_open == b'`'
                && last.len == 0
                && last.str_close == 0
            {
                last.kind = TokenKind::Comment;
            }
        }

        self.fingerprint = [0; FINGERPRINT_SIZE];
        for i in 0..count.min(FINGERPRINT_SIZE - 1) {
            self.fingerprint[i] = self.tokens[i].kind.code();
        }

        // Any evil token collapses the whole pass to the forced-attack
        // fingerprint.
        if self.fingerprint.contains(&TokenKind::Evil.code()) {
            self.fingerprint = [0; FINGERPRINT_SIZE];
            self.fingerprint[0] = TokenKind::Evil.code();
            self.tokens[0].clear();
            self.tokens[0].kind = TokenKind::Evil;
            self.tokens[0].val[0] = TokenKind::Evil.code();
            self.tokens[0].len = 1;
            count = 1;
        }

        self.token_count = count;
        let fp = Fingerprint::new(self.fingerprint);
        trace!(context = ?flags, fingerprint = %fp, "sqli context pass");
        fp
    }

    /// The fingerprint of the last pass.
    pub fn last_fingerprint(&self) -> Fingerprint {
        Fingerprint::new(self.fingerprint)
    }

    /// Blacklist lookup plus whitelist rescue.
    pub fn check_fingerprint(&self, fp: &Fingerprint) -> bool {
        let verdict = self.blacklisted(fp) && self.not_whitelisted();
        if verdict {
            trace!(fingerprint = %fp, "sqli fingerprint confirmed");
        }
        verdict
    }

    /// True iff the uppercased, `0`-prefixed fingerprint is a known
    /// attack pattern in the keyword table.
    fn blacklisted(&self, fp: &Fingerprint) -> bool {
        let bytes = fp.as_bytes();
        if bytes.is_empty() {
            return false;
        }
        let mut probe = [0u8; FINGERPRINT_SIZE + 1];
        probe[0] = b'0';
        for (i, &b) in bytes.iter().enumerate() {
            probe[i + 1] = b.to_ascii_uppercase();
        }
        data::lookup(&probe[..bytes.len() + 1]) == TokenKind::Fingerprint.code()
    }

    /// Structural rescue rules for blacklisted fingerprints that common
    /// benign inputs also produce. Returns true when the input stays
    /// suspicious.
    fn not_whitelisted(&self) -> bool {
        let fp_len = self.fingerprint.iter().position(|&b| b == 0).unwrap_or(FINGERPRINT_SIZE);

        if fp_len > 1 && self.fingerprint[fp_len - 1] == TokenKind::Comment.code() {
            // MS-SQL password-reset smuggling hides behind a comment
            if memmem(self.input, b"sp_password") {
                return true;
            }
        }

        match fp_len {
            2 => self.two_token_whitelist(),
            3 => self.three_token_whitelist(),
            _ => true,
        }
    }

    fn two_token_whitelist(&self) -> bool {
        // short union probes with no folding are indistinguishable from
        // text like "1 union"
        if self.fingerprint[1] == TokenKind::Union.code() {
            return self.stats_tokens != 2;
        }

        // '#' comments generate too many false positives
        if self.tokens[1].val[0] == b'#' {
            return false;
        }

        // bareword plus a non-C-style trailing comment reads like prose
        if self.tokens[0].kind == TokenKind::Bareword
            && self.tokens[1].kind == TokenKind::Comment
            && self.tokens[1].val[0] != b'/'
        {
            return false;
        }

        if self.tokens[0].kind == TokenKind::Number
            && self.tokens[1].kind == TokenKind::Comment
            && self.tokens[1].val[0] == b'/'
        {
            return true;
        }

        if self.tokens[0].kind == TokenKind::Number && self.tokens[1].kind == TokenKind::Comment {
            if self.stats_tokens > 2 {
                // folding happened, so there was more than "1 --"
                return true;
            }
            if self.tokens[0].len < self.input.len() {
                let ch = self.input[self.tokens[0].len];
                if ch <= 32 {
                    return true;
                }
                if ch == b'/'
                    && self.tokens[0].len + 1 < self.input.len()
                    && self.input[self.tokens[0].len + 1] == b'*'
                {
                    return true;
                }
                if ch == b'-'
                    && self.tokens[0].len + 1 < self.input.len()
                    && self.input[self.tokens[0].len + 1] == b'-'
                {
                    return true;
                }
            }
            return false;
        }

        // scanner noise: a long comment starting with '-'
        if self.tokens[1].len > 2 && self.tokens[1].val[0] == b'-' {
            return false;
        }

        true
    }

    fn three_token_whitelist(&self) -> bool {
        let fp = &self.fingerprint[..3];

        if fp == b"sos" || fp == b"s&s" {
            if self.tokens[0].str_open == 0
                && self.tokens[2].str_close == 0
                && self.tokens[0].str_close == self.tokens[2].str_open
            {
                // ...foo' + 'bar... : the two strings pair up around the gap
                return true;
            }
            if self.stats_tokens == 3 {
                return false;
            }
            return false;
        } else if fp == b"s&n" || fp == b"n&1" || fp == b"1&1" || fp == b"1&v" || fp == b"1&s" {
            // "sexy and 17" style phrases; only suspicious when folding
            // consumed extra tokens
            if self.stats_tokens == 3 {
                return false;
            }
        } else if self.tokens[1].kind == TokenKind::Keyword {
            if self.tokens[1].len < 5
                || !self.tokens[1].value()[..4].eq_ignore_ascii_case(b"INTO")
            {
                // middle keyword other than INTO OUTFILE / INTO DUMPFILE
                return false;
            }
        }

        true
    }

    /// Drive the lexer and rewrite the window until no rule applies or
    /// input runs out. Returns the folded token count.
    pub fn fold(&mut self) -> usize {
        let mut lx = Lexer::new(self.input, self.flags);
        let mut last_comment: Option<Token> = None;

        // Leading comments, left-parens, sql-types and unary operators are
        // noise before the first real token.
        let mut more = true;
        loop {
            match lx.next_token() {
                Some(tok) => {
                    self.tokens[0] = tok;
                    if !(tok.kind == TokenKind::Comment
                        || tok.kind == TokenKind::LeftParen
                        || tok.kind == TokenKind::SqlType
                        || tok.is_unary_op())
                    {
                        break;
                    }
                }
                None => {
                    more = false;
                    break;
                }
            }
        }
        if !more {
            return self.finish_fold(&lx, None, 0);
        }

        let mut pos: usize = 1;
        let mut left: usize = 0;

        loop {
            // A full window of arithmetic-looking slots resets to keep
            // scanning instead of giving up on slot pressure.
            if pos >= MAX_TOKENS && self.overflow_reset_shape() {
                if pos > MAX_TOKENS {
                    self.tokens[1] = self.tokens[MAX_TOKENS];
                    pos = 2;
                } else {
                    pos = 1;
                }
                left = 0;
            }

            if !more || left >= MAX_TOKENS {
                left = pos;
                break;
            }

            // top up to two live slots
            while more && pos <= MAX_TOKENS && pos - left < 2 {
                match lx.next_token() {
                    Some(tok) => {
                        if tok.kind == TokenKind::Comment {
                            last_comment = Some(tok);
                        } else {
                            last_comment = None;
                            self.tokens[pos] = tok;
                            pos += 1;
                        }
                    }
                    None => more = false,
                }
            }
            if pos - left < 2 {
                left = pos;
                continue;
            }

            match self.fold_pair(&mut pos, &mut left) {
                PairFold::Folded => continue,
                PairFold::Evil => {
                    self.copy_stats(&lx);
                    self.token_count = left + 2;
                    return left + 2;
                }
                PairFold::None => {}
            }

            // top up to three
            while more && pos <= MAX_TOKENS && pos - left < 3 {
                match lx.next_token() {
                    Some(tok) => {
                        if tok.kind == TokenKind::Comment {
                            last_comment = Some(tok);
                        } else {
                            last_comment = None;
                            self.tokens[pos] = tok;
                            pos += 1;
                        }
                    }
                    None => more = false,
                }
            }
            if pos - left < 3 {
                left = pos;
                continue;
            }

            if self.fold_triple(&mut pos, &mut left) {
                continue;
            }

            // nothing applied: the left-most token is final
            left += 1;
        }

        self.finish_fold(&lx, last_comment, left)
    }

    fn finish_fold(
        &mut self,
        lx: &Lexer<'_>,
        last_comment: Option<Token>,
        mut left: usize,
    ) -> usize {
        if left < MAX_TOKENS {
            if let Some(comment) = last_comment {
                self.tokens[left] = comment;
                left += 1;
            }
        }
        if left > MAX_TOKENS {
            // a sixth token only ever disambiguates the fifth
            left = MAX_TOKENS;
        }

        self.copy_stats(lx);
        self.token_count = left;
        left
    }

    fn copy_stats(&mut self, lx: &Lexer<'_>) {
        self.stats_comment_ddw = lx.stats_comment_ddw;
        self.stats_comment_ddx = lx.stats_comment_ddx;
        self.stats_comment_c = lx.stats_comment_c;
        self.stats_comment_hash = lx.stats_comment_hash;
        self.stats_tokens = lx.stats_tokens;
    }

    /// The window shapes that trigger an overflow reset: all read as
    /// plain arithmetic or value lists.
    fn overflow_reset_shape(&self) -> bool {
        use TokenKind::*;
        let k = [
            self.tokens[0].kind,
            self.tokens[1].kind,
            self.tokens[2].kind,
            self.tokens[3].kind,
            self.tokens[4].kind,
        ];
        (k[0] == Number
            && (k[1] == Operator || k[1] == Comma)
            && k[2] == LeftParen
            && k[3] == Number
            && k[4] == RightParen)
            || (k[0] == Bareword
                && k[1] == Operator
                && k[2] == LeftParen
                && (k[3] == Bareword || k[3] == Number)
                && k[4] == RightParen)
            || (k[0] == Number
                && k[1] == RightParen
                && k[2] == Comma
                && k[3] == LeftParen
                && k[4] == Number)
            || (k[0] == Bareword
                && k[1] == RightParen
                && k[2] == Operator
                && k[3] == LeftParen
                && k[4] == Bareword)
    }

    /// Two-slot rewrite rules over `(left, left+1)`.
    fn fold_pair(&mut self, pos: &mut usize, left: &mut usize) -> PairFold {
        use TokenKind::*;
        let l = *left;
        let lk = self.tokens[l].kind;
        let rk = self.tokens[l + 1].kind;

        if lk == String && rk == String {
            // adjacent strings concatenate
            *pos -= 1;
            self.stats_folds += 1;
            return PairFold::Folded;
        }

        if lk == Semicolon && rk == Semicolon {
            *pos -= 1;
            self.stats_folds += 1;
            return PairFold::Folded;
        }

        if (lk == Operator || lk == LogicOperator)
            && (self.tokens[l + 1].is_unary_op() || rk == SqlType)
        {
            *pos -= 1;
            self.stats_folds += 1;
            *left = 0;
            return PairFold::Folded;
        }

        if lk == LeftParen && self.tokens[l + 1].is_unary_op() {
            *pos -= 1;
            self.stats_folds += 1;
            if *left > 0 {
                *left -= 1;
            }
            return PairFold::Folded;
        }

        if self.merge_words(l) {
            *pos -= 1;
            self.stats_folds += 1;
            if *left > 0 {
                *left -= 1;
            }
            return PairFold::Folded;
        }

        if lk == Semicolon
            && rk == Function
            && self.tokens[l + 1].len >= 2
            && self.tokens[l + 1].value()[..2].eq_ignore_ascii_case(b"IF")
        {
            // statement-level IF is T-SQL, not the IF() function
            self.tokens[l + 1].kind = Tsql;
            return PairFold::Folded;
        }

        if (lk == Bareword || lk == Variable) && rk == LeftParen {
            let v = self.tokens[l].value();
            let zero_arg_fns: &[&[u8]] = &[
                b"USER_ID",
                b"USER_NAME",
                b"DATABASE",
                b"PASSWORD",
                b"USER",
                b"CURRENT_USER",
                b"CURRENT_DATE",
                b"CURRENT_TIME",
                b"CURRENT_TIMESTAMP",
                b"LOCALTIME",
                b"LOCALTIMESTAMP",
            ];
            if zero_arg_fns.iter().any(|w| v.eq_ignore_ascii_case(w)) {
                self.tokens[l].kind = Function;
                return PairFold::Folded;
            }
        }

        if lk == Keyword {
            let v = self.tokens[l].value();
            if v.eq_ignore_ascii_case(b"IN") || v.eq_ignore_ascii_case(b"NOT IN") {
                // "IN (" acts as an operator, a bare "IN" as nothing
                self.tokens[l].kind = if rk == LeftParen { Operator } else { Bareword };
                return PairFold::Folded;
            }
        }

        if lk == Operator {
            let v = self.tokens[l].value();
            if v.eq_ignore_ascii_case(b"LIKE") || v.eq_ignore_ascii_case(b"NOT LIKE") {
                if rk == LeftParen {
                    // "LIKE (" is a function call
                    self.tokens[l].kind = Function;
                }
                return PairFold::None;
            }
        }

        if lk == SqlType
            && matches!(rk, Bareword | Number | SqlType | LeftParen | Function | Variable | String)
        {
            self.tokens[l] = self.tokens[l + 1];
            *pos -= 1;
            self.stats_folds += 1;
            *left = 0;
            return PairFold::Folded;
        }

        if lk == Collate && rk == Bareword {
            // collation names all carry an underscore
            if self.tokens[l + 1].value().contains(&b'_') {
                self.tokens[l + 1].kind = SqlType;
                *left = 0;
            }
            return PairFold::None;
        }

        if lk == Backslash {
            if self.tokens[l + 1].is_arithmetic_op() {
                // T-SQL reads '\%1' as '0 % 1'
                self.tokens[l].kind = Number;
            } else {
                self.tokens[l] = self.tokens[l + 1];
                *pos -= 1;
                self.stats_folds += 1;
            }
            *left = 0;
            return PairFold::Folded;
        }

        if lk == LeftParen && rk == LeftParen {
            *pos -= 1;
            *left = 0;
            self.stats_folds += 1;
            return PairFold::Folded;
        }

        if lk == RightParen && rk == RightParen {
            *pos -= 1;
            *left = 0;
            self.stats_folds += 1;
            return PairFold::Folded;
        }

        if lk == LeftBrace && rk == Bareword && self.tokens[l + 1].len == 0 {
            // "{`" with nothing inside never comes from real ODBC
            self.tokens[l + 1].kind = Evil;
            return PairFold::Evil;
        }

        if rk == RightBrace {
            *pos -= 1;
            *left = 0;
            self.stats_folds += 1;
            return PairFold::Folded;
        }

        PairFold::None
    }

    /// Three-slot rewrite rules; returns true when anything folded.
    fn fold_triple(&mut self, pos: &mut usize, left: &mut usize) -> bool {
        use TokenKind::*;
        let l = *left;
        let k0 = self.tokens[l].kind;
        let k1 = self.tokens[l + 1].kind;
        let k2 = self.tokens[l + 2].kind;

        if k0 == Number && k1 == Operator && k2 == Number {
            *pos -= 2;
            *left = 0;
            return true;
        }

        if k0 == Operator && k1 != LeftParen && k2 == Operator {
            *left = 0;
            *pos -= 2;
            return true;
        }

        if k0 == LogicOperator && k2 == LogicOperator {
            *pos -= 2;
            *left = 0;
            return true;
        }

        if k0 == Variable && k1 == Operator && matches!(k2, Variable | Number | Bareword) {
            *pos -= 2;
            *left = 0;
            return true;
        }

        if matches!(k0, Bareword | Number) && k1 == Operator && matches!(k2, Number | Bareword) {
            *pos -= 2;
            *left = 0;
            return true;
        }

        if matches!(k0, Bareword | Number | Variable | String)
            && k1 == Operator
            && self.tokens[l + 1].value() == b"::"
            && k2 == SqlType
        {
            // PostgreSQL cast: value::type
            *pos -= 2;
            *left = 0;
            self.stats_folds += 2;
            return true;
        }

        if matches!(k0, Bareword | Number | String | Variable)
            && k1 == Comma
            && matches!(k2, Number | Bareword | String | Variable)
        {
            *pos -= 2;
            *left = 0;
            return true;
        }

        if matches!(k0, Expression | GroupBy | Comma)
            && self.tokens[l + 1].is_unary_op()
            && k2 == LeftParen
        {
            // SELECT + ( ... : drop the unary
            self.tokens[l + 1] = self.tokens[l + 2];
            *pos -= 1;
            *left = 0;
            return true;
        }

        if matches!(k0, Keyword | Expression | GroupBy)
            && self.tokens[l + 1].is_unary_op()
            && matches!(k2, Number | Bareword | Variable | String | Function)
        {
            // SELECT - 1 reads as SELECT 1
            self.tokens[l + 1] = self.tokens[l + 2];
            *pos -= 1;
            *left = 0;
            return true;
        }

        if k0 == Comma
            && self.tokens[l + 1].is_unary_op()
            && matches!(k2, Number | Bareword | Variable | String)
        {
            // ", -1" folds away and backs up so "1,-1" collapses to "1"
            self.tokens[l + 1] = self.tokens[l + 2];
            *left = 0;
            *pos -= 3;
            return true;
        }

        if k0 == Comma && self.tokens[l + 1].is_unary_op() && k2 == Function {
            self.tokens[l + 1] = self.tokens[l + 2];
            *pos -= 1;
            *left = 0;
            return true;
        }

        if k0 == Bareword && k1 == Dot && k2 == Bareword {
            // database.table keeps only the qualifier
            *pos -= 2;
            *left = 0;
            return true;
        }

        if k0 == Expression && k1 == Dot && k2 == Bareword {
            // SELECT . `t` reads as SELECT `t`
            self.tokens[l + 1] = self.tokens[l + 2];
            *pos -= 1;
            *left = 0;
            return true;
        }

        if k0 == Function && k1 == LeftParen && k2 != RightParen {
            // USER() takes no arguments; with any it is a column name
            if self.tokens[l].value().eq_ignore_ascii_case(b"USER") {
                self.tokens[l].kind = Bareword;
            }
        }

        false
    }

    /// Merge "A B" when the two-word phrase is a table entry
    /// ("UNION ALL", "NOT IN", "GROUP BY", ...).
    fn merge_words(&mut self, left: usize) -> bool {
        use TokenKind::*;
        let a = &self.tokens[left];
        let b = &self.tokens[left + 1];

        if !matches!(
            a.kind,
            Keyword | Bareword | Operator | Union | Function | Expression | Tsql | SqlType
        ) {
            return false;
        }
        if !matches!(
            b.kind,
            Keyword | Bareword | Operator | Union | Function | Expression | Tsql | SqlType
                | LogicOperator
        ) {
            return false;
        }

        let merged_len = a.len + b.len + 1;
        if merged_len >= lexer::TOKEN_VALUE_SIZE {
            return false;
        }

        let mut merged = [0u8; lexer::TOKEN_VALUE_SIZE];
        merged[..a.len].copy_from_slice(a.value());
        merged[a.len] = b' ';
        merged[a.len + 1..merged_len].copy_from_slice(b.value());

        let kind = data::lookup(&merged[..merged_len]);
        if kind != 0 {
            let pos = self.tokens[left].pos;
            self.tokens[left].assign(TokenKind::from_code(kind), pos, &merged[..merged_len]);
            true
        } else {
            false
        }
    }
}

/// Case-sensitive substring search.
fn memmem(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || haystack.len() < needle.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
