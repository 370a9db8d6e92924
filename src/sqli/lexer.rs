//! Dialect-aware SQL lexer.
//!
//! Converts a raw byte buffer into a stream of typed [`Token`]s. The lexer
//! is byte-oriented: no UTF-8 validation, ASCII-only case folding, and a
//! fixed 32-byte value buffer per token. Dispatch happens on the first
//! byte of each token; prefixed literals (`x'..'`, `b'..'`, `e'..'`,
//! `n'..'`, `q'..'`, `u&'..'`) get their own sub-lexers and fall back to
//! word lexing when the prefix does not pan out.

use super::data;
use super::SqliFlags;

/// Token value capacity, including the implicit terminator byte.
pub const TOKEN_VALUE_SIZE: usize = 32;

const CHAR_SINGLE: u8 = b'\'';
const CHAR_DOUBLE: u8 = b'"';
const CHAR_TICK: u8 = b'`';

/// Separators that end a word run.
const WORD_SEPARATORS: &[u8] = b" []{}()<>:\\?=@!#~+-*/&|^%,'\t\n\x0b\x0c\r\"\xa0\x00;";

/// Separators that end a variable name after the `@` / `@@` prefix.
const VAR_SEPARATORS: &[u8] = b" <>:\\?=@!#~+-*/&|^%(),'`\"\t\n\x0b\x0c\r";

/// One code per token class. The discriminant is the fingerprint byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    None = 0,
    Keyword = b'k',
    Union = b'U',
    GroupBy = b'B',
    Expression = b'E',
    SqlType = b't',
    Function = b'f',
    Bareword = b'n',
    Number = b'1',
    Variable = b'v',
    String = b's',
    Operator = b'o',
    LogicOperator = b'&',
    Comment = b'c',
    Collate = b'A',
    LeftParen = b'(',
    RightParen = b')',
    LeftBrace = b'{',
    RightBrace = b'}',
    Dot = b'.',
    Comma = b',',
    Colon = b':',
    Semicolon = b';',
    Tsql = b'T',
    Unknown = b'?',
    Evil = b'X',
    Fingerprint = b'F',
    Backslash = b'\\',
}

impl TokenKind {
    /// Fingerprint byte for this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`TokenKind::code`]; unknown bytes map to `Unknown`.
    pub fn from_code(code: u8) -> TokenKind {
        match code {
            0 => TokenKind::None,
            b'k' => TokenKind::Keyword,
            b'U' => TokenKind::Union,
            b'B' => TokenKind::GroupBy,
            b'E' => TokenKind::Expression,
            b't' => TokenKind::SqlType,
            b'f' => TokenKind::Function,
            b'n' => TokenKind::Bareword,
            b'1' => TokenKind::Number,
            b'v' => TokenKind::Variable,
            b's' => TokenKind::String,
            b'o' => TokenKind::Operator,
            b'&' => TokenKind::LogicOperator,
            b'c' => TokenKind::Comment,
            b'A' => TokenKind::Collate,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b'.' => TokenKind::Dot,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'T' => TokenKind::Tsql,
            b'X' => TokenKind::Evil,
            b'F' => TokenKind::Fingerprint,
            b'\\' => TokenKind::Backslash,
            _ => TokenKind::Unknown,
        }
    }
}

/// A lexed token. Value storage is inline; no allocation per token.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token in the original input.
    pub pos: usize,
    /// Stored value length (truncated to the inline capacity).
    pub len: usize,
    pub val: [u8; TOKEN_VALUE_SIZE],
    /// Opening quote byte for string-like tokens, 0 otherwise.
    pub str_open: u8,
    /// Closing quote byte; 0 on a string token means "unterminated".
    pub str_close: u8,
    /// Auxiliary counter (`@` vs `@@` for variables).
    pub count: u32,
}

impl Default for Token {
    fn default() -> Self {
        Token {
            kind: TokenKind::None,
            pos: 0,
            len: 0,
            val: [0; TOKEN_VALUE_SIZE],
            str_open: 0,
            str_close: 0,
            count: 0,
        }
    }
}

impl Token {
    pub fn clear(&mut self) {
        *self = Token::default();
    }

    /// Assign type, position and value; truncates to the inline capacity.
    /// Leaves `str_open`/`str_close`/`count` untouched so string
    /// sub-lexers can set them around the call.
    pub fn assign(&mut self, kind: TokenKind, pos: usize, value: &[u8]) {
        let last = value.len().min(TOKEN_VALUE_SIZE - 1);
        self.kind = kind;
        self.pos = pos;
        self.len = last;
        self.val[..last].copy_from_slice(&value[..last]);
        self.val[last] = 0;
    }

    pub fn assign_byte(&mut self, kind: TokenKind, pos: usize, value: u8) {
        self.kind = kind;
        self.pos = pos;
        self.len = 1;
        self.val[0] = value;
        self.val[1] = 0;
    }

    /// Stored value bytes.
    pub fn value(&self) -> &[u8] {
        &self.val[..self.len]
    }

    /// Stored value as `&str`; the lexer only stores bytes it read from
    /// the input, so invalid UTF-8 simply renders empty.
    pub fn value_str(&self) -> &str {
        core::str::from_utf8(self.value()).unwrap_or("")
    }

    /// `+`, `-`, `!`, `~`, `!!` and the word `NOT` act as unary operators.
    pub fn is_unary_op(&self) -> bool {
        if self.kind != TokenKind::Operator {
            return false;
        }
        match self.len {
            1 => matches!(self.val[0], b'+' | b'-' | b'!' | b'~'),
            2 => self.val[0] == b'!' && self.val[1] == b'!',
            3 => self.value().eq_ignore_ascii_case(b"NOT"),
            _ => false,
        }
    }

    pub fn is_arithmetic_op(&self) -> bool {
        self.kind == TokenKind::Operator
            && self.len == 1
            && matches!(self.val[0], b'*' | b'/' | b'-' | b'+' | b'%')
    }
}

/// Whitespace as the SQL lexer counts it.
pub(crate) fn is_sql_white(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | 0xa0 | 0x00)
}

fn find2(haystack: &[u8], from: usize, c0: u8, c1: u8) -> Option<usize> {
    if haystack.len() < 2 {
        return None;
    }
    (from..haystack.len() - 1).find(|&i| haystack[i] == c0 && haystack[i + 1] == c1)
}

fn span(haystack: &[u8], accept: &[u8]) -> usize {
    haystack
        .iter()
        .position(|b| !accept.contains(b))
        .unwrap_or(haystack.len())
}

/// Streaming lexer over one input buffer. `pos` only moves forward.
pub struct Lexer<'a> {
    input: &'a [u8],
    flags: SqliFlags,
    pos: usize,
    pub stats_comment_ddw: i32,
    pub stats_comment_ddx: i32,
    pub stats_comment_c: i32,
    pub stats_comment_hash: i32,
    pub stats_tokens: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8], flags: SqliFlags) -> Self {
        Lexer {
            input,
            flags,
            pos: 0,
            stats_comment_ddw: 0,
            stats_comment_ddx: 0,
            stats_comment_c: 0,
            stats_comment_hash: 0,
            stats_tokens: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.input.is_empty() {
            return None;
        }

        let mut tok = Token::default();

        // In a quote context the input is the body of an already-open
        // string: synthesize that string token before normal lexing.
        if self.pos == 0 && self.flags.in_quote_context() {
            self.pos = self.string_body(&mut tok, 0, self.flags.quote_byte(), 0);
            self.stats_tokens += 1;
            return Some(tok);
        }

        while self.pos < self.input.len() {
            let ch = self.input[self.pos];
            self.pos = self.dispatch(ch, &mut tok);
            if tok.kind != TokenKind::None {
                self.stats_tokens += 1;
                return Some(tok);
            }
        }
        None
    }

    fn dispatch(&mut self, ch: u8, tok: &mut Token) -> usize {
        match ch {
            0..=32 | 127 | 0xa0 => self.pos + 1,
            b'!' | b'&' | b'*' | b':' | b'<' | b'=' | b'>' | b'|' => self.lex_operator2(tok),
            b'"' | b'\'' => self.lex_string(tok),
            b'#' => self.lex_hash(tok),
            b'$' => self.lex_money(tok),
            b'%' | b'+' | b'^' | b'~' => self.lex_operator1(tok),
            b'(' | b')' | b',' | b';' | b'{' | b'}' => {
                tok.assign_byte(TokenKind::from_code(ch), self.pos, ch);
                self.pos + 1
            }
            b'-' => self.lex_dash(tok),
            b'.' | b'0'..=b'9' => self.lex_number(tok),
            b'/' => self.lex_slash(tok),
            b'?' | b']' => {
                tok.assign_byte(TokenKind::Unknown, self.pos, ch);
                self.pos + 1
            }
            b'@' => self.lex_var(tok),
            b'B' | b'b' => self.lex_bstring(tok),
            b'E' | b'e' => self.lex_estring(tok),
            b'N' | b'n' => self.lex_nqstring(tok),
            b'Q' | b'q' => self.lex_qstring(tok),
            b'U' | b'u' => self.lex_ustring(tok),
            b'X' | b'x' => self.lex_xstring(tok),
            b'[' => self.lex_bracket_word(tok),
            b'\\' => self.lex_backslash(tok),
            b'`' => self.lex_tick(tok),
            _ => self.lex_word(tok),
        }
    }

    fn lex_operator1(&mut self, tok: &mut Token) -> usize {
        tok.assign_byte(TokenKind::Operator, self.pos, self.input[self.pos]);
        self.pos + 1
    }

    fn lex_operator2(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;

        if pos + 1 >= input.len() {
            return self.lex_operator1(tok);
        }
        if pos + 2 < input.len() && &input[pos..pos + 3] == b"<=>" {
            // the only 3-char operator
            tok.assign(TokenKind::Operator, pos, &input[pos..pos + 3]);
            return pos + 3;
        }

        let kind = data::lookup(&input[pos..pos + 2]);
        if kind != 0 {
            tok.assign(TokenKind::from_code(kind), pos, &input[pos..pos + 2]);
            return pos + 2;
        }

        if input[pos] == b':' {
            tok.assign_byte(TokenKind::Colon, pos, b':');
            pos + 1
        } else {
            self.lex_operator1(tok)
        }
    }

    fn lex_hash(&mut self, tok: &mut Token) -> usize {
        self.stats_comment_hash += 1;
        if self.flags.is_mysql() {
            self.lex_eol_comment(tok)
        } else {
            tok.assign_byte(TokenKind::Operator, self.pos, b'#');
            self.pos + 1
        }
    }

    fn lex_dash(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;

        if pos + 1 < input.len() && input[pos + 1] == b'-' {
            if pos + 2 >= input.len() || is_sql_white(input[pos + 2]) {
                self.stats_comment_ddw += 1;
                return self.lex_eol_comment(tok);
            }
            // "--x": ANSI still reads a comment, MySQL sees two operators
            self.stats_comment_ddx += 1;
            if self.flags.is_ansi() {
                return self.lex_eol_comment(tok);
            }
        }
        tok.assign_byte(TokenKind::Operator, pos, b'-');
        pos + 1
    }

    fn lex_slash(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;

        if pos + 1 >= input.len() || input[pos + 1] != b'*' {
            return self.lex_operator1(tok);
        }
        self.stats_comment_c += 1;

        let close = find2(input, pos + 2, b'*', b'/');
        let (clen, body_end) = match close {
            Some(star) => (star + 2 - pos, star),
            None => (input.len() - pos, input.len()),
        };

        // nested comment opens and MySQL executable comments are never
        // legitimate user input
        let mut kind = TokenKind::Comment;
        if find2(&input[..body_end], pos + 2, b'/', b'*').is_some() {
            kind = TokenKind::Evil;
        } else if pos + 2 < input.len() && input[pos + 2] == b'!' {
            kind = TokenKind::Evil;
        }

        tok.assign(kind, pos, &input[pos..pos + clen]);
        pos + clen
    }

    fn lex_eol_comment(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        match input[pos..].iter().position(|&b| b == b'\n') {
            Some(off) => {
                tok.assign(TokenKind::Comment, pos, &input[pos..pos + off]);
                pos + off + 1
            }
            None => {
                tok.assign(TokenKind::Comment, pos, &input[pos..]);
                input.len()
            }
        }
    }

    fn lex_backslash(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        if pos + 1 < self.input.len() && self.input[pos + 1] == b'N' {
            // \N is the SQL null literal
            tok.assign(TokenKind::Number, pos, &self.input[pos..pos + 2]);
            pos + 2
        } else {
            tok.assign_byte(TokenKind::Backslash, pos, b'\\');
            pos + 1
        }
    }

    fn lex_string(&mut self, tok: &mut Token) -> usize {
        let delim = self.input[self.pos];
        self.string_body(tok, self.pos, delim, 1)
    }

    /// Core quoted-string scan starting at `pos + offset`. `offset == 0`
    /// means the opening quote is not part of the input (quote context).
    fn string_body(&mut self, tok: &mut Token, pos: usize, delim: u8, offset: usize) -> usize {
        let input = self.input;
        let start = pos + offset;

        tok.str_open = if offset > 0 { delim } else { 0 };

        let mut search = start;
        loop {
            let found = input[search..].iter().position(|&b| b == delim);
            match found {
                None => {
                    tok.assign(TokenKind::String, start, &input[start..]);
                    tok.str_close = 0;
                    return input.len();
                }
                Some(off) => {
                    let qpos = search + off;
                    if qpos > start && backslash_escaped(input, start, qpos - 1) {
                        search = qpos + 1;
                    } else if qpos + 1 < input.len() && input[qpos + 1] == delim {
                        // SQL doubled-delimiter escape
                        search = qpos + 2;
                    } else {
                        tok.assign(TokenKind::String, start, &input[start..qpos]);
                        tok.str_close = delim;
                        return qpos + 1;
                    }
                }
            }
        }
    }

    fn lex_estring(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        if pos + 2 >= self.input.len() || self.input[pos + 1] != CHAR_SINGLE {
            return self.lex_word(tok);
        }
        self.string_body(tok, pos, CHAR_SINGLE, 2)
    }

    fn lex_ustring(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        if pos + 2 < input.len() && input[pos + 1] == b'&' && input[pos + 2] == CHAR_SINGLE {
            self.pos += 2;
            let end = self.lex_string(tok);
            tok.str_open = b'u';
            if tok.str_close == CHAR_SINGLE {
                tok.str_close = b'u';
            }
            end
        } else {
            self.lex_word(tok)
        }
    }

    fn lex_qstring(&mut self, tok: &mut Token) -> usize {
        self.qstring_body(tok, 0)
    }

    fn lex_nqstring(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        if pos + 2 < self.input.len() && self.input[pos + 1] == CHAR_SINGLE {
            return self.lex_estring(tok);
        }
        self.qstring_body(tok, 1)
    }

    /// Oracle `q'<delim>...<delim>'` strings; bracket pairs map to their
    /// closing counterpart, anything else closes with itself.
    fn qstring_body(&mut self, tok: &mut Token, offset: usize) -> usize {
        let input = self.input;
        let pos = self.pos + offset;

        if pos >= input.len()
            || !matches!(input[pos], b'q' | b'Q')
            || pos + 2 >= input.len()
            || input[pos + 1] != CHAR_SINGLE
        {
            return self.lex_word(tok);
        }
        let open = input[pos + 2];
        if open < 33 {
            return self.lex_word(tok);
        }
        let close = match open {
            b'(' => b')',
            b'[' => b']',
            b'{' => b'}',
            b'<' => b'>',
            other => other,
        };

        let start = pos + 3;
        match find2(input, start, close, CHAR_SINGLE) {
            Some(end) => {
                tok.assign(TokenKind::String, start, &input[start..end]);
                tok.str_open = b'q';
                tok.str_close = b'q';
                end + 2
            }
            None => {
                tok.assign(TokenKind::String, start, &input[start..]);
                tok.str_open = b'q';
                tok.str_close = 0;
                input.len()
            }
        }
    }

    fn lex_bstring(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        if pos + 2 >= input.len() || input[pos + 1] != CHAR_SINGLE {
            return self.lex_word(tok);
        }
        let wlen = span(&input[pos + 2..], b"01");
        if pos + 2 + wlen >= input.len() || input[pos + 2 + wlen] != CHAR_SINGLE {
            return self.lex_word(tok);
        }
        tok.assign(TokenKind::Number, pos, &input[pos..pos + wlen + 3]);
        pos + wlen + 3
    }

    fn lex_xstring(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        if pos + 2 >= input.len() || input[pos + 1] != CHAR_SINGLE {
            return self.lex_word(tok);
        }
        let wlen = input[pos + 2..]
            .iter()
            .position(|b| !b.is_ascii_hexdigit())
            .unwrap_or(input.len() - pos - 2);
        if pos + 2 + wlen >= input.len() || input[pos + 2 + wlen] != CHAR_SINGLE {
            return self.lex_word(tok);
        }
        tok.assign(TokenKind::Number, pos, &input[pos..pos + wlen + 3]);
        pos + wlen + 3
    }

    fn lex_bracket_word(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        match input[pos..].iter().position(|&b| b == b']') {
            Some(off) => {
                tok.assign(TokenKind::Bareword, pos, &input[pos..pos + off + 1]);
                pos + off + 1
            }
            None => {
                tok.assign(TokenKind::Bareword, pos, &input[pos..]);
                input.len()
            }
        }
    }

    fn lex_word(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;
        let wlen = input[pos..]
            .iter()
            .position(|b| WORD_SEPARATORS.contains(b))
            .unwrap_or(input.len() - pos);
        let word = &input[pos..pos + wlen];

        tok.assign(TokenKind::Bareword, pos, word);

        // "SELECT.1" and "SELECT`x`": if the run up to a '.' or '`' is a
        // known non-bareword keyword, emit just that prefix.
        for (i, &b) in word.iter().take(TOKEN_VALUE_SIZE - 1).enumerate() {
            if b == b'.' || b == b'`' {
                let kind = data::lookup(&word[..i]);
                if kind != 0 && kind != b'n' {
                    tok.clear();
                    tok.assign(TokenKind::from_code(kind), pos, &word[..i]);
                    return pos + i;
                }
            }
        }

        if wlen < TOKEN_VALUE_SIZE {
            let kind = data::lookup(word);
            if kind != 0 {
                tok.kind = TokenKind::from_code(kind);
            }
        }
        pos + wlen
    }

    fn lex_tick(&mut self, tok: &mut Token) -> usize {
        let end = self.string_body(tok, self.pos, CHAR_TICK, 1);
        // backtick-quoted known functions keep their function type,
        // everything else is an identifier
        if data::lookup(tok.value()) == b'f' {
            tok.kind = TokenKind::Function;
        } else {
            tok.kind = TokenKind::Bareword;
        }
        end
    }

    fn lex_var(&mut self, tok: &mut Token) -> usize {
        let input = self.input;
        let mut pos = self.pos + 1;

        tok.count = 1;
        if pos < input.len() && input[pos] == b'@' {
            pos += 1;
            tok.count = 2;
        }

        if pos < input.len() {
            if input[pos] == CHAR_TICK {
                self.pos = pos;
                let end = self.lex_tick(tok);
                tok.kind = TokenKind::Variable;
                return end;
            }
            if input[pos] == CHAR_SINGLE || input[pos] == CHAR_DOUBLE {
                self.pos = pos;
                let end = self.lex_string(tok);
                tok.kind = TokenKind::Variable;
                return end;
            }
        }

        let xlen = input[pos..]
            .iter()
            .position(|b| VAR_SEPARATORS.contains(b))
            .unwrap_or(input.len() - pos);
        let count = tok.count;
        tok.assign(TokenKind::Variable, pos, &input[pos..pos + xlen]);
        tok.count = count;
        pos + xlen
    }

    fn lex_money(&mut self, tok: &mut Token) -> usize {
        let pos = self.pos;
        let input = self.input;

        if pos + 1 == input.len() {
            tok.assign_byte(TokenKind::Bareword, pos, b'$');
            return input.len();
        }

        // $1,000.00
        let xlen = span(&input[pos + 1..], b"0123456789.,");
        if xlen > 0 {
            tok.assign(TokenKind::Number, pos, &input[pos..pos + 1 + xlen]);
            return pos + 1 + xlen;
        }

        if input[pos + 1] == b'$' {
            // $$..$$ string
            return match find2(input, pos + 2, b'$', b'$') {
                Some(end) => {
                    tok.assign(TokenKind::String, pos + 2, &input[pos + 2..end]);
                    tok.str_open = b'$';
                    tok.str_close = b'$';
                    end + 2
                }
                None => {
                    tok.assign(TokenKind::String, pos + 2, &input[pos + 2..]);
                    tok.str_open = b'$';
                    tok.str_close = 0;
                    input.len()
                }
            };
        }

        // $tag$..$tag$
        let taglen = input[pos + 1..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(input.len() - pos - 1);
        if taglen == 0 {
            tok.assign_byte(TokenKind::Bareword, pos, b'$');
            return pos + 1;
        }
        if pos + 1 + taglen < input.len() && input[pos + 1 + taglen] == b'$' {
            let tag = &input[pos..pos + taglen + 2];
            let start = pos + taglen + 2;
            let found = (start..input.len().saturating_sub(tag.len() - 1))
                .find(|&i| &input[i..i + tag.len()] == tag);
            return match found {
                Some(end) => {
                    tok.assign(TokenKind::String, start, &input[start..end]);
                    tok.str_open = b'$';
                    tok.str_close = b'$';
                    end + tag.len()
                }
                None => {
                    tok.assign(TokenKind::String, start, &input[start..]);
                    tok.str_open = b'$';
                    tok.str_close = 0;
                    input.len()
                }
            };
        }

        tok.assign_byte(TokenKind::Bareword, pos, b'$');
        pos + 1
    }

    fn lex_number(&mut self, tok: &mut Token) -> usize {
        let input = self.input;
        let start = self.pos;
        let mut pos = start;

        if input[pos] == b'0' && pos + 1 < input.len() {
            match input[pos + 1] {
                b'X' | b'x' => {
                    pos += 2;
                    while pos < input.len() && input[pos].is_ascii_hexdigit() {
                        pos += 1;
                    }
                    if pos == start + 2 {
                        // "0x" with no digits is a word
                        tok.assign(TokenKind::Bareword, start, &input[start..pos]);
                    } else {
                        tok.assign(TokenKind::Number, start, &input[start..pos]);
                    }
                    return pos;
                }
                b'B' | b'b' => {
                    pos += 2;
                    while pos < input.len() && matches!(input[pos], b'0' | b'1') {
                        pos += 1;
                    }
                    if pos == start + 2 {
                        tok.assign(TokenKind::Bareword, start, &input[start..pos]);
                    } else {
                        tok.assign(TokenKind::Number, start, &input[start..pos]);
                    }
                    return pos;
                }
                _ => {}
            }
        }

        while pos < input.len() && input[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos < input.len() && input[pos] == b'.' {
            pos += 1;
            while pos < input.len() && input[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos - start == 1 {
                // a lone "." is punctuation
                tok.assign_byte(TokenKind::Dot, start, b'.');
                return pos;
            }
        }

        // An exponent marker with no digits is not part of the number:
        // the token ends before the 'e' and lexing resumes there, so
        // "1234e" yields a number and then a word.
        if pos < input.len() && matches!(input[pos], b'E' | b'e') {
            let mark = pos;
            pos += 1;
            if pos < input.len() && matches!(input[pos], b'+' | b'-') {
                pos += 1;
            }
            let mut have_exp = false;
            while pos < input.len() && input[pos].is_ascii_digit() {
                have_exp = true;
                pos += 1;
            }
            if !have_exp {
                tok.assign(TokenKind::Number, start, &input[start..mark]);
                return mark;
            }
        }

        // Oracle float suffix, only valid before EOF, whitespace, ';' or
        // a 'u' (so "1fUNION" still splits into "1f" "UNION")
        if pos < input.len() && matches!(input[pos], b'd' | b'D' | b'f' | b'F') {
            if pos + 1 == input.len()
                || is_sql_white(input[pos + 1])
                || input[pos + 1] == b';'
                || matches!(input[pos + 1], b'u' | b'U')
            {
                pos += 1;
            }
        }

        tok.assign(TokenKind::Number, start, &input[start..pos]);
        pos
    }
}

/// Counts the run of backslashes ending at `end`; an odd count means the
/// byte after `end` is escaped. Walks backward without leaving `start`.
fn backslash_escaped(input: &[u8], start: usize, end: usize) -> bool {
    let mut count = 0usize;
    let mut i = end;
    loop {
        if input[i] != b'\\' {
            break;
        }
        count += 1;
        if i == start {
            break;
        }
        i -= 1;
    }
    count & 1 == 1
}
