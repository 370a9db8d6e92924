//! Keyword and fingerprint table for the SQL lexer.
//!
//! A single sorted array backs every lookup the detector performs: plain
//! SQL words, multi-word operators ("NOT IN", "IS NOT", ...), two-char
//! operator digraphs, and the known-attack fingerprint corpus. Fingerprint
//! rows are uppercased and prefixed with the digit `0` so they occupy
//! their own namespace; their kind byte is `F`.
//!
//! Rows are sorted bytewise on the word, which is the order
//! [`lookup`] depends on. Keep it that way when editing.

/// One row of the lookup table.
pub struct Keyword {
    pub word: &'static str,
    pub kind: u8,
}

const fn kw(word: &'static str, kind: u8) -> Keyword {
    Keyword { word, kind }
}

pub static SQL_KEYWORDS: [Keyword; 973] = [
    kw("!!", b'o'),
    kw("!<", b'o'),
    kw("!=", b'o'),
    kw("!>", b'o'),
    kw("%=", b'o'),
    kw("&&", b'&'),
    kw("&=", b'o'),
    kw("*=", b'o'),
    kw("+=", b'o'),
    kw("-=", b'o'),
    kw("/=", b'o'),
    kw("0)&(", b'F'),
    kw("0)&(1", b'F'),
    kw("0)&(N", b'F'),
    kw("0)&(S", b'F'),
    kw("0)&(V", b'F'),
    kw("0)&1", b'F'),
    kw("0)&N", b'F'),
    kw("0)&S", b'F'),
    kw("0)&V", b'F'),
    kw("0)C", b'F'),
    kw("0)O(", b'F'),
    kw("0)O(1", b'F'),
    kw("0)O(N", b'F'),
    kw("0)O(S", b'F'),
    kw("0)O(V", b'F'),
    kw("0)O1", b'F'),
    kw("0)ON", b'F'),
    kw("0)OS", b'F'),
    kw("0)OV", b'F'),
    kw("01&(", b'F'),
    kw("01&(1", b'F'),
    kw("01&(1)", b'F'),
    kw("01&(1O", b'F'),
    kw("01&(N", b'F'),
    kw("01&(N)", b'F'),
    kw("01&(NO", b'F'),
    kw("01&(S", b'F'),
    kw("01&(S)", b'F'),
    kw("01&(SO", b'F'),
    kw("01&(V", b'F'),
    kw("01&(V)", b'F'),
    kw("01&(VO", b'F'),
    kw("01&1", b'F'),
    kw("01&1C", b'F'),
    kw("01&1K", b'F'),
    kw("01&1O", b'F'),
    kw("01&1O1", b'F'),
    kw("01&1ON", b'F'),
    kw("01&1OS", b'F'),
    kw("01&1OV", b'F'),
    kw("01&1UE", b'F'),
    kw("01&F(", b'F'),
    kw("01&N", b'F'),
    kw("01&NC", b'F'),
    kw("01&NK", b'F'),
    kw("01&NO", b'F'),
    kw("01&NO1", b'F'),
    kw("01&NON", b'F'),
    kw("01&NOS", b'F'),
    kw("01&NOV", b'F'),
    kw("01&NUE", b'F'),
    kw("01&S", b'F'),
    kw("01&SC", b'F'),
    kw("01&SK", b'F'),
    kw("01&SO", b'F'),
    kw("01&SO1", b'F'),
    kw("01&SON", b'F'),
    kw("01&SOS", b'F'),
    kw("01&SOV", b'F'),
    kw("01&SUE", b'F'),
    kw("01&V", b'F'),
    kw("01&VC", b'F'),
    kw("01&VK", b'F'),
    kw("01&VO", b'F'),
    kw("01&VO1", b'F'),
    kw("01&VON", b'F'),
    kw("01&VOS", b'F'),
    kw("01&VOV", b'F'),
    kw("01&VUE", b'F'),
    kw("01)&(", b'F'),
    kw("01)O(", b'F'),
    kw("01;E", b'F'),
    kw("01;E(", b'F'),
    kw("01;E1", b'F'),
    kw("01;EN", b'F'),
    kw("01;ES", b'F'),
    kw("01;EV", b'F'),
    kw("01;K", b'F'),
    kw("01;K(", b'F'),
    kw("01;K1", b'F'),
    kw("01;KK", b'F'),
    kw("01;KK1", b'F'),
    kw("01;KKN", b'F'),
    kw("01;KKS", b'F'),
    kw("01;KKV", b'F'),
    kw("01;KN", b'F'),
    kw("01;KS", b'F'),
    kw("01;KV", b'F'),
    kw("01;T", b'F'),
    kw("01;T(", b'F'),
    kw("01;T1", b'F'),
    kw("01;TN", b'F'),
    kw("01;TS", b'F'),
    kw("01;TV", b'F'),
    kw("01C", b'F'),
    kw("01OS", b'F'),
    kw("01OSC", b'F'),
    kw("01U", b'F'),
    kw("01U(", b'F'),
    kw("01U1", b'F'),
    kw("01UC", b'F'),
    kw("01UE", b'F'),
    kw("01UE(", b'F'),
    kw("01UE(1", b'F'),
    kw("01UE(K", b'F'),
    kw("01UE(N", b'F'),
    kw("01UE(S", b'F'),
    kw("01UE(V", b'F'),
    kw("01UE1", b'F'),
    kw("01UEC", b'F'),
    kw("01UEF", b'F'),
    kw("01UEK", b'F'),
    kw("01UEN", b'F'),
    kw("01UEO", b'F'),
    kw("01UEO1", b'F'),
    kw("01UEOK", b'F'),
    kw("01UEON", b'F'),
    kw("01UEOS", b'F'),
    kw("01UEOV", b'F'),
    kw("01UES", b'F'),
    kw("01UEV", b'F'),
    kw("01UF", b'F'),
    kw("01UK", b'F'),
    kw("01UN", b'F'),
    kw("01US", b'F'),
    kw("0;E", b'F'),
    kw("0;E(", b'F'),
    kw("0;E1", b'F'),
    kw("0;EN", b'F'),
    kw("0;ES", b'F'),
    kw("0;EV", b'F'),
    kw("0;K", b'F'),
    kw("0;K(", b'F'),
    kw("0;K1", b'F'),
    kw("0;KK", b'F'),
    kw("0;KK1", b'F'),
    kw("0;KKN", b'F'),
    kw("0;KKS", b'F'),
    kw("0;KKV", b'F'),
    kw("0;KN", b'F'),
    kw("0;KS", b'F'),
    kw("0;KV", b'F'),
    kw("0;T", b'F'),
    kw("0;T(", b'F'),
    kw("0;T1", b'F'),
    kw("0;TN", b'F'),
    kw("0;TS", b'F'),
    kw("0;TV", b'F'),
    kw("0E(", b'F'),
    kw("0E1", b'F'),
    kw("0E1C", b'F'),
    kw("0EC", b'F'),
    kw("0EF", b'F'),
    kw("0EF(", b'F'),
    kw("0EF()", b'F'),
    kw("0EF(1", b'F'),
    kw("0EF(N", b'F'),
    kw("0EF(S", b'F'),
    kw("0EF(V", b'F'),
    kw("0EK", b'F'),
    kw("0EN", b'F'),
    kw("0ENC", b'F'),
    kw("0EO", b'F'),
    kw("0EO1", b'F'),
    kw("0EOF", b'F'),
    kw("0EOK", b'F'),
    kw("0EOK1", b'F'),
    kw("0EOKN", b'F'),
    kw("0EOKNK", b'F'),
    kw("0EOKS", b'F'),
    kw("0EOKV", b'F'),
    kw("0EON", b'F'),
    kw("0EOS", b'F'),
    kw("0EOV", b'F'),
    kw("0ES", b'F'),
    kw("0ESC", b'F'),
    kw("0EV", b'F'),
    kw("0EVC", b'F'),
    kw("0F(", b'F'),
    kw("0F()", b'F'),
    kw("0F()O", b'F'),
    kw("0F(1", b'F'),
    kw("0F(1)", b'F'),
    kw("0F(1)C", b'F'),
    kw("0F(N", b'F'),
    kw("0F(N)", b'F'),
    kw("0F(N)C", b'F'),
    kw("0F(S", b'F'),
    kw("0F(S)", b'F'),
    kw("0F(S)C", b'F'),
    kw("0F(V", b'F'),
    kw("0F(V)", b'F'),
    kw("0F(V)C", b'F'),
    kw("0KK", b'F'),
    kw("0KK(", b'F'),
    kw("0KK1", b'F'),
    kw("0KK1C", b'F'),
    kw("0KKC", b'F'),
    kw("0KKF", b'F'),
    kw("0KKK", b'F'),
    kw("0KKN", b'F'),
    kw("0KKNC", b'F'),
    kw("0KKS", b'F'),
    kw("0KKSC", b'F'),
    kw("0KKV", b'F'),
    kw("0KKVC", b'F'),
    kw("0N&(", b'F'),
    kw("0N&(1", b'F'),
    kw("0N&(1)", b'F'),
    kw("0N&(1O", b'F'),
    kw("0N&(N", b'F'),
    kw("0N&(N)", b'F'),
    kw("0N&(NO", b'F'),
    kw("0N&(S", b'F'),
    kw("0N&(S)", b'F'),
    kw("0N&(SO", b'F'),
    kw("0N&(V", b'F'),
    kw("0N&(V)", b'F'),
    kw("0N&(VO", b'F'),
    kw("0N&1", b'F'),
    kw("0N&1C", b'F'),
    kw("0N&1K", b'F'),
    kw("0N&1O", b'F'),
    kw("0N&1O1", b'F'),
    kw("0N&1ON", b'F'),
    kw("0N&1OS", b'F'),
    kw("0N&1OV", b'F'),
    kw("0N&1UE", b'F'),
    kw("0N&F(", b'F'),
    kw("0N&N", b'F'),
    kw("0N&NC", b'F'),
    kw("0N&NK", b'F'),
    kw("0N&NO", b'F'),
    kw("0N&NO1", b'F'),
    kw("0N&NON", b'F'),
    kw("0N&NOS", b'F'),
    kw("0N&NOV", b'F'),
    kw("0N&NUE", b'F'),
    kw("0N&S", b'F'),
    kw("0N&SC", b'F'),
    kw("0N&SK", b'F'),
    kw("0N&SO", b'F'),
    kw("0N&SO1", b'F'),
    kw("0N&SON", b'F'),
    kw("0N&SOS", b'F'),
    kw("0N&SOV", b'F'),
    kw("0N&SUE", b'F'),
    kw("0N&V", b'F'),
    kw("0N&VC", b'F'),
    kw("0N&VK", b'F'),
    kw("0N&VO", b'F'),
    kw("0N&VO1", b'F'),
    kw("0N&VON", b'F'),
    kw("0N&VOS", b'F'),
    kw("0N&VOV", b'F'),
    kw("0N&VUE", b'F'),
    kw("0N)&(", b'F'),
    kw("0N)O(", b'F'),
    kw("0N;E", b'F'),
    kw("0N;E(", b'F'),
    kw("0N;E1", b'F'),
    kw("0N;EN", b'F'),
    kw("0N;ES", b'F'),
    kw("0N;EV", b'F'),
    kw("0N;K", b'F'),
    kw("0N;K(", b'F'),
    kw("0N;K1", b'F'),
    kw("0N;KK", b'F'),
    kw("0N;KK1", b'F'),
    kw("0N;KKN", b'F'),
    kw("0N;KKS", b'F'),
    kw("0N;KKV", b'F'),
    kw("0N;KN", b'F'),
    kw("0N;KS", b'F'),
    kw("0N;KV", b'F'),
    kw("0N;T", b'F'),
    kw("0N;T(", b'F'),
    kw("0N;T1", b'F'),
    kw("0N;TN", b'F'),
    kw("0N;TS", b'F'),
    kw("0N;TV", b'F'),
    kw("0NC", b'F'),
    kw("0NOS", b'F'),
    kw("0NOSC", b'F'),
    kw("0NU", b'F'),
    kw("0NU(", b'F'),
    kw("0NU1", b'F'),
    kw("0NUC", b'F'),
    kw("0NUE", b'F'),
    kw("0NUE(", b'F'),
    kw("0NUE(1", b'F'),
    kw("0NUE(K", b'F'),
    kw("0NUE(N", b'F'),
    kw("0NUE(S", b'F'),
    kw("0NUE(V", b'F'),
    kw("0NUE1", b'F'),
    kw("0NUEC", b'F'),
    kw("0NUEF", b'F'),
    kw("0NUEK", b'F'),
    kw("0NUEN", b'F'),
    kw("0NUEO", b'F'),
    kw("0NUEO1", b'F'),
    kw("0NUEOK", b'F'),
    kw("0NUEON", b'F'),
    kw("0NUEOS", b'F'),
    kw("0NUEOV", b'F'),
    kw("0NUES", b'F'),
    kw("0NUEV", b'F'),
    kw("0NUF", b'F'),
    kw("0NUK", b'F'),
    kw("0NUN", b'F'),
    kw("0NUS", b'F'),
    kw("0S&(", b'F'),
    kw("0S&(1", b'F'),
    kw("0S&(1)", b'F'),
    kw("0S&(1O", b'F'),
    kw("0S&(N", b'F'),
    kw("0S&(N)", b'F'),
    kw("0S&(NO", b'F'),
    kw("0S&(S", b'F'),
    kw("0S&(S)", b'F'),
    kw("0S&(SO", b'F'),
    kw("0S&(V", b'F'),
    kw("0S&(V)", b'F'),
    kw("0S&(VO", b'F'),
    kw("0S&1", b'F'),
    kw("0S&1C", b'F'),
    kw("0S&1K", b'F'),
    kw("0S&1O", b'F'),
    kw("0S&1O1", b'F'),
    kw("0S&1ON", b'F'),
    kw("0S&1OS", b'F'),
    kw("0S&1OV", b'F'),
    kw("0S&1UE", b'F'),
    kw("0S&F(", b'F'),
    kw("0S&N", b'F'),
    kw("0S&NC", b'F'),
    kw("0S&NK", b'F'),
    kw("0S&NO", b'F'),
    kw("0S&NO1", b'F'),
    kw("0S&NON", b'F'),
    kw("0S&NOS", b'F'),
    kw("0S&NOV", b'F'),
    kw("0S&NUE", b'F'),
    kw("0S&S", b'F'),
    kw("0S&SC", b'F'),
    kw("0S&SK", b'F'),
    kw("0S&SO", b'F'),
    kw("0S&SO1", b'F'),
    kw("0S&SON", b'F'),
    kw("0S&SOS", b'F'),
    kw("0S&SOV", b'F'),
    kw("0S&SUE", b'F'),
    kw("0S&V", b'F'),
    kw("0S&VC", b'F'),
    kw("0S&VK", b'F'),
    kw("0S&VO", b'F'),
    kw("0S&VO1", b'F'),
    kw("0S&VON", b'F'),
    kw("0S&VOS", b'F'),
    kw("0S&VOV", b'F'),
    kw("0S&VUE", b'F'),
    kw("0S)&(", b'F'),
    kw("0S)O(", b'F'),
    kw("0S;E", b'F'),
    kw("0S;E(", b'F'),
    kw("0S;E1", b'F'),
    kw("0S;EN", b'F'),
    kw("0S;ES", b'F'),
    kw("0S;EV", b'F'),
    kw("0S;K", b'F'),
    kw("0S;K(", b'F'),
    kw("0S;K1", b'F'),
    kw("0S;KK", b'F'),
    kw("0S;KK1", b'F'),
    kw("0S;KKN", b'F'),
    kw("0S;KKS", b'F'),
    kw("0S;KKV", b'F'),
    kw("0S;KN", b'F'),
    kw("0S;KS", b'F'),
    kw("0S;KV", b'F'),
    kw("0S;T", b'F'),
    kw("0S;T(", b'F'),
    kw("0S;T1", b'F'),
    kw("0S;TN", b'F'),
    kw("0S;TS", b'F'),
    kw("0S;TV", b'F'),
    kw("0SC", b'F'),
    kw("0SO1", b'F'),
    kw("0SO1C", b'F'),
    kw("0SON", b'F'),
    kw("0SONC", b'F'),
    kw("0SOS", b'F'),
    kw("0SOSC", b'F'),
    kw("0SOV", b'F'),
    kw("0SOVC", b'F'),
    kw("0SU", b'F'),
    kw("0SU(", b'F'),
    kw("0SU1", b'F'),
    kw("0SUC", b'F'),
    kw("0SUE", b'F'),
    kw("0SUE(", b'F'),
    kw("0SUE(1", b'F'),
    kw("0SUE(K", b'F'),
    kw("0SUE(N", b'F'),
    kw("0SUE(S", b'F'),
    kw("0SUE(V", b'F'),
    kw("0SUE1", b'F'),
    kw("0SUEC", b'F'),
    kw("0SUEF", b'F'),
    kw("0SUEK", b'F'),
    kw("0SUEN", b'F'),
    kw("0SUEO", b'F'),
    kw("0SUEO1", b'F'),
    kw("0SUEOK", b'F'),
    kw("0SUEON", b'F'),
    kw("0SUEOS", b'F'),
    kw("0SUEOV", b'F'),
    kw("0SUES", b'F'),
    kw("0SUEV", b'F'),
    kw("0SUF", b'F'),
    kw("0SUK", b'F'),
    kw("0SUN", b'F'),
    kw("0SUS", b'F'),
    kw("0T(", b'F'),
    kw("0T1", b'F'),
    kw("0TN", b'F'),
    kw("0TS", b'F'),
    kw("0TV", b'F'),
    kw("0UE", b'F'),
    kw("0UE(", b'F'),
    kw("0UE(1", b'F'),
    kw("0UE(K", b'F'),
    kw("0UE(N", b'F'),
    kw("0UE(S", b'F'),
    kw("0UE(V", b'F'),
    kw("0UE1", b'F'),
    kw("0UEF", b'F'),
    kw("0UEK", b'F'),
    kw("0UEN", b'F'),
    kw("0UEO", b'F'),
    kw("0UEO1", b'F'),
    kw("0UEOK", b'F'),
    kw("0UEON", b'F'),
    kw("0UEOS", b'F'),
    kw("0UEOV", b'F'),
    kw("0UES", b'F'),
    kw("0UEV", b'F'),
    kw("0V&(", b'F'),
    kw("0V&(1", b'F'),
    kw("0V&(1)", b'F'),
    kw("0V&(1O", b'F'),
    kw("0V&(N", b'F'),
    kw("0V&(N)", b'F'),
    kw("0V&(NO", b'F'),
    kw("0V&(S", b'F'),
    kw("0V&(S)", b'F'),
    kw("0V&(SO", b'F'),
    kw("0V&(V", b'F'),
    kw("0V&(V)", b'F'),
    kw("0V&(VO", b'F'),
    kw("0V&1", b'F'),
    kw("0V&1C", b'F'),
    kw("0V&1K", b'F'),
    kw("0V&1O", b'F'),
    kw("0V&1O1", b'F'),
    kw("0V&1ON", b'F'),
    kw("0V&1OS", b'F'),
    kw("0V&1OV", b'F'),
    kw("0V&1UE", b'F'),
    kw("0V&F(", b'F'),
    kw("0V&N", b'F'),
    kw("0V&NC", b'F'),
    kw("0V&NK", b'F'),
    kw("0V&NO", b'F'),
    kw("0V&NO1", b'F'),
    kw("0V&NON", b'F'),
    kw("0V&NOS", b'F'),
    kw("0V&NOV", b'F'),
    kw("0V&NUE", b'F'),
    kw("0V&S", b'F'),
    kw("0V&SC", b'F'),
    kw("0V&SK", b'F'),
    kw("0V&SO", b'F'),
    kw("0V&SO1", b'F'),
    kw("0V&SON", b'F'),
    kw("0V&SOS", b'F'),
    kw("0V&SOV", b'F'),
    kw("0V&SUE", b'F'),
    kw("0V&V", b'F'),
    kw("0V&VC", b'F'),
    kw("0V&VK", b'F'),
    kw("0V&VO", b'F'),
    kw("0V&VO1", b'F'),
    kw("0V&VON", b'F'),
    kw("0V&VOS", b'F'),
    kw("0V&VOV", b'F'),
    kw("0V&VUE", b'F'),
    kw("0V)&(", b'F'),
    kw("0V)O(", b'F'),
    kw("0V;E", b'F'),
    kw("0V;E(", b'F'),
    kw("0V;E1", b'F'),
    kw("0V;EN", b'F'),
    kw("0V;ES", b'F'),
    kw("0V;EV", b'F'),
    kw("0V;K", b'F'),
    kw("0V;K(", b'F'),
    kw("0V;K1", b'F'),
    kw("0V;KK", b'F'),
    kw("0V;KK1", b'F'),
    kw("0V;KKN", b'F'),
    kw("0V;KKS", b'F'),
    kw("0V;KKV", b'F'),
    kw("0V;KN", b'F'),
    kw("0V;KS", b'F'),
    kw("0V;KV", b'F'),
    kw("0V;T", b'F'),
    kw("0V;T(", b'F'),
    kw("0V;T1", b'F'),
    kw("0V;TN", b'F'),
    kw("0V;TS", b'F'),
    kw("0V;TV", b'F'),
    kw("0VC", b'F'),
    kw("0VOS", b'F'),
    kw("0VOSC", b'F'),
    kw("0VU", b'F'),
    kw("0VU(", b'F'),
    kw("0VU1", b'F'),
    kw("0VUC", b'F'),
    kw("0VUE", b'F'),
    kw("0VUE(", b'F'),
    kw("0VUE(1", b'F'),
    kw("0VUE(K", b'F'),
    kw("0VUE(N", b'F'),
    kw("0VUE(S", b'F'),
    kw("0VUE(V", b'F'),
    kw("0VUE1", b'F'),
    kw("0VUEC", b'F'),
    kw("0VUEF", b'F'),
    kw("0VUEK", b'F'),
    kw("0VUEN", b'F'),
    kw("0VUEO", b'F'),
    kw("0VUEO1", b'F'),
    kw("0VUEOK", b'F'),
    kw("0VUEON", b'F'),
    kw("0VUEOS", b'F'),
    kw("0VUEOV", b'F'),
    kw("0VUES", b'F'),
    kw("0VUEV", b'F'),
    kw("0VUF", b'F'),
    kw("0VUK", b'F'),
    kw("0VUN", b'F'),
    kw("0VUS", b'F'),
    kw("0X", b'F'),
    kw("::", b'o'),
    kw(":=", b'o'),
    kw("<<", b'o'),
    kw("<=", b'o'),
    kw("<>", b'o'),
    kw("==", b'o'),
    kw(">=", b'o'),
    kw(">>", b'o'),
    kw("ABS", b'f'),
    kw("ACOS", b'f'),
    kw("ADD", b'k'),
    kw("ADDDATE", b'f'),
    kw("ADDTIME", b'f'),
    kw("AES_DECRYPT", b'f'),
    kw("AES_ENCRYPT", b'f'),
    kw("AFTER", b'k'),
    kw("AGAINST", b'k'),
    kw("ALL", b'k'),
    kw("ALTER", b'k'),
    kw("ANALYZE", b'k'),
    kw("AND", b'&'),
    kw("ANY", b'k'),
    kw("AS", b'k'),
    kw("ASC", b'k'),
    kw("ASCII", b'f'),
    kw("ASIN", b'f'),
    kw("ATAN", b'f'),
    kw("ATAN2", b'f'),
    kw("AVG", b'f'),
    kw("BEFORE", b'k'),
    kw("BEGIN", b'T'),
    kw("BENCHMARK", b'f'),
    kw("BETWEEN", b'o'),
    kw("BIGINT", b't'),
    kw("BIN", b'f'),
    kw("BINARY", b't'),
    kw("BIT_AND", b'f'),
    kw("BIT_COUNT", b'f'),
    kw("BIT_LENGTH", b'f'),
    kw("BIT_OR", b'f'),
    kw("BIT_XOR", b'f'),
    kw("BLOB", b't'),
    kw("BOOLEAN", b't'),
    kw("BULK", b'T'),
    kw("CALL", b'k'),
    kw("CASCADE", b'k'),
    kw("CASE", b'E'),
    kw("CAST", b'f'),
    kw("CEIL", b'f'),
    kw("CEILING", b'f'),
    kw("CHANGE", b'k'),
    kw("CHAR", b'f'),
    kw("CHARACTER", b't'),
    kw("CHARACTER_LENGTH", b'f'),
    kw("CHARINDEX", b'f'),
    kw("CHARSET", b'f'),
    kw("CHAR_LENGTH", b'f'),
    kw("CHECK", b'k'),
    kw("CHR", b'f'),
    kw("COALESCE", b'f'),
    kw("COERCIBILITY", b'f'),
    kw("COLLATE", b'A'),
    kw("COLLATION", b'f'),
    kw("COLUMN", b'k'),
    kw("COMMIT", b'k'),
    kw("COMPRESS", b'f'),
    kw("CONCAT", b'f'),
    kw("CONCAT_WS", b'f'),
    kw("CONNECTION_ID", b'f'),
    kw("CONSTRAINT", b'k'),
    kw("CONTINUE", b'k'),
    kw("CONV", b'f'),
    kw("CONVERT", b'f'),
    kw("COS", b'f'),
    kw("COT", b'f'),
    kw("COUNT", b'f'),
    kw("CRC32", b'f'),
    kw("CREATE", b'k'),
    kw("CROSS", b'k'),
    kw("CROSS JOIN", b'k'),
    kw("CURDATE", b'f'),
    kw("CURSOR", b'k'),
    kw("CURTIME", b'f'),
    kw("DATALENGTH", b'f'),
    kw("DATE", b'f'),
    kw("DATEDIFF", b'f'),
    kw("DATETIME", b't'),
    kw("DATE_ADD", b'f'),
    kw("DATE_FORMAT", b'f'),
    kw("DATE_SUB", b'f'),
    kw("DAY", b'f'),
    kw("DAYNAME", b'f'),
    kw("DAYOFMONTH", b'f'),
    kw("DAYOFWEEK", b'f'),
    kw("DAYOFYEAR", b'f'),
    kw("DBCC", b'T'),
    kw("DB_NAME", b'f'),
    kw("DEC", b't'),
    kw("DECIMAL", b't'),
    kw("DECLARE", b'T'),
    kw("DECODE", b'f'),
    kw("DEFAULT", b'k'),
    kw("DEGREES", b'f'),
    kw("DELETE", b'k'),
    kw("DENY", b'T'),
    kw("DESC", b'k'),
    kw("DESCRIBE", b'k'),
    kw("DES_DECRYPT", b'f'),
    kw("DES_ENCRYPT", b'f'),
    kw("DISTINCT", b'k'),
    kw("DISTINCTROW", b'k'),
    kw("DIV", b'o'),
    kw("DO", b'k'),
    kw("DOUBLE", b't'),
    kw("DROP", b'k'),
    kw("EACH", b'k'),
    kw("ELSE", b'k'),
    kw("ELT", b'f'),
    kw("ENCODE", b'f'),
    kw("ENCRYPT", b'f'),
    kw("END", b'k'),
    kw("ESCAPE", b'k'),
    kw("EXCEPT", b'U'),
    kw("EXEC", b'T'),
    kw("EXECUTE", b'T'),
    kw("EXISTS", b'k'),
    kw("EXP", b'f'),
    kw("EXPLAIN", b'k'),
    kw("EXPORT_SET", b'f'),
    kw("EXTRACT", b'f'),
    kw("EXTRACTVALUE", b'f'),
    kw("FALSE", b'1'),
    kw("FETCH", b'k'),
    kw("FIELD", b'f'),
    kw("FIND_IN_SET", b'f'),
    kw("FLOAT", b't'),
    kw("FLOOR", b'f'),
    kw("FOR", b'k'),
    kw("FORCE", b'k'),
    kw("FOREIGN", b'k'),
    kw("FORMAT", b'f'),
    kw("FOUND_ROWS", b'f'),
    kw("FROM", b'k'),
    kw("FROM_DAYS", b'f'),
    kw("FROM_UNIXTIME", b'f'),
    kw("FULL", b'k'),
    kw("GET_FORMAT", b'f'),
    kw("GET_LOCK", b'f'),
    kw("GOTO", b'T'),
    kw("GRANT", b'k'),
    kw("GREATEST", b'f'),
    kw("GROUP BY", b'B'),
    kw("GROUP_CONCAT", b'f'),
    kw("HANDLER", b'k'),
    kw("HAVING", b'k'),
    kw("HEX", b'f'),
    kw("HIGH_PRIORITY", b'k'),
    kw("HOST_NAME", b'f'),
    kw("HOUR", b'f'),
    kw("IF", b'f'),
    kw("IFNULL", b'f'),
    kw("IGNORE", b'k'),
    kw("IN", b'k'),
    kw("INDEX", b'k'),
    kw("INET_ATON", b'f'),
    kw("INET_NTOA", b'f'),
    kw("INFILE", b'k'),
    kw("INITCAP", b'f'),
    kw("INNER", b'k'),
    kw("INNER JOIN", b'k'),
    kw("INSERT", b'k'),
    kw("INSERT INTO", b'k'),
    kw("INSTR", b'f'),
    kw("INT", b't'),
    kw("INTEGER", b't'),
    kw("INTERSECT", b'U'),
    kw("INTO", b'k'),
    kw("INTO DUMPFILE", b'k'),
    kw("INTO OUTFILE", b'k'),
    kw("IS", b'o'),
    kw("IS NOT", b'o'),
    kw("ISNULL", b'f'),
    kw("ITERATE", b'k'),
    kw("JOIN", b'k'),
    kw("KEY", b'k'),
    kw("KEYS", b'k'),
    kw("KILL", b'T'),
    kw("LAST_INSERT_ID", b'f'),
    kw("LCASE", b'f'),
    kw("LEAST", b'f'),
    kw("LEAVE", b'k'),
    kw("LEFT", b'f'),
    kw("LEFT JOIN", b'k'),
    kw("LENGTH", b'f'),
    kw("LIKE", b'o'),
    kw("LIMIT", b'k'),
    kw("LN", b'f'),
    kw("LOAD", b'k'),
    kw("LOAD DATA", b'k'),
    kw("LOAD_FILE", b'f'),
    kw("LOCATE", b'f'),
    kw("LOCK", b'k'),
    kw("LOG", b'f'),
    kw("LOG10", b'f'),
    kw("LOG2", b'f'),
    kw("LONGBLOB", b't'),
    kw("LONGTEXT", b't'),
    kw("LOOP", b'k'),
    kw("LOWER", b'f'),
    kw("LOW_PRIORITY", b'k'),
    kw("LPAD", b'f'),
    kw("LTRIM", b'f'),
    kw("MAKEDATE", b'f'),
    kw("MAKETIME", b'f'),
    kw("MAKE_SET", b'f'),
    kw("MATCH", b'k'),
    kw("MAX", b'f'),
    kw("MD5", b'f'),
    kw("MEDIUMBLOB", b't'),
    kw("MEDIUMINT", b't'),
    kw("MEDIUMTEXT", b't'),
    kw("MICROSECOND", b'f'),
    kw("MID", b'f'),
    kw("MIN", b'f'),
    kw("MINUS", b'U'),
    kw("MINUTE", b'f'),
    kw("MOD", b'o'),
    kw("MONTH", b'f'),
    kw("MONTHNAME", b'f'),
    kw("NAME_CONST", b'f'),
    kw("NATURAL", b'k'),
    kw("NATURAL JOIN", b'k'),
    kw("NOT", b'o'),
    kw("NOT BETWEEN", b'o'),
    kw("NOT EXISTS", b'k'),
    kw("NOT IN", b'k'),
    kw("NOT LIKE", b'o'),
    kw("NOT REGEXP", b'o'),
    kw("NOT RLIKE", b'o'),
    kw("NOT SIMILAR TO", b'o'),
    kw("NOW", b'f'),
    kw("NULL", b'1'),
    kw("NULLIF", b'f'),
    kw("NUMERIC", b't'),
    kw("NVARCHAR", b't'),
    kw("NVL", b'f'),
    kw("NVL2", b'f'),
    kw("OBJECT_ID", b'f'),
    kw("OCT", b'f'),
    kw("OCTET_LENGTH", b'f'),
    kw("OFFSET", b'k'),
    kw("ON", b'k'),
    kw("OPENDATASOURCE", b'T'),
    kw("OPENQUERY", b'T'),
    kw("OPENROWSET", b'T'),
    kw("OPTIMIZE", b'k'),
    kw("OPTION", b'k'),
    kw("OR", b'&'),
    kw("ORD", b'f'),
    kw("ORDER BY", b'B'),
    kw("OUT", b'k'),
    kw("OUTER", b'k'),
    kw("OUTER JOIN", b'k'),
    kw("OUTFILE", b'k'),
    kw("PATINDEX", b'f'),
    kw("PERIOD_ADD", b'f'),
    kw("PERIOD_DIFF", b'f'),
    kw("PG_SLEEP", b'f'),
    kw("PI", b'f'),
    kw("POSITION", b'f'),
    kw("POW", b'f'),
    kw("POWER", b'f'),
    kw("PRECISION", b't'),
    kw("PRIMARY", b'k'),
    kw("PRINT", b'T'),
    kw("PROCEDURE", b'k'),
    kw("PURGE", b'k'),
    kw("QUARTER", b'f'),
    kw("QUOTE", b'f'),
    kw("RADIANS", b'f'),
    kw("RAND", b'f'),
    kw("READ", b'k'),
    kw("REAL", b't'),
    kw("REFERENCES", b'k'),
    kw("REGEXP", b'o'),
    kw("RELEASE_LOCK", b'f'),
    kw("RENAME", b'k'),
    kw("REPAIR", b'k'),
    kw("REPEAT", b'f'),
    kw("REPLACE", b'f'),
    kw("REPLICATE", b'f'),
    kw("REQUIRE", b'k'),
    kw("RESTRICT", b'k'),
    kw("REVERSE", b'f'),
    kw("REVOKE", b'k'),
    kw("RIGHT", b'f'),
    kw("RIGHT JOIN", b'k'),
    kw("RLIKE", b'o'),
    kw("ROLLBACK", b'k'),
    kw("ROUND", b'f'),
    kw("ROW", b'k'),
    kw("ROW_COUNT", b'f'),
    kw("RPAD", b'f'),
    kw("RTRIM", b'f'),
    kw("SECOND", b'f'),
    kw("SEC_TO_TIME", b'f'),
    kw("SELECT", b'E'),
    kw("SERIAL", b't'),
    kw("SET", b'k'),
    kw("SHA", b'f'),
    kw("SHA1", b'f'),
    kw("SHA2", b'f'),
    kw("SHOW", b'k'),
    kw("SHUTDOWN", b'T'),
    kw("SIGN", b'f'),
    kw("SIGNED", b't'),
    kw("SIMILAR TO", b'o'),
    kw("SIN", b'f'),
    kw("SLEEP", b'f'),
    kw("SMALLINT", b't'),
    kw("SOME", b'k'),
    kw("SOUNDEX", b'f'),
    kw("SOUNDS LIKE", b'o'),
    kw("SPACE", b'f'),
    kw("SQRT", b'f'),
    kw("STD", b'f'),
    kw("STDDEV", b'f'),
    kw("STR", b'f'),
    kw("STRAIGHT_JOIN", b'k'),
    kw("STRCMP", b'f'),
    kw("STR_TO_DATE", b'f'),
    kw("STUFF", b'f'),
    kw("SUBDATE", b'f'),
    kw("SUBSTR", b'f'),
    kw("SUBSTRING", b'f'),
    kw("SUBSTRING_INDEX", b'f'),
    kw("SUBTIME", b'f'),
    kw("SUM", b'f'),
    kw("SYSDATE", b'f'),
    kw("SYS_CONTEXT", b'f'),
    kw("TABLE", b'k'),
    kw("TAN", b'f'),
    kw("THEN", b'k'),
    kw("TIME", b'f'),
    kw("TIMEDIFF", b'f'),
    kw("TIMESTAMP", b'f'),
    kw("TIMESTAMPADD", b'f'),
    kw("TIMESTAMPDIFF", b'f'),
    kw("TIME_FORMAT", b'f'),
    kw("TIME_TO_SEC", b'f'),
    kw("TINYBLOB", b't'),
    kw("TINYINT", b't'),
    kw("TINYTEXT", b't'),
    kw("TO", b'k'),
    kw("TOP", b'k'),
    kw("TO_CHAR", b'f'),
    kw("TO_DATE", b'f'),
    kw("TO_DAYS", b'f'),
    kw("TO_NUMBER", b'f'),
    kw("TO_SECONDS", b'f'),
    kw("TRANSLATE", b'f'),
    kw("TRIGGER", b'k'),
    kw("TRIM", b'f'),
    kw("TRUE", b'1'),
    kw("TRUNCATE", b'k'),
    kw("UCASE", b'f'),
    kw("UNCOMPRESS", b'f'),
    kw("UNCOMPRESSED_LENGTH", b'f'),
    kw("UNHEX", b'f'),
    kw("UNION", b'U'),
    kw("UNION ALL", b'U'),
    kw("UNION DISTINCT", b'U'),
    kw("UNIX_TIMESTAMP", b'f'),
    kw("UNLOCK", b'k'),
    kw("UNSIGNED", b't'),
    kw("UPDATE", b'k'),
    kw("UPDATEXML", b'f'),
    kw("UPPER", b'f'),
    kw("USE", b'k'),
    kw("USING", b'k'),
    kw("UTC_DATE", b'f'),
    kw("UTC_TIME", b'f'),
    kw("UTC_TIMESTAMP", b'f'),
    kw("UUID", b'f'),
    kw("VALUES", b'k'),
    kw("VARBINARY", b't'),
    kw("VARCHAR", b't'),
    kw("VERSION", b'f'),
    kw("VIEW", b'k'),
    kw("WAITFOR", b'T'),
    kw("WAITFOR DELAY", b'T'),
    kw("WAITFOR TIME", b'T'),
    kw("WEEK", b'f'),
    kw("WEEKDAY", b'f'),
    kw("WEEKOFYEAR", b'f'),
    kw("WHEN", b'k'),
    kw("WHERE", b'k'),
    kw("WHILE", b'k'),
    kw("WITH", b'k'),
    kw("WRITE", b'k'),
    kw("XOR", b'&'),
    kw("YEAR", b'f'),
    kw("YEARWEEK", b'f'),
    kw("ZEROFILL", b't'),
    kw("^=", b'o'),
    kw("|=", b'o'),
    kw("||", b'&'),
];

/// Case-insensitive comparison of a NUL-free table word against a
/// length-bounded probe. Mirrors the classic `cstrcasecmp(a, b, n)`
/// contract: the table word acts as a C string, the probe as `n` raw
/// bytes, and length differences decide ties.
fn word_cmp(word: &[u8], probe: &[u8]) -> core::cmp::Ordering {
    use core::cmp::Ordering;
    let n = probe.len();
    for i in 0..n {
        let ca = match word.get(i) {
            Some(&c) => c,
            None => return Ordering::Less,
        };
        let mut cb = probe[i];
        if cb.is_ascii_lowercase() {
            cb -= 0x20;
        }
        match ca.cmp(&cb) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    if word.len() == n {
        core::cmp::Ordering::Equal
    } else {
        core::cmp::Ordering::Greater
    }
}

/// Binary search over [`SQL_KEYWORDS`]. Returns the kind byte, or 0 when
/// the probe is not in the table.
pub fn lookup(probe: &[u8]) -> u8 {
    if probe.is_empty() {
        return 0;
    }
    let mut lo = 0usize;
    let mut hi = SQL_KEYWORDS.len() - 1;
    while lo < hi {
        let mid = (lo + hi) >> 1;
        if word_cmp(SQL_KEYWORDS[mid].word.as_bytes(), probe) == core::cmp::Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if word_cmp(SQL_KEYWORDS[lo].word.as_bytes(), probe) == core::cmp::Ordering::Equal {
        SQL_KEYWORDS[lo].kind
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in SQL_KEYWORDS.windows(2) {
            assert!(
                pair[0].word.as_bytes() < pair[1].word.as_bytes(),
                "out of order: {} >= {}",
                pair[0].word,
                pair[1].word
            );
        }
    }

    #[test]
    fn words_resolve_case_insensitively() {
        assert_eq!(lookup(b"select"), b'E');
        assert_eq!(lookup(b"SELECT"), b'E');
        assert_eq!(lookup(b"Union"), b'U');
        assert_eq!(lookup(b"UNION ALL"), b'U');
        assert_eq!(lookup(b"group by"), b'B');
        assert_eq!(lookup(b"collate"), b'A');
        assert_eq!(lookup(b"load_file"), b'f');
        assert_eq!(lookup(b"waitfor"), b'T');
        assert_eq!(lookup(b"varchar"), b't');
        assert_eq!(lookup(b"null"), b'1');
        assert_eq!(lookup(b"||"), b'&');
        assert_eq!(lookup(b"<>"), b'o');
    }

    #[test]
    fn lookup_is_length_strict() {
        assert_eq!(lookup(b"SELEC"), 0);
        assert_eq!(lookup(b"SELECTS"), 0);
        assert_eq!(lookup(b"UNIO"), 0);
        assert_eq!(lookup(b""), 0);
    }

    #[test]
    fn fingerprints_use_their_own_namespace() {
        assert_eq!(lookup(b"0S&SOS"), b'F');
        assert_eq!(lookup(b"0SC"), b'F');
        assert_eq!(lookup(b"01UEOK"), b'F');
        assert_eq!(lookup(b"0X"), b'F');
        // benign shapes never made it into the corpus
        assert_eq!(lookup(b"0NV"), 0);
        assert_eq!(lookup(b"0N"), 0);
        assert_eq!(lookup(b"01"), 0);
        assert_eq!(lookup(b"0NS"), 0);
    }

    #[test]
    fn unknown_words_are_not_keywords() {
        assert_eq!(lookup(b"users"), 0);
        assert_eq!(lookup(b"john.doe"), 0);
        assert_eq!(lookup(b"foobar"), 0);
    }
}
