use criterion::{black_box, criterion_group, criterion_main, Criterion};

use injectscan::{is_sqli, is_xss};

const SQLI_ATTACKS: &[&[u8]] = &[
    b"1' OR '1'='1",
    b"1 UNION SELECT * FROM users",
    b"-1' and 1=1 union/* foo */select load_file('/etc/passwd')--",
    b"'; DROP TABLE users--",
];

const SQLI_BENIGN: &[&[u8]] = &[
    b"john.doe@example.com",
    b"the quick brown fox jumps over the lazy dog",
    b"12345",
    b"O'Brien said hello and 17 other things",
];

const XSS_ATTACKS: &[&[u8]] = &[
    b"<script>alert(1);</script>",
    b"<img src=x onerror=alert(1)>",
    b"<a href=\"&#106;avascript:alert(1)\">x</a>",
    b"onerror=alert(1)>",
];

const XSS_BENIGN: &[&[u8]] = &[
    b"<p>Hello World</p>",
    b"<a href=\"http://example.com\">link</a>",
    b"plain text with no markup at all, just words",
    b"a < b and c > d",
];

fn bench_sqli(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqli");
    group.bench_function("attacks", |b| {
        b.iter(|| {
            for payload in SQLI_ATTACKS {
                black_box(is_sqli(black_box(payload)));
            }
        })
    });
    group.bench_function("benign", |b| {
        b.iter(|| {
            for payload in SQLI_BENIGN {
                black_box(is_sqli(black_box(payload)));
            }
        })
    });
    group.finish();
}

fn bench_xss(c: &mut Criterion) {
    let mut group = c.benchmark_group("xss");
    group.bench_function("attacks", |b| {
        b.iter(|| {
            for payload in XSS_ATTACKS {
                black_box(is_xss(black_box(payload)));
            }
        })
    });
    group.bench_function("benign", |b| {
        b.iter(|| {
            for payload in XSS_BENIGN {
                black_box(is_xss(black_box(payload)));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sqli, bench_xss);
criterion_main!(benches);
