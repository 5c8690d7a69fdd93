use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uri_parts::{build, parse};
use url::Url;

criterion_group!(benches, bench_parse, bench_parse_ip, bench_build, bench_parse_url);
criterion_main!(benches);

const SAMPLE: &str = "https://user@example.com:8042/over/there?name=ferret#nose";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            let _ = black_box(parse(black_box(SAMPLE)));
        })
    });
}

fn bench_parse_ip(c: &mut Criterion) {
    c.bench_function("parse_ip", |b| {
        b.iter(|| {
            let s = "ldap://[2001:db8:122:c000:2:2100:192.0.2.33]:389/c=GB?objectClass?one";
            let _ = black_box(parse(black_box(s)));
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let parts = parse(SAMPLE).unwrap();
    c.bench_function("build", |b| {
        b.iter(|| {
            let _ = black_box(build(black_box(&parts)));
        })
    });
}

fn bench_parse_url(c: &mut Criterion) {
    c.bench_function("parse_url", |b| {
        b.iter(|| {
            let _ = black_box(Url::parse(black_box(SAMPLE)));
        })
    });
}
