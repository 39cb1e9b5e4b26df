use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ds_core::{resolve, Ruleset, RulesetData, StatusQuery};

fn bench_ruleset() -> Ruleset {
    let json = r#"{
        "status": {
            "com": {
                "*": 1,
                "example": {"": 2, "/watch": 2, "*": 1},
                "blocked": 1
            },
            "org": {
                "example": {"*": 2}
            }
        },
        "author": ["example.com"],
        "video": ["example.com"]
    }"#;
    serde_json::from_str::<RulesetData>(json).unwrap().into()
}

fn bench_resolve(c: &mut Criterion) {
    let rules = bench_ruleset();

    c.bench_function("resolve_domain_exact", |b| {
        b.iter(|| resolve(&rules, StatusQuery::domain(black_box("example.com"))))
    });

    c.bench_function("resolve_url_path", |b| {
        b.iter(|| {
            resolve(
                &rules,
                StatusQuery::url(black_box("https://example.com/watch?v=abc")),
            )
        })
    });

    c.bench_function("resolve_deep_subdomain_wildcard", |b| {
        b.iter(|| resolve(&rules, StatusQuery::domain(black_box("a.b.c.example.org"))))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| resolve(&rules, StatusQuery::domain(black_box("unmatched.net"))))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
