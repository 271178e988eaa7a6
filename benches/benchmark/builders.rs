use crate::common::configure_criterion;
use criterion::{criterion_group, Criterion};
use error_tree::{join, tag, Error};
use std::hint::black_box;

/// Construction cost, dominated by stack capture for `new` and `wrap`.
pub fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("builders/construction");

    group.bench_function("new", |b| b.iter(|| black_box(Error::new("boom"))));

    group.bench_function("with_message", |b| {
        let base = Error::new("boom");
        b.iter(|| black_box(base.clone().with_message("context")))
    });

    group.bench_function("wrap", |b| {
        let base = Error::new("boom");
        b.iter(|| black_box(base.clone().wrap("context")))
    });

    group.bench_function("annotate", |b| {
        let base = Error::new("boom");
        b.iter(|| {
            black_box(
                base.clone()
                    .with_types(["Temporary", "Timeout"])
                    .with_tags([tag("operation", "seek"), tag("env", "production")]),
            )
        })
    });

    group.bench_function("join_3", |b| {
        let errs = [Error::new("A"), Error::new("B"), Error::new("C")];
        b.iter(|| black_box(join(errs.iter().cloned())))
    });

    group.bench_function("adapt_foreign", |b| {
        b.iter(|| black_box(Error::from(std::fmt::Error).with_message("formatting")))
    });

    group.finish();
}

criterion_group! {
    name = builder_benches;
    config = configure_criterion();
    targets = bench_construction
}
