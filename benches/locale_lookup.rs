// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::config::Config;
use iced_folio::i18n::fluent::I18n;
use std::hint::black_box;

fn locale_lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("locale_lookup");

    group.bench_function("build_catalogs", |b| {
        b.iter(|| {
            let _ = black_box(I18n::new(Some("en".to_string()), &Config::default()));
        });
    });

    let i18n = I18n::new(Some("lo".to_string()), &Config::default());
    group.bench_function("tr_page_keys", |b| {
        b.iter(|| {
            for key in ["window-title", "nav-home", "hero-subtitle", "form-submit"] {
                let _ = black_box(i18n.tr(key));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, locale_lookup_benchmark);
criterion_main!(benches);
