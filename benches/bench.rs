// Criterion benchmarks for Lume Search Filters

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lume_search_filters::core::{query::QueryState, FilterFormSync};
use lume_search_filters::models::{FilterOptions, FilterSelection};
use lume_search_filters::services::MemoryHistory;

fn create_options(size: usize) -> FilterOptions {
    FilterOptions::new(
        (0..size).map(|i| format!("City {}", i)).collect(),
        (0..size).map(|i| format!("Company {}", i)).collect(),
        (0..size).map(|i| format!("School {}", i)).collect(),
    )
}

fn create_selection(size: usize) -> FilterSelection {
    FilterSelection {
        hometown: Some(format!("City {}", size - 1)),
        work: Some(format!("Company {}", size / 2)),
        education: Some(format!("School {}", size / 3)),
        gender: Some("Female".to_string()),
        relationship_status: Some("Single".to_string()),
    }
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [10, 100, 1000].iter() {
        let sync = FilterFormSync::new(create_options(*size));
        let selection = create_selection(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| sync.validate(black_box(&selection)))
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let sync = FilterFormSync::new(create_options(100));
    let selection = create_selection(100);

    c.bench_function("apply", |b| {
        b.iter(|| {
            let mut history = MemoryHistory::new("/search/?search=software+engineer");
            sync.apply(black_box(&selection), &mut history)
        })
    });
}

fn bench_parse_query(c: &mut Criterion) {
    let query = "?search=software+engineer&hometown=New+York&work=Acme+Corp&education=MIT&gender=Male&relationship_status=Single";

    c.bench_function("parse_query", |b| {
        b.iter(|| QueryState::parse(black_box(query)))
    });
}

criterion_group!(benches, bench_validate, bench_apply, bench_parse_query);
criterion_main!(benches);
