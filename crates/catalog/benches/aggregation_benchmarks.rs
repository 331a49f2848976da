//! Aggregation benchmarks over a synthetic catalog.
//!
//! Run with: `cargo bench -p sportcat-catalog`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sportcat_catalog::Catalog;

const ACTIVITIES: [&str; 4] = ["Climbing", "Hiking", "Running", "Skiing"];
const CATEGORIES: [&str; 3] = ["Apparel", "Footwear", "Hardware"];

fn synthetic_catalog(products: usize, ratings_per_product: usize) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.define_activities(ACTIVITIES).unwrap();
    for category in CATEGORIES {
        catalog.add_category(category, ACTIVITIES).unwrap();
    }

    for i in 0..products {
        let name = format!("product-{i:05}");
        catalog
            .add_product(&name, ACTIVITIES[i % ACTIVITIES.len()], CATEGORIES[i % CATEGORIES.len()])
            .unwrap();
        for r in 0..ratings_per_product {
            let stars = ((i + r) % 6) as i32;
            catalog.add_rating(&name, "bench", stars, "synthetic").unwrap();
        }
    }
    catalog
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for products in [100, 1_000, 10_000] {
        let catalog = synthetic_catalog(products, 5);

        group.bench_with_input(BenchmarkId::new("overall", products), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.average_stars_overall()))
        });
        group.bench_with_input(BenchmarkId::new("per_activity", products), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.average_stars_per_activity()))
        });
        group.bench_with_input(BenchmarkId::new("grouped", products), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog.products_grouped_by_average_stars()))
        });
    }

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000, 20);

    c.bench_function("products_by_activity_and_categories", |b| {
        b.iter(|| black_box(catalog.products("Skiing", &["Apparel", "Hardware"])))
    });
    c.bench_function("ratings_for_product", |b| {
        b.iter(|| black_box(catalog.ratings_for_product("product-00042")))
    });
}

criterion_group!(benches, bench_aggregations, bench_listing);
criterion_main!(benches);
