use criterion::{criterion_group, criterion_main, Criterion};
use leaflet_geojson::{Feature, FeatureCollection, ToJson};

fn build_collection(size: usize) -> FeatureCollection {
    let mut collection = FeatureCollection::new();
    for i in 0..size {
        let x = (i % 360) as f64 - 180.0;
        let y = (i % 180) as f64 - 90.0;
        collection.push(Feature::point(x, y));
        let outline = vec![(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0)];
        collection.push(Feature::polygons(&[outline]).remove(0));
    }
    collection
}

pub fn serialize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    group.sample_size(10);
    let collection = build_collection(1_000);
    group.bench_function("to_json", |b| b.iter(|| collection.to_json()));
    group.finish();
}

pub fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    group.sample_size(10);
    let text = build_collection(1_000).to_string();
    group.bench_function("parse", |b| {
        b.iter(|| text.parse::<FeatureCollection>().unwrap())
    });
    group.finish();
}

criterion_group!(benches, serialize_bench, parse_bench);
criterion_main!(benches);
