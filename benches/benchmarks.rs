use criterion::*;


criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = insert_benchmark::insert_benchmark, render_benchmark::render_benchmark
}

criterion_main!(benches);
