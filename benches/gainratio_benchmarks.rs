use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gainratio::grower::Id3Grower;
use gainratio::metric::accuracy;
use gainratio::statistics::{entropy, gain_ratio};
use gainratio::{Dataset, DecisionTree, PruneConfig};
use std::time::Duration;

pub fn tree_benchmarks(c: &mut Criterion) {
    let data = Dataset::from_csv("resources/training_set.csv").expect("Something went wrong reading the file");
    let validation = Dataset::from_csv("resources/validation_set.csv").expect("Something went wrong reading the file");
    let examples = data.examples();
    let labels = data.labels().to_vec();
    let e = entropy(&labels);

    c.bench_function("entropy", |b| b.iter(|| entropy(black_box(&labels))));
    c.bench_function("gain_ratio", |b| {
        b.iter(|| gain_ratio(black_box(&data), black_box(&examples), black_box(&labels), black_box(e), black_box(3)))
    });

    let mut tree_train = c.benchmark_group("tree_train");
    tree_train.sample_size(50);
    tree_train.measurement_time(Duration::from_secs(10));
    tree_train.bench_function("grow_tree", |b| b.iter(|| Id3Grower::new(black_box(&data)).grow_all()));

    let tree = DecisionTree::fit(data.clone());
    tree_train.bench_function("prune_tree", |b| {
        b.iter(|| {
            let mut candidate = tree.clone();
            candidate
                .prune(black_box(&validation), black_box(&PruneConfig::new(20, 5)))
                .unwrap()
        })
    });
    tree_train.finish();

    c.bench_function("accuracy", |b| b.iter(|| accuracy(black_box(tree.root()), black_box(&validation))));
    c.bench_function("render", |b| b.iter(|| black_box(&tree).to_text()));
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);
