//! Grow a tree on a training set, post prune it against a validation set and
//! report its accuracy on a test set.
//!
//! cargo run --example train_and_prune -- <training.csv> <validation.csv> <test.csv> <L> <K> [tree.txt]
use gainratio::{Dataset, DecisionTree, PruneConfig};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 6 {
        eprintln!(
            "usage: {} <training.csv> <validation.csv> <test.csv> <L> <K> [tree.txt]",
            args[0]
        );
        std::process::exit(2);
    }
    let attempts = args[4].parse::<usize>()?;
    let max_pruned_nodes = args[5].parse::<usize>()?;

    let mut tree = DecisionTree::from_csv(&args[1])?;
    let validation = Dataset::from_csv(&args[2])?;
    let test = Dataset::from_csv(&args[3])?;

    println!("{}", tree);
    println!(
        "Accuracy on test data before pruning = {:.2}%",
        tree.accuracy(&test)? * 100.0
    );

    let config = PruneConfig::new(attempts, max_pruned_nodes);
    let report = tree.prune(&validation, &config)?;
    println!(
        "Pruned {} -> {} nodes, validation accuracy {:.2}% -> {:.2}%",
        report.n_nodes_before,
        report.n_nodes_after,
        report.score_before * 100.0,
        report.score_after * 100.0
    );
    println!(
        "Accuracy on test data after pruning = {:.2}%",
        tree.accuracy(&test)? * 100.0
    );

    if let Some(path) = args.get(6) {
        tree.export_tree(path)?;
        println!("Tree written to {}", path);
    }

    Ok(())
}
