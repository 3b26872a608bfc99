use float_pretty_print::PrettyPrintFloat;
use rand::prelude::*;

pub mod rank;

use rank::{DependencyEvaluator, RankError, VectorSet};

fn print_vectors(vectors: &VectorSet) {
    for row in vectors.vectors() {
        let entries = row
            .iter()
            .map(|&x| format!("{:.4}", PrettyPrintFloat(x)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  [{entries}]");
    }
}

fn main() -> Result<(), RankError> {
    env_logger::init();

    let mut evaluator = DependencyEvaluator::new();

    // Classic dependent set: third row = 2 * second - first.
    println!("Checking 3 vectors in 3D:");
    let vectors = VectorSet::new(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    print_vectors(&vectors);
    evaluator.evaluate(&vectors)?;
    println!("\n{}\n", evaluator.summarize());

    // A random 3x3 matrix is non-singular with probability 1.
    println!("Checking 3 random vectors in 3D:");
    let mut rng = thread_rng();
    let random = VectorSet::new(
        (0..3)
            .map(|_| (0..3).map(|_| rng.gen::<f64>()).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    )?;
    print_vectors(&random);
    evaluator.evaluate(&random)?;
    println!("\n{}", evaluator.summarize());

    Ok(())
}
