use std::{io::Write, path::Path};

use log::LevelFilter;
use rand::prelude::*;
use sparse_moga::{
  indicator::{hypervolume, pareto_front},
  run,
  Algorithm,
  BitString,
  Config,
  Evaluation,
  EvaluationError,
  Execution,
  Problem,
  Scores,
};

/// A set cover instance: each of the `subsets` covers a few random elements
/// out of `elements`. Minimize the number of chosen subsets and the number of
/// elements left uncovered.
struct Coverage {
  elements: usize,
  subsets: Vec<Vec<usize>>,
}

impl Coverage {
  fn random(elements: usize, subsets: usize, rng: &mut impl Rng) -> Self {
    let subsets = (0..subsets)
      .map(|_| {
        let size = rng.gen_range(1..=4);
        (0..elements).choose_multiple(rng, size)
      })
      .collect();
    Self { elements, subsets }
  }
}

impl Problem<2> for Coverage {
  fn number_of_bits(&self) -> usize {
    self.subsets.len()
  }

  fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
    let mut covered = vec![false; self.elements];
    for i in bits.ones() {
      for &e in &self.subsets[i] {
        covered[e] = true;
      }
    }
    let uncovered = covered.iter().filter(|c| !**c).count();
    Ok(Evaluation::new([bits.count_ones() as f64, uncovered as f64]))
  }
}

fn main() -> sparse_moga::Result<()> {
  env_logger::builder().filter_level(LevelFilter::Info).init();

  // 500 candidate subsets over 60 elements; good covers pick only a few
  let problem = Coverage::random(60, 500, &mut StdRng::seed_from_u64(0));

  let config = Config::builder()
    .population_size(100)
    .max_evaluations(20_000)
    .execution(Execution::ParallelBatch)
    .seed(1)
    .build();
  let outcome = run(&problem, Algorithm::SparseEa, config)?;

  let front: Vec<Scores<2>> = pareto_front(&outcome.population)?
    .iter()
    .map(|c| *c.scores())
    .collect();
  let reference = [problem.number_of_bits() as f64, problem.elements as f64];
  println!(
    "{} generations, {} non-dominated covers, hypervolume {:.1}",
    outcome.generations,
    front.len(),
    hypervolume(&front, &reference)
  );

  // write the front to demos/sparse_ea/coverage.csv
  let _ = std::fs::File::create(Path::new(file!()).with_file_name("coverage.csv"))
    .and_then(|mut f| {
      f.write_all(
        front
          .iter()
          .map(|[subsets, uncovered]| format!("{subsets} {uncovered}"))
          .collect::<Vec<_>>()
          .join("\n")
          .as_bytes(),
      )
    });

  println!(" subsets | uncovered ");
  let mut sorted = front;
  sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));
  for [subsets, uncovered] in sorted.into_iter().take(10) {
    println!("{subsets:8} | {uncovered:9}");
  }
  println!("   ...   |    ...    ");
  Ok(())
}
