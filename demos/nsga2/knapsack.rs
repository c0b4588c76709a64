use log::LevelFilter;
use rand::prelude::*;
use sparse_moga::{
  indicator::{bounds, hypervolume, normalize, pareto_front},
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

/// Bi-objective 0/1 knapsack: minimize weight, maximize value, never exceed
/// the capacity.
struct Knapsack {
  weights: Vec<f64>,
  values: Vec<f64>,
  capacity: f64,
}

impl Knapsack {
  fn weight(&self, bits: &BitString) -> f64 {
    bits.ones().map(|i| self.weights[i]).sum()
  }
}

impl Problem<2> for Knapsack {
  fn number_of_bits(&self) -> usize {
    self.weights.len()
  }

  fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
    let weight = self.weight(bits);
    let value: f64 = bits.ones().map(|i| self.values[i]).sum();
    Ok(Evaluation::with_constraints(
      [weight, -value],
      &[weight - self.capacity],
    ))
  }

  // greedy repair: drop the items with the worst value per weight until the
  // selection fits
  fn repair(&self, bits: &mut BitString) {
    let mut chosen: Vec<usize> = bits.ones().collect();
    chosen.sort_by(|&a, &b| {
      (self.values[b] / self.weights[b]).total_cmp(&(self.values[a] / self.weights[a]))
    });
    let mut weight = self.weight(bits);
    while weight > self.capacity {
      let Some(worst) = chosen.pop() else {
        break;
      };
      bits.set(worst, false);
      weight -= self.weights[worst];
    }
  }
}

fn main() -> sparse_moga::Result<()> {
  env_logger::builder().filter_level(LevelFilter::Info).init();

  let mut rng = StdRng::seed_from_u64(0);
  let items = 250;
  let weights: Vec<f64> = (0..items).map(|_| rng.gen_range(10.0..100.0)).collect();
  let values: Vec<f64> = (0..items).map(|_| rng.gen_range(10.0..100.0)).collect();
  let capacity = weights.iter().sum::<f64>() / 2.0;
  let problem = Knapsack {
    weights,
    values,
    capacity,
  };

  // both variants are compared on the same normalized scale
  let mut fronts = Vec::new();
  for algorithm in [Algorithm::Nsga2, Algorithm::HybridNsga2] {
    let config = Config::builder()
      .population_size(100)
      .max_evaluations(25_000)
      .execution(Execution::ParallelEach)
      .seed(2)
      .build();
    let outcome = run(&problem, algorithm, config)?;
    let front: Vec<Scores<2>> = pareto_front(&outcome.population)?
      .iter()
      .filter(|c| c.is_feasible())
      .map(|c| *c.scores())
      .collect();
    fronts.push((algorithm, front));
  }

  let everything: Vec<Scores<2>> =
    fronts.iter().flat_map(|(_, f)| f.iter().copied()).collect();
  let Some((min, max)) = bounds(&everything) else {
    println!("no feasible selection found");
    return Ok(());
  };

  println!(" algorithm   | front | hypervolume ");
  for (algorithm, front) in &fronts {
    let normalized = normalize(front, &min, &max);
    let hv = hypervolume(&normalized, &[1.1, 1.1]);
    println!("{:12} | {:5} | {hv:.4}", format!("{algorithm:?}"), front.len());
  }
  Ok(())
}
