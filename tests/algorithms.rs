use sparse_moga::{
  indicator::pareto_front,
  run,
  Algorithm,
  BitString,
  Config,
  Error,
  Evaluation,
  EvaluationError,
  Execution,
  Problem,
};

/// Picks items, minimizing their total weight and maximizing their total
/// value. Selections above the capacity violate the only constraint.
struct Knapsack {
  weights: Vec<f64>,
  values: Vec<f64>,
  capacity: f64,
}

impl Knapsack {
  fn new(items: usize) -> Self {
    Self {
      weights: (0..items).map(|i| (i % 5 + 1) as f64).collect(),
      values: (0..items).map(|i| (i % 7 + 1) as f64).collect(),
      capacity: 10.0,
    }
  }

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

  fn repair(&self, bits: &mut BitString) {
    // drop the last items until the selection fits
    while self.weight(bits) > self.capacity {
      let Some(last) = bits.ones().last() else {
        break;
      };
      bits.set(last, false);
    }
  }
}

/// Fails on every encoding with more than one bit set.
struct Fragile(usize);

impl Problem<2> for Fragile {
  fn number_of_bits(&self) -> usize {
    self.0
  }

  fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
    match bits.count_ones() {
      0 | 1 => Ok(Evaluation::new([0.0, 1.0])),
      n => Err(EvaluationError::new(format!("{n} bits set"))),
    }
  }
}

/// Declares the wrong number of objectives.
struct Liar;

impl Problem<2> for Liar {
  fn number_of_bits(&self) -> usize {
    4
  }

  fn number_of_objectives(&self) -> usize {
    3
  }

  fn evaluate(&self, _: &BitString) -> Result<Evaluation<2>, EvaluationError> {
    Ok(Evaluation::new([0.0, 0.0]))
  }
}

/// Produces NaN for every encoding.
struct Undefined;

impl Problem<2> for Undefined {
  fn number_of_bits(&self) -> usize {
    4
  }

  fn evaluate(&self, _: &BitString) -> Result<Evaluation<2>, EvaluationError> {
    Ok(Evaluation::new([f64::NAN, 0.0]))
  }
}

const ALGORITHMS: [Algorithm; 4] = [
  Algorithm::Nsga2,
  Algorithm::HybridNsga2,
  Algorithm::SparseEa,
  Algorithm::HybridSparseEa,
];

fn config(max_evaluations: usize) -> Config {
  Config::builder()
    .population_size(20)
    .max_evaluations(max_evaluations)
    .seed(11)
    .build()
}

#[test]
fn test_every_algorithm_spends_the_budget() {
  let problem = Knapsack::new(30);
  for algorithm in ALGORITHMS {
    let outcome = run(&problem, algorithm, config(1_000)).unwrap();
    assert_eq!(outcome.evaluations, 1_000, "{algorithm:?}");
    assert_eq!(outcome.population.len(), 20, "{algorithm:?}");
    assert!(outcome.generations > 0, "{algorithm:?}");
    assert!(outcome
      .population
      .iter()
      .all(|c| c.bits().len() == 30 && c.scores().iter().all(|s| s.is_finite())));
  }
}

#[test]
fn test_hybrid_population_is_feasible() {
  let problem = Knapsack::new(30);
  for algorithm in [Algorithm::HybridNsga2, Algorithm::HybridSparseEa] {
    let outcome = run(&problem, algorithm, config(1_000)).unwrap();
    assert!(
      outcome.population.iter().all(|c| c.is_feasible()),
      "{algorithm:?}"
    );
    let front = pareto_front(&outcome.population).unwrap();
    assert!(!front.is_empty());
    assert!(front.iter().all(|c| problem.weight(c.bits()) <= problem.capacity));
  }
}

#[test]
fn test_seeded_runs_ignore_execution_strategy() {
  let problem = Knapsack::new(24);
  for algorithm in ALGORITHMS {
    let runs: Vec<_> = [
      Execution::Sequential,
      Execution::ParallelEach,
      Execution::ParallelBatch,
    ]
    .into_iter()
    .map(|execution| {
      let config = Config {
        execution,
        ..config(600)
      };
      let outcome = run(&problem, algorithm, config).unwrap();
      outcome
        .population
        .into_iter()
        .map(|c| c.into_bits())
        .collect::<Vec<_>>()
    })
    .collect();
    assert_eq!(runs[0], runs[1], "{algorithm:?}");
    assert_eq!(runs[0], runs[2], "{algorithm:?}");
  }
}

#[test]
fn test_evaluation_failure_aborts_the_run() {
  for algorithm in ALGORITHMS {
    let result = run(&Fragile(16), algorithm, config(500));
    match result {
      Err(Error::Evaluation(e)) => assert!(e.message().ends_with("bits set")),
      other => panic!("{algorithm:?}: unexpected {other:?}"),
    }
  }
}

#[test]
fn test_wrong_objective_count_is_rejected() {
  for algorithm in ALGORITHMS {
    let result = run(&Liar, algorithm, config(500));
    assert!(
      matches!(result, Err(Error::ObjectiveCount { expected: 2, got: 3 })),
      "{algorithm:?}"
    );
  }
}

#[test]
fn test_nan_objectives_are_rejected() {
  for algorithm in ALGORITHMS {
    let result = run(&Undefined, algorithm, config(500));
    assert!(
      matches!(result, Err(Error::InvalidObjective { .. })),
      "{algorithm:?}"
    );
  }
}
