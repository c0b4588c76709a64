//! **sparse-moga** is a multi-objective evolutionary search engine for
//! problems over bit strings. Given a black-box [`Problem`] that scores an
//! encoding on several objectives, it searches for a diverse set of Pareto
//! optimal encodings under a fixed evaluation budget.
//!
//! Here's a [quick start example](#example) for the impatient.
//!
//! # Optimizers
//!
//! **Optimizer** is an abstraction represented in this crate with the
//! [`Optimizer`] trait. An optimizer consumes a problem and a [`Config`], runs
//! a generational loop until the evaluation budget is spent and returns the
//! last population in an [`Outcome`]. The crate features:
//! - [NSGA-II] ([`Nsga2`]), optionally *hybrid*: with [`Config::repair`] set,
//!   the problem's [`repair`](Problem::repair) hook runs on every encoding
//!   right before it is evaluated
//! - [SparseEA] ([`SparseEa`]), built for large problems whose good solutions
//!   have only a few bits set, with the same optional repair hook
//!
//! The [`run`] function picks one of them by [`Algorithm`] and builds it with
//! default operators.
//!
//! # Building blocks
//!
//! Every loop is assembled from the same machinery, and each piece is public:
//! - [`dominance`] - Pareto dominance with constraint handling
//! - [`ranking`] - fast non-dominated sorting into fronts
//! - [`crowding`] - crowding distance within a front
//! - [`fitness`] - rank and crowding distance of every candidate
//! - [`selection`] - binary tournament and mating pools
//! - [`crossover`] and [`mutation`] - variation of bit strings
//! - [`truncation`] - environmental selection by rank and crowding
//! - [`indicator`] - Pareto front extraction and the hypervolume
//!
//! # Closures
//!
//! [`Crossover`](crossover::Crossover), [`Mutation`](mutation::Mutation) and
//! [`Selection`](selection::Selection) are implemented by closures of the
//! matching signature, so custom operators rarely need a type of their own.
//! Plug them into an optimizer through its builder:
//! ```
//! # use sparse_moga::{BitString, Candidate, Config, Fitness, Nsga2, Optimizer, Problem, Evaluation, EvaluationError};
//! # use rand::RngCore;
//! # struct Ones;
//! # impl Problem<2> for Ones {
//! #   fn number_of_bits(&self) -> usize { 4 }
//! #   fn evaluate(&self, b: &BitString) -> Result<Evaluation<2>, EvaluationError> {
//! #     let ones = b.count_ones() as f64;
//! #     Ok(Evaluation::new([ones, 4.0 - ones]))
//! #   }
//! # }
//! let outcome = Nsga2::builder()
//!   .problem(&Ones)
//!   .config(Config::builder().population_size(4).max_evaluations(20).build())
//!   // parents are copied unchanged
//!   .crossover(|a: &BitString, b: &BitString, _: &mut dyn RngCore| {
//!     (a.clone(), b.clone())
//!   })
//!   .mutation(|_: &mut BitString, _: f64, _: &mut dyn RngCore| {})
//!   // always the first candidate
//!   .selection(|_: &[Candidate<2>], _: &Fitness, _: &mut dyn RngCore| 0_usize)
//!   .build()
//!   .optimize()
//!   .unwrap();
//! assert_eq!(outcome.evaluations, 20);
//! ```
//!
//! # Parallelization
//!
//! Evaluation is the only step that runs in parallel. Choose a strategy with
//! [`Execution`]; every strategy finishes the whole batch before ranking
//! proceeds, and parallel runs with a seed produce the same result as
//! sequential ones. For cheap problems, parallelization may only decrease
//! performance. Benchmark, if in doubt.
//!
//! # Logging
//!
//! Optimizers report progress through [tracing]: one span per run, a `debug`
//! event per generation and an `info` event when the budget is spent. Install
//! any subscriber to see them.
//!
//! # Example
//!
//! Choose a handful of items out of 40, minimizing their total weight while
//! maximizing their total value:
//! ```no_run
//! use sparse_moga::{
//!   indicator::pareto_front, run, Algorithm, BitString, Config, Evaluation,
//!   EvaluationError, Problem,
//! };
//!
//! struct Items {
//!   weights: Vec<f64>,
//!   values: Vec<f64>,
//! }
//!
//! impl Problem<2> for Items {
//!   fn number_of_bits(&self) -> usize {
//!     self.weights.len()
//!   }
//!
//!   fn evaluate(&self, bits: &BitString) -> Result<Evaluation<2>, EvaluationError> {
//!     let weight: f64 = bits.ones().map(|i| self.weights[i]).sum();
//!     let value: f64 = bits.ones().map(|i| self.values[i]).sum();
//!     // every objective is minimized
//!     Ok(Evaluation::new([weight, -value]))
//!   }
//! }
//!
//! let items = Items {
//!   weights: (1..=40).map(|i| (i % 7 + 1) as f64).collect(),
//!   values: (1..=40).map(|i| (i % 5 + 1) as f64).collect(),
//! };
//! let config = Config::builder()
//!   .population_size(50)
//!   .max_evaluations(5_000)
//!   .seed(7)
//!   .build();
//! let outcome = run(&items, Algorithm::SparseEa, config).unwrap();
//! for candidate in pareto_front(&outcome.population).unwrap() {
//!   println!("{:?} {:?}", candidate.bits(), candidate.scores());
//! }
//! ```
//!
//! More runnable programs live in the *demos* folder in the root of the
//! project.
//!
//! [NSGA-II]: https://sci2s.ugr.es/sites/default/files/files/Teaching/OtherPostGraduateCourses/Metaheuristicas/Deb_NSGAII.pdf
//! [SparseEA]: https://doi.org/10.1109/TEVC.2019.2918140
//! [tracing]: https://docs.rs/tracing

#![warn(missing_docs)]

pub mod candidate;
pub mod config;
pub mod crossover;
pub mod crowding;
pub mod dominance;
pub mod error;
pub mod evaluator;
mod execution;
pub mod fitness;
pub mod indicator;
pub mod mutation;
pub mod optimizer;
pub mod problem;
pub mod ranking;
pub mod score;
pub mod selection;
pub mod truncation;

pub use candidate::{BitString, Candidate};
pub use config::Config;
pub use error::{Error, EvaluationError, Result};
pub use execution::Execution;
pub use fitness::Fitness;
pub use optimizer::{
  nsga::Nsga2,
  run,
  sparse_ea::SparseEa,
  Algorithm,
  Optimizer,
  Outcome,
};
pub use problem::Problem;
pub use ranking::Ranking;
pub use score::{Evaluation, Score, Scores};
pub use selection::SelectionStrategy;
