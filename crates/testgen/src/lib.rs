//! Route networks for tests, benchmarks and demos: a random generator and
//! the reference airline network.

pub mod generator;
pub mod sample;
