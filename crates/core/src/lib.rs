//! Matrix model, spectral backend API, error analysis and reporting for FFT
//! round-trip precision runs.

pub mod analysis;
pub mod backend;
pub mod dump;
pub mod error;
pub mod field;
pub mod generator;
pub mod grid;
pub mod io;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod symmetry;

#[cfg(test)]
mod _tests_field;
#[cfg(test)]
mod _tests_generator;
#[cfg(test)]
mod _tests_io;
#[cfg(test)]
mod _tests_metrics;
#[cfg(test)]
mod _tests_report;
