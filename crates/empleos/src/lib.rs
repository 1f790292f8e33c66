//! Job listings service: a seeded, read-only catalog of job postings with
//! salary classification, served over HTTP.

pub mod categories;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod vacancies;

#[cfg(test)]
mod test_support;
