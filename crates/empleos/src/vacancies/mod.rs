//! Job posting catalog: the seeded in-memory store, the read-only query
//! service on top of it, and the HTTP routes that expose both.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;
pub mod views;

pub use domain::{Featured, JobPosting, SalaryTier, DEFAULT_IMAGE};
pub use router::vacancy_router;
pub use service::VacancyQueryService;
pub use store::{reference_seed, InMemoryVacancyStore, SeedRecord, VacancyRepository};
pub use views::{VacancyRowView, VacancyView};
