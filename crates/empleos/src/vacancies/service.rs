use std::sync::Arc;

use super::domain::{JobPosting, SalaryTier};
use super::store::VacancyRepository;

/// Read-only query surface over the posting catalog.
///
/// The repository is never mutated after construction, so the service can be
/// shared between request handlers behind an `Arc` without locking.
pub struct VacancyQueryService<R> {
    repository: Arc<R>,
}

impl<R> Clone for VacancyQueryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> VacancyQueryService<R>
where
    R: VacancyRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All postings in insertion order.
    pub fn find_all(&self) -> &[JobPosting] {
        self.repository.all()
    }

    /// Zero or one postings whose id equals `id`; the first match wins when ids repeat.
    pub fn find_by_id(&self, id: i32) -> Vec<JobPosting> {
        self.repository
            .all()
            .iter()
            .find(|posting| posting.id() == Some(id))
            .cloned()
            .into_iter()
            .collect()
    }

    pub fn classify(&self, posting: &JobPosting) -> SalaryTier {
        posting.salary_tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vacancies::store::InMemoryVacancyStore;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    fn service_with(postings: Vec<JobPosting>) -> VacancyQueryService<InMemoryVacancyStore> {
        VacancyQueryService::new(Arc::new(InMemoryVacancyStore::from_postings(postings)))
    }

    #[test]
    fn duplicate_ids_resolve_to_first_inserted() {
        let service = service_with(vec![
            JobPosting::new(Some(5), "Primero", "a", date(), 100.0),
            JobPosting::new(Some(5), "Segundo", "b", date(), 200.0),
        ]);

        let found = service.find_by_id(5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title(), "Primero");
    }

    #[test]
    fn postings_without_id_never_match() {
        let service = service_with(vec![JobPosting::new(None, "Sin id", "x", date(), 0.0)]);
        assert!(service.find_by_id(0).is_empty());
        assert_eq!(service.find_all().len(), 1);
    }

    #[test]
    fn classify_reads_only_the_salary() {
        let service = service_with(Vec::new());
        let low = JobPosting::new(Some(1), "a", "b", date(), 1500.0);
        let high = JobPosting::new(Some(1), "a", "b", date(), 9000.0);
        assert_eq!(service.classify(&low), SalaryTier::Low);
        assert_eq!(service.classify(&high), SalaryTier::High);
    }

    #[test]
    fn clones_share_the_same_catalog() {
        let service = VacancyQueryService::new(Arc::new(InMemoryVacancyStore::seeded()));
        let clone = service.clone();
        assert_eq!(service.find_all(), clone.find_all());
    }
}
