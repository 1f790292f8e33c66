use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{Featured, JobPosting};

/// Date layout used by the literal seed dates (`dd-MM-yyyy`).
pub const SEED_DATE_FORMAT: &str = "%d-%m-%Y";

/// Read access to the posting catalog, so a database-backed source can replace
/// the in-memory fixture without touching the query service.
pub trait VacancyRepository: Send + Sync {
    /// Every posting in insertion order.
    fn all(&self) -> &[JobPosting];
}

/// Literal description of a posting before its date has been parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedRecord {
    pub id: Option<i32>,
    pub title: &'static str,
    pub description: &'static str,
    pub posted_on: &'static str,
    pub salary: f64,
    pub featured: Option<i32>,
    pub image: Option<&'static str>,
}

impl SeedRecord {
    fn into_posting(self) -> Result<JobPosting, SeedParseError> {
        let posted_date = parse_seed_date(self.posted_on)?;
        let posting = JobPosting::new(
            self.id,
            self.title,
            self.description,
            posted_date,
            self.salary,
        )
        .with_featured(Featured::from_flag(self.featured));

        Ok(match self.image {
            Some(image) => posting.with_image(image),
            None => posting,
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("seed date '{raw}' is not in dd-MM-yyyy form: {source}")]
pub(crate) struct SeedParseError {
    raw: String,
    #[source]
    source: chrono::ParseError,
}

fn parse_seed_date(raw: &str) -> Result<NaiveDate, SeedParseError> {
    NaiveDate::parse_from_str(raw.trim(), SEED_DATE_FORMAT).map_err(|source| SeedParseError {
        raw: raw.to_string(),
        source,
    })
}

/// Fixed-content posting catalog held for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVacancyStore {
    postings: Vec<JobPosting>,
}

impl InMemoryVacancyStore {
    /// Store populated with the reference sample postings.
    pub fn seeded() -> Self {
        Self::from_seed(&reference_seed())
    }

    /// Builds the catalog record by record. A record whose date does not parse
    /// is logged and left out; the rest are still loaded.
    pub fn from_seed(records: &[SeedRecord]) -> Self {
        let mut postings = Vec::with_capacity(records.len());

        for record in records {
            match record.into_posting() {
                Ok(posting) => postings.push(posting),
                Err(err) => {
                    warn!(id = ?record.id, title = record.title, error = %err, "skipping seed posting");
                }
            }
        }

        info!(
            loaded = postings.len(),
            skipped = records.len() - postings.len(),
            "in-memory vacancy catalog ready"
        );

        Self { postings }
    }

    pub fn from_postings(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }
}

impl VacancyRepository for InMemoryVacancyStore {
    fn all(&self) -> &[JobPosting] {
        &self.postings
    }
}

pub fn reference_seed() -> Vec<SeedRecord> {
    vec![
        SeedRecord {
            id: Some(1),
            title: "Ingeniero Civil",
            description: "Solicitamos para el equipo de construcción de puente peatonal",
            posted_on: "01-01-2025",
            salary: 14000.0,
            featured: Some(1),
            image: Some("logo1.png"),
        },
        SeedRecord {
            id: Some(2),
            title: "Contador Público",
            description: "Contador titulado con experiencia en contabilidades de costo",
            posted_on: "01-02-2025",
            salary: 12000.0,
            featured: Some(0),
            image: Some("logo2.png"),
        },
        SeedRecord {
            id: Some(3),
            title: "Ingeniero Eléctrico",
            description: "Ingeniero eléctrico con experiencia en instalaciones industriales",
            posted_on: "01-03-2025",
            salary: 10500.0,
            featured: Some(0),
            image: None,
        },
        SeedRecord {
            id: Some(4),
            title: "Diseñador Gráfico",
            description: "Diseñador gráfico con experiencia en diseño digital y branding",
            posted_on: "01-04-2025",
            salary: 7900.0,
            featured: Some(1),
            image: Some("logo4.png"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn reference_seed_loads_every_posting_in_order() {
        let store = InMemoryVacancyStore::seeded();
        let ids: Vec<_> = store.all().iter().map(JobPosting::id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(
            store.all()[0].posted_date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
        );
        assert_eq!(
            store.all()[3].posted_date(),
            NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date")
        );
    }

    #[test]
    fn malformed_date_skips_only_that_record() {
        let mut seed = reference_seed();
        seed[1].posted_on = "2025-02-01";

        let store = InMemoryVacancyStore::from_seed(&seed);
        assert_eq!(store.all().len(), 3);
        assert!(store.all().iter().all(|posting| posting.id() != Some(2)));
    }

    #[test]
    #[traced_test]
    fn skipped_records_are_logged_as_warnings() {
        let mut seed = reference_seed();
        seed[3].posted_on = "01/04/2025";

        let store = InMemoryVacancyStore::from_seed(&seed);
        assert_eq!(store.all().len(), 3);
        assert!(logs_contain("WARN"));
        assert!(logs_contain("skipping seed posting"));
        assert!(logs_contain("01/04/2025"));
        assert!(logs_contain("skipped=1"));
    }

    #[test]
    #[traced_test]
    fn clean_seed_logs_no_warnings() {
        let _store = InMemoryVacancyStore::seeded();
        assert!(!logs_contain("skipping seed posting"));
        assert!(logs_contain("skipped=0"));
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        let err = parse_seed_date("31-02-2025").expect_err("february has no 31st");
        assert!(err.to_string().contains("31-02-2025"));
    }

    #[test]
    fn empty_seed_yields_empty_catalog() {
        let store = InMemoryVacancyStore::from_seed(&[]);
        assert!(store.all().is_empty());
    }

    #[test]
    fn seed_without_image_uses_placeholder() {
        let store = InMemoryVacancyStore::seeded();
        assert_eq!(store.all()[2].image(), "no-image.png");
        assert_eq!(store.all()[0].image(), "logo1.png");
        assert_eq!(store.all()[1].featured(), Featured::No);
    }
}
