use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Featured, JobPosting, SalaryTier};
use super::store::SEED_DATE_FORMAT;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyView {
    pub id: Option<i32>,
    pub title: String,
    pub description: String,
    pub posted_date: NaiveDate,
    pub salary: f64,
    pub featured: Featured,
    pub image: String,
    pub salary_tier: SalaryTier,
    pub salary_label: &'static str,
}

impl From<&JobPosting> for VacancyView {
    fn from(posting: &JobPosting) -> Self {
        let tier = posting.salary_tier();
        Self {
            id: posting.id(),
            title: posting.title().to_string(),
            description: posting.description().to_string(),
            posted_date: posting.posted_date(),
            salary: posting.salary(),
            featured: posting.featured(),
            image: posting.image().to_string(),
            salary_tier: tier,
            salary_label: tier.label(),
        }
    }
}

/// Flattened row for the tabular listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VacancyRowView {
    pub id: Option<i32>,
    pub title: String,
    pub posted_on: String,
    pub salary: f64,
    pub salary_label: &'static str,
    pub featured_label: &'static str,
}

impl From<&JobPosting> for VacancyRowView {
    fn from(posting: &JobPosting) -> Self {
        Self {
            id: posting.id(),
            title: posting.title().to_string(),
            posted_on: posting.posted_date().format(SEED_DATE_FORMAT).to_string(),
            salary: posting.salary(),
            salary_label: posting.salary_tier().label(),
            featured_label: posting.featured().label(),
        }
    }
}
