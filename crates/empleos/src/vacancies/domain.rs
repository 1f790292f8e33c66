use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Image shown for postings that never had one assigned.
pub const DEFAULT_IMAGE: &str = "no-image.png";

/// Salaries at or below this value classify as [`SalaryTier::Low`].
pub const LOW_SALARY_THRESHOLD: f64 = 2000.0;
/// Salaries at or below this value (and above the low threshold) classify as [`SalaryTier::Normal`].
pub const NORMAL_SALARY_THRESHOLD: f64 = 8000.0;

/// Whether a posting is promoted on the home page.
///
/// Legacy data stores this as a nullable integer, so "never set" is kept
/// distinct from an explicit "no".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Featured {
    #[default]
    Unset,
    No,
    Yes,
}

impl Featured {
    /// Maps the legacy `destacado` column: null is unset, 0 is no, anything else is yes.
    pub const fn from_flag(flag: Option<i32>) -> Self {
        match flag {
            None => Self::Unset,
            Some(0) => Self::No,
            Some(_) => Self::Yes,
        }
    }

    pub const fn is_featured(self) -> bool {
        matches!(self, Self::Yes)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::No => "no",
            Self::Yes => "yes",
        }
    }
}

/// Coarse salary band shown next to each posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryTier {
    Low,
    Normal,
    High,
}

impl SalaryTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Normal, Self::High]
    }

    /// Thresholds are inclusive to the lower tier.
    pub fn for_salary(salary: f64) -> Self {
        if salary <= LOW_SALARY_THRESHOLD {
            Self::Low
        } else if salary <= NORMAL_SALARY_THRESHOLD {
            Self::Normal
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Sueldo malo",
            Self::Normal => "Sueldo normal",
            Self::High => "Buen sueldo",
        }
    }
}

/// A single job opening.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    id: Option<i32>,
    title: String,
    description: String,
    posted_date: NaiveDate,
    salary: f64,
    featured: Featured,
    image: String,
}

impl JobPosting {
    pub fn new(
        id: Option<i32>,
        title: impl Into<String>,
        description: impl Into<String>,
        posted_date: NaiveDate,
        salary: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            posted_date,
            salary,
            featured: Featured::Unset,
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn with_featured(mut self, featured: Featured) -> Self {
        self.featured = featured;
        self
    }

    /// Blank names leave the placeholder image in place.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        if !image.trim().is_empty() {
            self.image = image;
        }
        self
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn posted_date(&self) -> NaiveDate {
        self.posted_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn featured(&self) -> Featured {
        self.featured
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn salary_tier(&self) -> SalaryTier {
        SalaryTier::for_salary(self.salary)
    }
}
