use clap::Args;
use empleos::error::AppError;
use empleos::vacancies::store::SEED_DATE_FORMAT;
use empleos::vacancies::{
    InMemoryVacancyStore, JobPosting, SalaryTier, VacancyQueryService, VacancyRowView,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Posting id to look up
    #[arg(long)]
    pub(crate) id: i32,
}

fn seeded_service() -> VacancyQueryService<InMemoryVacancyStore> {
    VacancyQueryService::new(Arc::new(InMemoryVacancyStore::seeded()))
}

pub(crate) fn run_list() -> Result<(), AppError> {
    let service = seeded_service();
    for line in list_lines(&service) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let service = seeded_service();
    for line in show_lines(&service, args.id) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn list_lines(service: &VacancyQueryService<InMemoryVacancyStore>) -> Vec<String> {
    let postings = service.find_all();
    if postings.is_empty() {
        return vec!["No vacancies available".to_string()];
    }

    let mut lines = vec![format!("Vacancies ({})", postings.len())];
    lines.extend(postings.iter().map(|posting| {
        let row = VacancyRowView::from(posting);
        format!(
            "- [{}] {} | posted {} | {:.2} ({}) | featured {}",
            id_label(posting),
            row.title,
            row.posted_on,
            row.salary,
            row.salary_label,
            row.featured_label
        )
    }));

    let tiers: Vec<String> = SalaryTier::ordered()
        .iter()
        .map(|tier| {
            let count = postings
                .iter()
                .filter(|posting| service.classify(posting) == *tier)
                .count();
            format!("{}: {count}", tier.label())
        })
        .collect();
    lines.push(format!("By salary: {}", tiers.join(" | ")));
    lines
}

pub(crate) fn show_lines(
    service: &VacancyQueryService<InMemoryVacancyStore>,
    id: i32,
) -> Vec<String> {
    let found = service.find_by_id(id);
    let Some(posting) = found.first() else {
        return vec![format!("Vacancy {id} not found")];
    };

    let tier = service.classify(posting);
    vec![
        format!("{} (id {})", posting.title(), id_label(posting)),
        posting.description().to_string(),
        format!("Posted: {}", posting.posted_date().format(SEED_DATE_FORMAT)),
        format!("Salary: {:.2} ({})", posting.salary(), tier.label()),
        format!("Featured: {}", posting.featured().label()),
        format!("Image: {}", posting.image()),
    ]
}

fn id_label(posting: &JobPosting) -> String {
    posting
        .id()
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}
