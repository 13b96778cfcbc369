//! Aggregate statistics over a snapshot of professor records.
//!
//! Both entry points are pure: they take the records and the year to
//! measure experience against, and never touch the input.

use crate::domain::model::{
    DepartmentStat, EnrichedProfessorView, ExperiencedProfessor, ProfessorRecord, SalaryRange,
    StatisticsSummary, TopEarner,
};
use std::collections::HashMap;

pub const TOP_N: usize = 5;
pub const NO_DATA_MESSAGE: &str = "No professors in the database";

/// Rounds to the nearest integer, halves towards positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    // x - floor(x) is exact for doubles
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[derive(Debug)]
struct DepartmentAccumulator {
    department: String,
    count: usize,
    salary_sum: f64,
    course_sum: u64,
    professors: Vec<String>,
}

impl DepartmentAccumulator {
    fn new(department: &str) -> Self {
        Self {
            department: department.to_string(),
            count: 0,
            salary_sum: 0.0,
            course_sum: 0,
            professors: Vec::new(),
        }
    }

    fn add(&mut self, record: &ProfessorRecord) {
        self.count += 1;
        self.salary_sum += record.salary;
        self.course_sum += u64::from(record.courses_count);
        self.professors.push(record.name.clone());
    }

    fn finish(self) -> DepartmentStat {
        DepartmentStat {
            average_salary: round_half_up(self.salary_sum / self.count as f64),
            department: self.department,
            total_professors: self.count,
            total_courses: self.course_sum,
            professors: self.professors,
        }
    }
}

/// Groups by department, keeping groups in first-encounter order.
fn group_by_department(records: &[ProfessorRecord]) -> Vec<DepartmentAccumulator> {
    let mut groups: Vec<DepartmentAccumulator> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.department.as_str()).or_insert_with(|| {
            groups.push(DepartmentAccumulator::new(&record.department));
            groups.len() - 1
        });
        groups[slot].add(record);
    }

    groups
}

fn empty_summary() -> StatisticsSummary {
    StatisticsSummary {
        total_professors: 0,
        average_salary: 0,
        average_experience: 0,
        department_stats: Vec::new(),
        top_earners: Vec::new(),
        most_experienced: None,
        salary_range: None,
        message: Some(NO_DATA_MESSAGE.to_string()),
    }
}

pub fn compute_statistics(records: &[ProfessorRecord], current_year: i32) -> StatisticsSummary {
    if records.is_empty() {
        return empty_summary();
    }

    let total = records.len();
    let salary_sum: f64 = records.iter().map(|p| p.salary).sum();
    let experience_sum: i64 = records
        .iter()
        .map(|p| i64::from(p.experience(current_year)))
        .sum();

    // Vec::sort_by is stable: ties keep first-encounter order
    let mut department_stats: Vec<DepartmentStat> = group_by_department(records)
        .into_iter()
        .map(DepartmentAccumulator::finish)
        .collect();
    department_stats.sort_by(|a, b| b.average_salary.cmp(&a.average_salary));

    let mut top_earners: Vec<TopEarner> = records
        .iter()
        .map(|p| TopEarner {
            name: p.name.clone(),
            department: p.department.clone(),
            salary: p.salary,
            experience: p.experience(current_year),
            courses_count: p.courses_count,
        })
        .collect();
    top_earners.sort_by(|a, b| b.salary.total_cmp(&a.salary));
    top_earners.truncate(TOP_N);

    let mut most_experienced: Vec<ExperiencedProfessor> = records
        .iter()
        .map(|p| ExperiencedProfessor {
            name: p.name.clone(),
            department: p.department.clone(),
            experience: p.experience(current_year),
            hire_year: p.hire_year,
            salary: p.salary,
        })
        .collect();
    most_experienced.sort_by(|a, b| b.experience.cmp(&a.experience));
    most_experienced.truncate(TOP_N);

    let salary_range = records.iter().fold(
        SalaryRange {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |range, p| SalaryRange {
            min: range.min.min(p.salary),
            max: range.max.max(p.salary),
        },
    );

    StatisticsSummary {
        total_professors: total,
        average_salary: round_half_up(salary_sum / total as f64),
        average_experience: round_half_up(experience_sum as f64 / total as f64),
        department_stats,
        top_earners,
        most_experienced: Some(most_experienced),
        salary_range: Some(salary_range),
        message: None,
    }
}

pub fn enrich_with_experience(
    records: &[ProfessorRecord],
    current_year: i32,
) -> Vec<EnrichedProfessorView> {
    records
        .iter()
        .map(|p| EnrichedProfessorView {
            record: p.clone(),
            experience: p.experience(current_year),
            salary_per_course: if p.courses_count > 0 {
                round_half_up(p.salary / f64::from(p.courses_count))
            } else {
                0
            },
        })
        .collect()
}
