use crate::core::statistics::round_half_up;
use crate::dashboard::client::DashboardData;
use crate::domain::model::{EnrichedProfessorView, StatisticsSummary};
use std::fmt::Write;

/// Whole US dollars with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(amount: f64) -> String {
    let rounded = round_half_up(amount);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn render_summary(out: &mut String, stats: &StatisticsSummary) {
    let _ = writeln!(out, "== Summary ==");
    let _ = writeln!(out, "Professors:          {}", stats.total_professors);
    let _ = writeln!(
        out,
        "Average salary:      {}",
        format_currency(stats.average_salary as f64)
    );
    let _ = writeln!(out, "Average experience:  {} years", stats.average_experience);
    if let Some(range) = &stats.salary_range {
        let _ = writeln!(
            out,
            "Salary range:        {} - {}",
            format_currency(range.min),
            format_currency(range.max)
        );
    }
    if let Some(message) = &stats.message {
        let _ = writeln!(out, "{}", message);
    }
}

fn render_departments(out: &mut String, stats: &StatisticsSummary) {
    let _ = writeln!(out, "\n== Departments ==");
    for dept in &stats.department_stats {
        let _ = writeln!(
            out,
            "{:<20} {:>3} professors  avg {:>12}  {:>4} courses  [{}]",
            dept.department,
            dept.total_professors,
            format_currency(dept.average_salary as f64),
            dept.total_courses,
            dept.professors.join(", ")
        );
    }
}

fn render_rankings(out: &mut String, stats: &StatisticsSummary) {
    let _ = writeln!(out, "\n== Top earners ==");
    for (rank, earner) in stats.top_earners.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<24} {:<16} {:>12}  {} years, {} courses",
            rank + 1,
            earner.name,
            earner.department,
            format_currency(earner.salary),
            earner.experience,
            earner.courses_count
        );
    }

    if let Some(most_experienced) = &stats.most_experienced {
        let _ = writeln!(out, "\n== Most experienced ==");
        for (rank, prof) in most_experienced.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {:<24} {:<16} {:>3} years (since {})  {:>12}",
                rank + 1,
                prof.name,
                prof.department,
                prof.experience,
                prof.hire_year,
                format_currency(prof.salary)
            );
        }
    }
}

fn render_professors(out: &mut String, professors: &[EnrichedProfessorView]) {
    let _ = writeln!(out, "\n== Professors ==");
    let _ = writeln!(
        out,
        "{:<24} {:<16} {:>12} {:>6} {:>10} {:>7} {:>12}",
        "Name", "Department", "Salary", "Hired", "Experience", "Courses", "Per course"
    );
    for prof in professors {
        let _ = writeln!(
            out,
            "{:<24} {:<16} {:>12} {:>6} {:>10} {:>7} {:>12}",
            prof.record.name,
            prof.record.department,
            format_currency(prof.record.salary),
            prof.record.hire_year,
            format!("{} years", prof.experience),
            prof.record.courses_count,
            format_currency(prof.salary_per_course as f64)
        );
    }
}

pub fn render_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();
    render_summary(&mut out, &data.statistics);
    render_departments(&mut out, &data.statistics);
    render_rankings(&mut out, &data.statistics);
    render_professors(&mut out, &data.professors);
    out
}
