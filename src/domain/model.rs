use crate::utils::error::{Result, StatsError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize, Serializer};
use std::ops::RangeInclusive;

/// Four-digit years only.
pub const HIRE_YEAR_RANGE: RangeInclusive<i32> = 1000..=9999;

/// 薪資等金額：整數值輸出為 JSON 整數 (90000 而非 90000.0)
pub(crate) fn serialize_amount<S: Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub department: String,
    #[serde(serialize_with = "serialize_amount")]
    pub salary: f64,
    pub hire_year: i32,
    pub courses_count: u32,
}

impl ProfessorRecord {
    /// Builds a record, enforcing the write-time invariants.
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        hire_year: i32,
        courses_count: u32,
    ) -> Result<Self> {
        let record = Self {
            id: None,
            name: name.into(),
            department: department.into(),
            salary,
            hire_year,
            courses_count,
        }
        .trimmed();
        record.validate()?;
        Ok(record)
    }

    /// Strips surrounding whitespace from `name` and `department`.
    pub fn trimmed(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.department = self.department.trim().to_string();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn experience(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.hire_year)
    }
}

fn invalid_field(field: &str, reason: impl Into<String>) -> StatsError {
    StatsError::InvalidRecordField {
        field: field.to_string(),
        reason: reason.into(),
    }
}

impl Validate for ProfessorRecord {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid_field("name", "must not be empty"));
        }
        if self.department.trim().is_empty() {
            return Err(invalid_field("department", "must not be empty"));
        }
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(invalid_field(
                "salary",
                format!("{} is not a non-negative number", self.salary),
            ));
        }
        if !HIRE_YEAR_RANGE.contains(&self.hire_year) {
            return Err(invalid_field(
                "hireYear",
                format!(
                    "{} is outside {}..={}",
                    self.hire_year,
                    HIRE_YEAR_RANGE.start(),
                    HIRE_YEAR_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

/// Tags a record-level error with the record's position in its collection.
pub fn at_index(index: usize, error: StatsError) -> StatsError {
    match error {
        StatsError::InvalidRecordField { field, reason } => StatsError::MalformedRecord {
            index,
            reason: format!("{}: {}", field, reason),
        },
        other => other,
    }
}

/// Trims every record and checks it, failing on the first one that breaks
/// its invariants.
pub fn normalize_records(records: Vec<ProfessorRecord>) -> Result<Vec<ProfessorRecord>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let record = record.trimmed();
            record.validate().map_err(|e| at_index(index, e))?;
            Ok(record)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub department: String,
    pub total_professors: usize,
    pub average_salary: i64,
    pub total_courses: u64,
    pub professors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEarner {
    pub name: String,
    pub department: String,
    #[serde(serialize_with = "serialize_amount")]
    pub salary: f64,
    pub experience: i32,
    pub courses_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencedProfessor {
    pub name: String,
    pub department: String,
    pub experience: i32,
    pub hire_year: i32,
    #[serde(serialize_with = "serialize_amount")]
    pub salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(serialize_with = "serialize_amount")]
    pub min: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_professors: usize,
    pub average_salary: i64,
    pub average_experience: i64,
    pub department_stats: Vec<DepartmentStat>,
    pub top_earners: Vec<TopEarner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_experienced: Option<Vec<ExperiencedProfessor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProfessorView {
    #[serde(flatten)]
    pub record: ProfessorRecord,
    pub experience: i32,
    pub salary_per_course: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_new_trims_and_validates() {
        let record = ProfessorRecord::new("  Ada ", " CS", 90000.0, 2010, 3).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.department, "CS");
        assert_eq!(record.experience(2024), 14);

        assert!(ProfessorRecord::new("Ada", "CS", -1.0, 2010, 1).is_err());
    }

    #[test]
    fn test_new_reports_record_errors_as_data() {
        match ProfessorRecord::new("", "CS", 1.0, 2010, 1) {
            Err(e @ StatsError::InvalidRecordField { .. }) => {
                assert_eq!(e.category(), ErrorCategory::Data);
                assert_eq!(e.to_string(), "Invalid professor name: must not be empty");
            }
            other => panic!("expected InvalidRecordField, got {:?}", other),
        }
    }

    #[test]
    fn test_hire_year_must_be_four_digits() {
        assert!(ProfessorRecord::new("Ada", "CS", 1.0, 1000, 1).is_ok());
        assert!(ProfessorRecord::new("Ada", "CS", 1.0, 9999, 1).is_ok());
        assert!(ProfessorRecord::new("Ada", "CS", 1.0, i32::MIN, 1).is_err());
        assert!(ProfessorRecord::new("Ada", "CS", 1.0, 20100, 1).is_err());
    }

    #[test]
    fn test_experience_saturates_on_unchecked_records() {
        let record = ProfessorRecord {
            id: None,
            name: "Ada".to_string(),
            department: "CS".to_string(),
            salary: 1.0,
            hire_year: i32::MIN,
            courses_count: 1,
        };
        assert_eq!(record.experience(2024), i32::MAX);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ProfessorRecord::new("Ada", "CS", 90000.0, 2010, 3)
            .unwrap()
            .with_id("abc123");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "abc123",
                "name": "Ada",
                "department": "CS",
                "salary": 90000,
                "hireYear": 2010,
                "coursesCount": 3
            })
        );
    }

    #[test]
    fn test_fractional_salary_stays_float() {
        let record = ProfessorRecord::new("Ada", "CS", 1234.5, 2010, 3).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"salary\":1234.5"));
    }

    #[test]
    fn test_missing_field_is_rejected_by_shape() {
        let result: std::result::Result<ProfessorRecord, _> = serde_json::from_value(
            serde_json::json!({"name": "Ada", "department": "CS", "salary": 1})
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_records_trims_padding() {
        let records = vec![ProfessorRecord {
            id: None,
            name: " Ada ".to_string(),
            department: "CS ".to_string(),
            salary: 1.0,
            hire_year: 2010,
            courses_count: 1,
        }];

        let records = normalize_records(records).unwrap();
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[0].department, "CS");
    }

    #[test]
    fn test_normalize_records_reports_index() {
        let mut records = vec![ProfessorRecord::new("Ada", "CS", 1.0, 2010, 1).unwrap()];
        records.push(ProfessorRecord {
            id: None,
            name: "Bob".to_string(),
            department: " ".to_string(),
            salary: 10.0,
            hire_year: 2000,
            courses_count: 0,
        });

        match normalize_records(records) {
            Err(StatsError::MalformedRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.starts_with("department"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }
}
