//! Student entity
//!
//! Identity plus descriptive fields, grades, and attendance.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OrderedMap;

/// A single student record
///
/// `id` is fixed at construction; everything else can change. No field
/// content is validated here, that belongs to whatever collects the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Roll number, the primary key
    id: String,

    name: String,

    program: String,

    /// Serialized as an ISO-8601 date string
    birth_date: NaiveDate,

    /// subject → score, in the order subjects were first graded
    grades: OrderedMap<String, f64>,

    /// day → present, in the order days were first recorded
    attendance_log: OrderedMap<NaiveDate, bool>,
}

impl Student {
    /// Create a student with empty grade and attendance maps
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        program: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            program: program.into(),
            birth_date,
            grades: OrderedMap::new(),
            attendance_log: OrderedMap::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn grades(&self) -> &OrderedMap<String, f64> {
        &self.grades
    }

    pub fn attendance_log(&self) -> &OrderedMap<NaiveDate, bool> {
        &self.attendance_log
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Replace name, program and birth date. The id is untouched.
    pub fn update_basic_info(
        &mut self,
        name: impl Into<String>,
        program: impl Into<String>,
        birth_date: NaiveDate,
    ) {
        self.name = name.into();
        self.program = program.into();
        self.birth_date = birth_date;
    }

    /// Insert or overwrite the score for `subject`, returning the old score
    pub fn set_grade(&mut self, subject: impl Into<String>, score: f64) -> Option<f64> {
        self.grades.insert(subject.into(), score)
    }

    /// Insert or overwrite the presence flag for `date`, returning the old flag
    pub fn set_attendance(&mut self, date: NaiveDate, present: bool) -> Option<bool> {
        self.attendance_log.insert(date, present)
    }

    // =========================================================================
    // Derived Statistics
    // =========================================================================

    /// Mean of all scores, 0.0 when there are none
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.grades.values().sum();
        sum / self.grades.len() as f64
    }

    /// Percentage of recorded days marked present, 0.0 when nothing is recorded
    pub fn attendance_percentage(&self) -> f64 {
        if self.attendance_log.is_empty() {
            return 0.0;
        }
        let present = self.attendance_log.values().filter(|&&p| p).count();
        (present as f64 * 100.0) / self.attendance_log.len() as f64
    }

    /// Single-line summary, same text as `Display`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll: {} | Name: {} | Program: {} | DOB: {} | Avg Grade: {:.2} | Attendance: {:.2}%",
            self.id,
            self.name,
            self.program,
            self.birth_date.format("%Y-%m-%d"),
            self.average_grade(),
            self.attendance_percentage()
        )
    }
}
