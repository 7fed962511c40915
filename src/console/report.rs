//! Report formatting

use std::io::{self, Write};

use crate::student::Student;

/// "Math: 80.00, Science: 100.00" in grading order, or "None"
pub fn format_grades(student: &Student) -> String {
    if student.grades().is_empty() {
        return "None".to_string();
    }
    student
        .grades()
        .iter()
        .map(|(subject, score)| format!("{}: {:.2}", subject, score))
        .collect::<Vec<_>>()
        .join(", ")
}

/// "2024-01-01: present, 2024-01-02: absent" in recording order, or "None"
pub fn format_attendance(student: &Student) -> String {
    if student.attendance_log().is_empty() {
        return "None".to_string();
    }
    student
        .attendance_log()
        .iter()
        .map(|(date, &present)| {
            format!(
                "{}: {}",
                date.format("%Y-%m-%d"),
                if present { "present" } else { "absent" }
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary line plus indented grades and attendance
pub fn write_report<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "{}", student)?;
    writeln!(out, "  Grades: {}", format_grades(student))?;
    writeln!(out, "  Attendance History: {}", format_attendance(student))
}
