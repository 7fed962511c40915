//! Console Module
//!
//! Interactive, menu-driven front end over a `RecordStore`.
//!
//! ## Responsibilities
//! - Present the numbered menu and dispatch choices
//! - Collect input with retry-until-valid prompts (`Prompter`)
//! - Turn store errors into user-facing messages
//! - Format student reports
//!
//! Only console I/O errors end a session; store errors are reported and the
//! menu continues.

mod input;
mod report;

use std::io::{BufRead, Write};

use tracing::error;

pub use input::{Prompter, DATE_FORMAT};
pub use report::{format_attendance, format_grades, write_report};

use crate::error::{Result, StudentDbError};
use crate::store::RecordStore;
use crate::student::Student;

/// Menu entries, in display order
const MENU: &[&str] = &[
    "1. Register Student",
    "2. View All Students",
    "3. Search Student",
    "4. Edit Student Details",
    "5. Delete Student",
    "6. Add/Update Grades",
    "7. Record Attendance",
    "8. Generate Student Report",
    "9. Exit",
];

/// Interactive session bound to one store
pub struct Console<'a, R, W> {
    store: &'a RecordStore,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Consume the session, handing back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out(), "=== Student Management System ===")?;

        loop {
            self.print_menu()?;
            match self.prompter.read_int("Choose an option: ")? {
                1 => self.register_student()?,
                2 => self.view_all_students()?,
                3 => self.search_student()?,
                4 => self.edit_student()?,
                5 => self.delete_student()?,
                6 => self.add_or_update_grade()?,
                7 => self.record_attendance()?,
                8 => self.generate_report()?,
                9 => break,
                _ => writeln!(self.out(), "Invalid option. Please try again.")?,
            }
        }

        writeln!(self.out(), "Exiting Student Management System. Goodbye!")?;
        Ok(())
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn register_student(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Register Student ---")?;
        let id = self.prompter.read_non_empty("Roll Number: ")?;
        let name = self.prompter.read_non_empty("Name: ")?;
        let program = self.prompter.read_non_empty("Program: ")?;
        let birth_date = self.prompter.read_date("Date of Birth (YYYY-MM-DD): ")?;

        match self.store.add(Student::new(id, name, program, birth_date)) {
            Ok(()) => writeln!(self.out(), "Student registered successfully.")?,
            Err(e) => self.report_store_error(&e)?,
        }
        Ok(())
    }

    fn view_all_students(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Student List ---")?;
        let students = self.store.list_all();
        if students.is_empty() {
            writeln!(self.out(), "No student records found.")?;
            return Ok(());
        }
        self.print_reports(&students)
    }

    fn search_student(&mut self) -> Result<()> {
        writeln!(self.out(), "\nSearch by: 1) Roll Number 2) Name 3) Program")?;
        match self.prompter.read_int("Select option: ")? {
            1 => {
                let id = self.prompter.read_non_empty("Enter roll number: ")?;
                match self.store.get(&id) {
                    Some(student) => write_report(self.out(), &student)?,
                    None => writeln!(self.out(), "Student not found.")?,
                }
            }
            2 => {
                let query = self.prompter.read_non_empty("Enter name keyword: ")?;
                let results = self.store.search_by_name(&query);
                self.print_search_results(&results)?;
            }
            3 => {
                let query = self.prompter.read_non_empty("Enter program keyword: ")?;
                let results = self.store.search_by_program(&query);
                self.print_search_results(&results)?;
            }
            _ => writeln!(self.out(), "Invalid search option.")?,
        }
        Ok(())
    }

    fn edit_student(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Edit Student ---")?;
        let Some(current) = self.prompt_existing_student()? else {
            return Ok(());
        };

        let name = self
            .prompter
            .read_non_empty(&format!("Updated Name (current: {}): ", current.name()))?;
        let program = self
            .prompter
            .read_non_empty(&format!("Updated Program (current: {}): ", current.program()))?;
        let birth_date = self.prompter.read_date(&format!(
            "Updated DOB (current: {}, YYYY-MM-DD): ",
            current.birth_date().format(DATE_FORMAT)
        ))?;

        let result = self.store.edit(current.id(), |s| {
            s.update_basic_info(name, program, birth_date)
        });
        self.report_edit(result, "Student details updated.")
    }

    fn delete_student(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Delete Student ---")?;
        let id = self.prompter.read_non_empty("Enter roll number: ")?;

        match self.store.remove(&id) {
            Ok(_) => writeln!(self.out(), "Student deleted.")?,
            Err(e) => self.report_store_error(&e)?,
        }
        Ok(())
    }

    fn add_or_update_grade(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Add/Update Grade ---")?;
        let Some(current) = self.prompt_existing_student()? else {
            return Ok(());
        };

        let subject = self.prompter.read_non_empty("Subject: ")?;
        let score = self.prompter.read_score("Score (0-100): ")?;

        let result = self.store.edit(current.id(), |s| {
            s.set_grade(subject, score);
        });
        self.report_edit(result, "Grade recorded.")
    }

    fn record_attendance(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Record Attendance ---")?;
        let Some(current) = self.prompt_existing_student()? else {
            return Ok(());
        };

        let date = self.prompter.read_date("Attendance Date (YYYY-MM-DD): ")?;
        let present = self.prompter.read_yes_no("Present? (y/n): ")?;

        let result = self.store.edit(current.id(), |s| {
            s.set_attendance(date, present);
        });
        self.report_edit(result, "Attendance recorded.")
    }

    fn generate_report(&mut self) -> Result<()> {
        writeln!(self.out(), "\n--- Report ---")?;
        let id = self
            .prompter
            .read_non_empty("Enter roll number (or type ALL): ")?;

        if id.eq_ignore_ascii_case("ALL") {
            return self.view_all_students();
        }

        match self.store.get(&id) {
            Some(student) => write_report(self.out(), &student)?,
            None => writeln!(self.out(), "Student not found.")?,
        }
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out())?;
        for line in MENU {
            writeln!(self.out(), "{}", line)?;
        }
        Ok(())
    }

    fn print_reports(&mut self, students: &[Student]) -> Result<()> {
        for student in students {
            write_report(self.out(), student)?;
        }
        Ok(())
    }

    fn print_search_results(&mut self, results: &[Student]) -> Result<()> {
        if results.is_empty() {
            writeln!(self.out(), "No matching students found.")?;
            return Ok(());
        }
        self.print_reports(results)
    }

    /// Ask for a roll number; prints "Student not found." and yields None if absent
    fn prompt_existing_student(&mut self) -> Result<Option<Student>> {
        let id = self.prompter.read_non_empty("Enter roll number: ")?;
        let student = self.store.get(&id);
        if student.is_none() {
            writeln!(self.out(), "Student not found.")?;
        }
        Ok(student)
    }

    fn report_edit(&mut self, result: Result<Student>, success: &str) -> Result<()> {
        match result {
            Ok(_) => writeln!(self.out(), "{}", success)?,
            Err(e) => self.report_store_error(&e)?,
        }
        Ok(())
    }

    /// Translate a store failure into a message; the session carries on
    fn report_store_error(&mut self, e: &StudentDbError) -> Result<()> {
        match e {
            StudentDbError::Duplicate { .. } => {
                writeln!(self.out(), "A student with this roll number already exists.")?
            }
            StudentDbError::NotFound { .. } => writeln!(self.out(), "Student not found.")?,
            other => {
                error!("Store operation failed: {}", other);
                writeln!(self.out(), "Error: {}", other)?
            }
        }
        Ok(())
    }
}
