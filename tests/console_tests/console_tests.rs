//! Tests for the interactive Console
//!
//! These tests verify:
//! - Each menu action drives the store as expected
//! - Store errors become messages and the session continues
//! - Exit and end-of-input both end the loop

use std::io::Cursor;

use chrono::NaiveDate;
use studentdb::console::Console;
use studentdb::{RecordStore, Student, StudentDbError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open_path(temp_dir.path().join("students.db")).unwrap();
    (temp_dir, store)
}

/// Run a full session with `script` as stdin; returns the transcript
fn run_session(store: &RecordStore, script: &[&str]) -> String {
    let mut input = script.join("\n");
    input.push('\n');

    let mut console = Console::new(store, Cursor::new(input.into_bytes()), Vec::new());
    console.run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

// =============================================================================
// Menu Loop Tests
// =============================================================================

#[test]
fn test_exit_immediately() {
    let (_temp, store) = setup_temp_store();

    let out = run_session(&store, &["9"]);

    assert!(out.starts_with("=== Student Management System ==="));
    assert!(out.contains("1. Register Student"));
    assert!(out.ends_with("Exiting Student Management System. Goodbye!\n"));
}

#[test]
fn test_invalid_option() {
    let (_temp, store) = setup_temp_store();

    let out = run_session(&store, &["42", "nope", "9"]);

    assert!(out.contains("Invalid option. Please try again."));
    assert!(out.contains("Please enter a valid number."));
}

#[test]
fn test_end_of_input_ends_session_with_error() {
    let (_temp, store) = setup_temp_store();
    let mut console = Console::new(&store, Cursor::new(b"2\n".to_vec()), Vec::new());

    match console.run() {
        Err(StudentDbError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

// =============================================================================
// Action Tests
// =============================================================================

#[test]
fn test_register_and_view() {
    let (_temp, store) = setup_temp_store();

    let out = run_session(
        &store,
        &["1", "S1", "Anna", "Physics", "bad-date", "2001-05-14", "2", "9"],
    );

    assert!(out.contains("Invalid date format. Use YYYY-MM-DD."));
    assert!(out.contains("Student registered successfully."));
    assert!(out.contains("Roll: S1 | Name: Anna | Program: Physics | DOB: 2001-05-14"));
    assert!(out.contains("  Grades: None"));
    assert_eq!(store.get("S1").unwrap().birth_date(), date(2001, 5, 14));
}

#[test]
fn test_register_duplicate() {
    let (_temp, store) = setup_temp_store();
    store
        .add(Student::new("S1", "Anna", "Physics", date(2001, 5, 14)))
        .unwrap();

    let out = run_session(&store, &["1", "S1", "Other", "Art", "2000-01-01", "9"]);

    assert!(out.contains("A student with this roll number already exists."));
    assert_eq!(store.get("S1").unwrap().name(), "Anna");
}

#[test]
fn test_view_empty() {
    let (_temp, store) = setup_temp_store();

    let out = run_session(&store, &["2", "9"]);

    assert!(out.contains("No student records found."));
}

#[test]
fn test_search_modes() {
    let (_temp, store) = setup_temp_store();
    store
        .add(Student::new("S1", "Joann", "Physics", date(2001, 1, 1)))
        .unwrap();
    store
        .add(Student::new("S2", "Bob", "History", date(2001, 1, 1)))
        .unwrap();

    let out = run_session(
        &store,
        &[
            "3", "1", "S2", // by roll
            "3", "2", "ANN", // by name
            "3", "3", "chem", // by program, no match
            "3", "1", "S9", // missing roll
            "3", "7", // bad mode
            "9",
        ],
    );

    assert!(out.contains("Roll: S2 | Name: Bob"));
    assert!(out.contains("Roll: S1 | Name: Joann"));
    assert!(out.contains("No matching students found."));
    assert!(out.contains("Student not found."));
    assert!(out.contains("Invalid search option."));
}

#[test]
fn test_edit_student() {
    let (_temp, store) = setup_temp_store();
    let mut original = Student::new("S1", "Anna", "Physics", date(2001, 5, 14));
    original.set_grade("Math", 70.0);
    store.add(original).unwrap();

    let out = run_session(&store, &["4", "S1", "Anna Marie", "Chemistry", "2001-06-01", "9"]);

    assert!(out.contains("Updated Name (current: Anna): "));
    assert!(out.contains("Student details updated."));
    let stored = store.get("S1").unwrap();
    assert_eq!(stored.name(), "Anna Marie");
    assert_eq!(stored.program(), "Chemistry");
    assert_eq!(stored.birth_date(), date(2001, 6, 1));
    // Grades survive a basic-info edit
    assert_eq!(stored.grades().get("Math"), Some(&70.0));
}

#[test]
fn test_edit_missing_student() {
    let (_temp, store) = setup_temp_store();

    let out = run_session(&store, &["4", "S1", "9"]);

    assert!(out.contains("Student not found."));
}

#[test]
fn test_delete_student() {
    let (_temp, store) = setup_temp_store();
    store
        .add(Student::new("S1", "Anna", "Physics", date(2001, 5, 14)))
        .unwrap();

    let out = run_session(&store, &["5", "S1", "5", "S1", "9"]);

    assert!(out.contains("Student deleted."));
    assert!(out.contains("Student not found."));
    assert!(store.is_empty());
}

#[test]
fn test_grades_and_attendance() {
    let (_temp, store) = setup_temp_store();
    store
        .add(Student::new("S1", "Anna", "Physics", date(2001, 5, 14)))
        .unwrap();

    let out = run_session(
        &store,
        &[
            "6", "S1", "Math", "150", "80", //
            "6", "S1", "Math", "90", //
            "7", "S1", "2024-01-01", "y", //
            "7", "S1", "2024-01-02", "n", //
            "8", "S1", //
            "9",
        ],
    );

    assert!(out.contains("Please enter a score between 0 and 100."));
    assert!(out.contains("Grade recorded."));
    assert!(out.contains("Attendance recorded."));
    assert!(out.contains("  Grades: Math: 90.00"));
    assert!(out.contains("  Attendance History: 2024-01-01: present, 2024-01-02: absent"));
    assert!(out.contains("Avg Grade: 90.00 | Attendance: 50.00%"));

    let stored = store.get("S1").unwrap();
    assert_eq!(stored.grades().len(), 1);
    assert_eq!(stored.attendance_percentage(), 50.0);
}

#[test]
fn test_report_all() {
    let (_temp, store) = setup_temp_store();
    store
        .add(Student::new("S2", "Bob", "Art", date(2001, 1, 1)))
        .unwrap();
    store
        .add(Student::new("S1", "Anna", "Art", date(2001, 1, 1)))
        .unwrap();

    let out = run_session(&store, &["8", "all", "9"]);

    let s1 = out.find("Roll: S1").unwrap();
    let s2 = out.find("Roll: S2").unwrap();
    assert!(s1 < s2);
}
