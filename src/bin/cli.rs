//! studentdb CLI
//!
//! One-shot commands against a studentdb storage file.

use std::io::{self, Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use studentdb::console::write_report;
use studentdb::{RecordStore, Result, Student};
use tracing_subscriber::{fmt, EnvFilter};

/// studentdb CLI
#[derive(Parser, Debug)]
#[command(name = "studentdb-cli")]
#[command(about = "One-shot commands for the studentdb record store")]
#[command(version)]
struct Args {
    /// Storage file
    #[arg(short, long, default_value = "./studentdb_data/students.db")]
    data_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every student, sorted by roll number
    List,

    /// Show one student's report
    Show {
        /// Roll number
        id: String,
    },

    /// Case-insensitive search on name
    SearchName {
        /// Substring to look for
        query: String,
    },

    /// Case-insensitive search on program
    SearchProgram {
        /// Substring to look for
        query: String,
    },

    /// Register a new student
    Add {
        /// Roll number
        id: String,

        name: String,

        program: String,

        /// Birth date (YYYY-MM-DD)
        birth_date: NaiveDate,
    },

    /// Delete a student
    Remove {
        /// Roll number
        id: String,
    },

    /// Add or update a grade
    Grade {
        /// Roll number
        id: String,

        subject: String,

        /// Score between 0 and 100
        #[arg(value_parser = parse_score)]
        score: f64,
    },

    /// Record attendance for a day
    Attend {
        /// Roll number
        id: String,

        /// Day (YYYY-MM-DD)
        date: NaiveDate,

        /// Mark the student absent instead of present
        #[arg(long)]
        absent: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let store = match RecordStore::open_path(&args.data_file) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to open student store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = execute(&store, args.command) {
        eprintln!("Error: {}", e);
        // 2: nothing changed (duplicate / not found), 1: storage failure
        std::process::exit(if e.is_recoverable() { 2 } else { 1 });
    }
}

fn execute(store: &RecordStore, command: Commands) -> Result<()> {
    let mut out = io::stdout().lock();

    match command {
        Commands::List => print_all(&mut out, &store.list_all())?,
        Commands::Show { id } => match store.get(&id) {
            Some(student) => write_report(&mut out, &student)?,
            None => {
                return Err(studentdb::StudentDbError::NotFound { id });
            }
        },
        Commands::SearchName { query } => print_all(&mut out, &store.search_by_name(&query))?,
        Commands::SearchProgram { query } => {
            print_all(&mut out, &store.search_by_program(&query))?
        }
        Commands::Add {
            id,
            name,
            program,
            birth_date,
        } => {
            store.add(Student::new(id, name, program, birth_date))?;
            writeln!(out, "Student registered successfully.")?;
        }
        Commands::Remove { id } => {
            let removed = store.remove(&id)?;
            writeln!(out, "Student {} deleted.", removed.id())?;
        }
        Commands::Grade { id, subject, score } => {
            store.edit(&id, |s| {
                s.set_grade(subject, score);
            })?;
            writeln!(out, "Grade recorded.")?;
        }
        Commands::Attend { id, date, absent } => {
            store.edit(&id, |s| {
                s.set_attendance(date, !absent);
            })?;
            writeln!(out, "Attendance recorded.")?;
        }
    }

    Ok(())
}

fn print_all<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "No student records found.");
    }
    for student in students {
        write_report(out, student)?;
    }
    Ok(())
}

fn parse_score(s: &str) -> std::result::Result<f64, String> {
    let score: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid decimal number", s))?;
    if !(0.0..=100.0).contains(&score) {
        return Err(format!("score {} is outside 0-100", score));
    }
    Ok(score)
}
