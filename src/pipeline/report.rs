use super::{ExerciseFailure, Outcome};
use crate::golden::GoldenRecord;
use std::fmt;

/// A record that did not become an exercise, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: String,
    pub message: String,
}

impl Problem {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Summary of one conversion run
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub written: Vec<String>,
    pub code_problems: Vec<Problem>,
    pub test_problems: Vec<Problem>,
    /// Failures that point at a bug or an unexpected input rather than
    /// an unsupported exercise
    pub logic_errors: Vec<Problem>,
    pub load_failures: Vec<Problem>,
    pub write_failures: Vec<Problem>,
    pub goldens: Vec<GoldenRecord>,
}

impl ConvertReport {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written { id, golden } => {
                self.written.push(id);
                self.goldens.push(golden);
            }
            Outcome::Rejected { id, failure } => {
                let problem = Problem::new(id, failure.error().to_string());
                if failure.error().is_logic_error() {
                    self.logic_errors.push(problem);
                } else if matches!(failure, ExerciseFailure::Code(_)) {
                    self.code_problems.push(problem);
                } else {
                    self.test_problems.push(problem);
                }
            }
            Outcome::WriteFailed { id, error } => {
                self.write_failures
                    .push(Problem::new(id, format!("{:#}", error)));
            }
        }
    }

    pub fn has_logic_errors(&self) -> bool {
        !self.logic_errors.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        self.has_logic_errors() || !self.write_failures.is_empty()
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    problems: &[Problem],
    with_message: bool,
) -> fmt::Result {
    writeln!(f, "{} {}", problems.len(), label)?;
    for problem in problems {
        if with_message {
            writeln!(f, "  {}: {}", problem.id, problem.message)?;
        } else {
            writeln!(f, "  {}", problem.id)?;
        }
    }
    Ok(())
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} exercises written", self.written.len())?;
        writeln!(f)?;
        write_section(f, "code problems", &self.code_problems, false)?;
        writeln!(f)?;
        write_section(f, "test problems", &self.test_problems, false)?;

        let extra = [
            ("unreadable records", &self.load_failures),
            ("write failures", &self.write_failures),
            ("logic errors", &self.logic_errors),
        ];
        for (label, problems) in extra {
            if !problems.is_empty() {
                writeln!(f)?;
                write_section(f, label, problems, true)?;
            }
        }
        Ok(())
    }
}
