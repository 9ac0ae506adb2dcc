// crates/usecase/src/report.rs

//! Report runner: evaluates every question against the loaded collection
//! and writes one line per question to the injected sink.
//!
//! Questions are isolated from one another. A failing aggregation turns
//! into a "no answer available" line for that question only and never
//! aborts the rest of the report.

use namedata_domain::model::Person;
use namedata_ports::UserOutput;
use namedata_shared_kernel::Result;
use serde::Serialize;

use crate::questions::{Question, ReportOptions, default_questions};

/// Outcome of one question. `answer` is `None` when the aggregation could
/// not produce a value, with the reason in `unavailable`.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub question: String,
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl Answer {
    /// The line written to the sink for this answer.
    pub fn render(&self) -> String {
        match (&self.answer, &self.unavailable) {
            (Some(answer), _) => answer.clone(),
            (None, Some(reason)) => {
                format!("{}: no answer available ({reason})", self.question)
            }
            (None, None) => format!("{}: no answer available", self.question),
        }
    }
}

pub struct ReportRunner {
    questions: Vec<Question>,
    options: ReportOptions,
}

impl ReportRunner {
    pub fn new(options: ReportOptions) -> Self {
        Self { questions: default_questions(), options }
    }

    /// Replace the fixed question list, e.g. for a trimmed-down report.
    pub fn with_questions(questions: Vec<Question>, options: ReportOptions) -> Self {
        Self { questions, options }
    }

    /// Evaluate every question, in order, against `people`.
    pub fn answers(&self, people: &[Person]) -> Vec<Answer> {
        self.questions
            .iter()
            .map(|q| match q.answer(people, &self.options) {
                Ok(answer) => Answer {
                    question: q.title.to_string(),
                    answer: Some(answer),
                    unavailable: None,
                },
                Err(e) => Answer {
                    question: q.title.to_string(),
                    answer: None,
                    unavailable: Some(e.to_string()),
                },
            })
            .collect()
    }

    /// Evaluate and write one line per question to `output`, returning the
    /// answers for any further presentation.
    pub fn run(&self, people: &[Person], output: &dyn UserOutput) -> Result<Vec<Answer>> {
        let answers = self.answers(people);
        for answer in &answers {
            output.write_line(&answer.render())?;
        }
        Ok(answers)
    }
}
