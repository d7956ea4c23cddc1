//! Lead-intake wizard
//!
//! A linear walk over six fixed questions. There is no branching and no
//! validation beyond rejecting blank answers.

use serde::{Deserialize, Serialize};

use crate::core::DemoError;

/// Delay before the answer input is refocused after a step change, in milliseconds
pub const FOCUS_DELAY_MS: u32 = 100;

pub const QUESTIONS: [&str; 6] = [
    "What do you do professionally?",
    "Who is your target audience?",
    "What do you offer them?",
    "What region are you targeting (local or international)?",
    "What should your outreach message say?",
    "Which platform do you want to use for outreach?",
];

const SUGGESTIONS: [&[&str]; 6] = [
    &[
        "Marketing Manager",
        "Sales Executive",
        "Software Engineer",
        "Business Consultant",
        "Entrepreneur",
    ],
    &[
        "Small Business Owners",
        "Corporate Executives",
        "Tech Startups",
        "E-commerce Brands",
        "Healthcare Professionals",
    ],
    &[
        "Consulting Services",
        "SaaS Platform",
        "Marketing Solutions",
        "Custom Development",
        "Training Programs",
    ],
    &[
        "United States",
        "Global",
        "Europe",
        "Asia Pacific",
        "Local (San Francisco)",
    ],
    &[
        "I'd like to introduce my services that can help increase your revenue...",
        "Our platform has helped similar companies achieve...",
    ],
    &["LinkedIn", "Email", "Twitter", "Instagram", "Facebook"],
];

/// Suggestion chips offered for a question
pub fn suggestions(index: usize) -> &'static [&'static str] {
    SUGGESTIONS.get(index).copied().unwrap_or(&[])
}

/// Answers collected by a finished wizard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub profession: String,
    pub target_audience: String,
    pub offering: String,
    pub region: String,
    pub message: String,
    pub platform: String,
}

/// Result of submitting an answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing changed
    Ignored,
    /// Answer stored, moved to the next question
    Advanced,
    /// Last answer stored, wizard finished
    Completed,
}

/// Wizard progress
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    index: usize,
    answers: Vec<String>,
    complete: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question being asked, or `None` once complete
    pub fn current_question(&self) -> Option<&'static str> {
        if self.complete {
            None
        } else {
            QUESTIONS.get(self.index).copied()
        }
    }

    pub fn current_suggestions(&self) -> &'static [&'static str] {
        if self.complete {
            &[]
        } else {
            suggestions(self.index)
        }
    }

    /// Question/answer pairs already behind the current question.
    /// Once complete this includes the last pair.
    pub fn answered(&self) -> Vec<(&'static str, String)> {
        let shown = if self.complete { self.index + 1 } else { self.index };
        QUESTIONS
            .iter()
            .zip(self.answers.iter())
            .take(shown)
            .map(|(q, a)| (*q, a.clone()))
            .collect()
    }

    /// Store an answer for the current question and move on.
    pub fn submit(&mut self, input: &str) -> Result<SubmitOutcome, DemoError> {
        if self.complete {
            return Err(DemoError::WizardComplete);
        }
        if input.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if self.answers.len() <= self.index {
            self.answers.resize(self.index + 1, String::new());
        }
        self.answers[self.index] = input.to_string();

        if self.index + 1 < QUESTIONS.len() {
            self.index += 1;
            Ok(SubmitOutcome::Advanced)
        } else {
            self.complete = true;
            Ok(SubmitOutcome::Completed)
        }
    }

    /// Step back one question, returning the answer given there.
    pub fn back(&mut self) -> Option<String> {
        if self.complete {
            self.complete = false;
            return self.answers.get(self.index).cloned();
        }
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.answers.get(self.index).cloned()
    }

    /// Progress bar fill, 0-100
    pub fn progress_percent(&self) -> f64 {
        if self.complete {
            100.0
        } else {
            (self.index + 1) as f64 / QUESTIONS.len() as f64 * 100.0
        }
    }

    /// Footer label under the questions
    pub fn status_label(&self) -> String {
        if self.complete {
            "All questions completed!".to_string()
        } else {
            format!("Question {} of {}", self.index + 1, QUESTIONS.len())
        }
    }

    /// Collected answers, available once every question is answered
    pub fn form_data(&self) -> Option<FormData> {
        if !self.complete {
            return None;
        }
        let answer = |i: usize| self.answers.get(i).cloned().unwrap_or_default();
        Some(FormData {
            profession: answer(0),
            target_audience: answer(1),
            offering: answer(2),
            region: answer(3),
            message: answer(4),
            platform: answer(5),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wizard_starts_at_first_question() {
        let wizard = Wizard::new();
        assert_eq!(wizard.index(), 0);
        assert!(!wizard.is_complete());
        assert_eq!(
            wizard.current_question(),
            Some("What do you do professionally?")
        );
        assert_eq!(wizard.status_label(), "Question 1 of 6");
        assert!(wizard.answered().is_empty());
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.submit(""), Ok(SubmitOutcome::Ignored));
        assert_eq!(wizard.submit("   "), Ok(SubmitOutcome::Ignored));
        assert_eq!(wizard, Wizard::new());
    }

    #[test]
    fn test_submit_advances() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.submit("Marketing Manager"),
            Ok(SubmitOutcome::Advanced)
        );
        assert_eq!(wizard.index(), 1);
        assert_eq!(
            wizard.answered(),
            vec![("What do you do professionally?", "Marketing Manager".to_string())]
        );
    }

    #[test]
    fn test_back_returns_previous_answer() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.back(), None);

        wizard.submit("Entrepreneur").unwrap();
        assert_eq!(wizard.back(), Some("Entrepreneur".to_string()));
        assert_eq!(wizard.index(), 0);

        // Re-answering overwrites the stored answer
        wizard.submit("Sales Executive").unwrap();
        assert_eq!(wizard.answered()[0].1, "Sales Executive");
    }

    #[test]
    fn test_submit_after_complete_fails() {
        let mut wizard = Wizard::new();
        for _ in 0..QUESTIONS.len() {
            wizard.submit("x").unwrap();
        }
        assert_eq!(wizard.submit("y"), Err(DemoError::WizardComplete));
    }

    #[test]
    fn test_progress_percent() {
        let mut wizard = Wizard::new();
        assert!((wizard.progress_percent() - 100.0 / 6.0).abs() < 1e-9);
        wizard.submit("a").unwrap();
        wizard.submit("b").unwrap();
        assert!((wizard.progress_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_suggestions_per_question() {
        assert_eq!(suggestions(0).len(), 5);
        assert_eq!(suggestions(4).len(), 2);
        assert_eq!(suggestions(5)[0], "LinkedIn");
        assert!(suggestions(6).is_empty());
    }

    #[test]
    fn test_form_data_requires_completion() {
        let mut wizard = Wizard::new();
        wizard.submit("Consultant").unwrap();
        assert_eq!(wizard.form_data(), None);
    }

    #[test]
    fn test_form_data_serializes_camel_case() {
        let data = FormData {
            profession: "a".into(),
            target_audience: "b".into(),
            offering: "c".into(),
            region: "d".into(),
            message: "e".into(),
            platform: "f".into(),
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"targetAudience\":\"b\""));
    }
}
