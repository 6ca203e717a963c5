use std::fmt;

use crate::quiz::definition::Question;
use crate::quiz::session::Session;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    Average,
    NeedsImprovement,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 75.0 {
            Grade::VeryGood
        } else if percentage >= 60.0 {
            Grade::Good
        } else if percentage >= 50.0 {
            Grade::Average
        } else {
            Grade::NeedsImprovement
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::Excellent => "A+ (Excellent)",
            Grade::VeryGood => "A (Very Good)",
            Grade::Good => "B (Good)",
            Grade::Average => "C (Average)",
            Grade::NeedsImprovement => "F (Needs Improvement)",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewEntry {
    pub number: usize,
    pub prompt: String,
    pub correct_answer: String,
    pub given_answer: Option<String>,
}

/// Final scoreboard: the summary figures plus one review line per question.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub score: u32,
    pub total: usize,
    pub percentage: f64,
    pub grade: Grade,
    pub review: Vec<ReviewEntry>,
}

impl Report {
    pub fn compile(session: &Session, questions: &[Question]) -> Self {
        let total = questions.len();
        let percentage = if total == 0 {
            0.0
        } else {
            session.score as f64 / total as f64 * 100.0
        };
        let review = questions
            .iter()
            .enumerate()
            .map(|(index, question)| ReviewEntry {
                number: index + 1,
                prompt: question.prompt.clone(),
                correct_answer: question.correct_answer(),
                given_answer: session.answer(index).map(|a| a.to_string()),
            })
            .collect();
        Report {
            score: session.score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
            review,
        }
    }

    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.score as usize)
    }
}
