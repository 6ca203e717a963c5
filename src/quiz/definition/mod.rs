use anyhow::{anyhow, Context, Result};
use std::convert::TryFrom;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod question;

pub use question::{Answer, Question, QuestionKind, RawQuestion};


#[derive(Clone, Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> Result<QuizDefinition> {
        if questions.is_empty() {
            return Err(anyhow!("Quiz has no questions"));
        }
        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .with_context(|| format!("Invalid question #{}", index + 1))?;
        }
        Ok(QuizDefinition { questions })
    }

    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file {}", source.display()))?;
        QuizDefinition::from_reader(file)
            .with_context(|| format!("Could not load quiz file {}", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition> {
        let mut questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for (index, question) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                question.with_context(|| format!("Could not read question #{}", index + 1))?;
            let question = Question::try_from(raw_question)
                .with_context(|| format!("Invalid question #{}", index + 1))?;
            questions.push(question);
        }
        QuizDefinition::new(questions)
    }

    pub fn builtin() -> QuizDefinition {
        QuizDefinition {
            questions: vec![
                Question::multiple_choice(
                    "What is the capital of India?",
                    &["Mumbai", "Delhi", "Kolkata", "Chennai"],
                    "Delhi",
                    "Delhi is the capital city of India, known for its historical landmarks.",
                ),
                Question::checkbox(
                    "Select the prime numbers:",
                    &["2", "3", "4", "9", "11"],
                    &["2", "3", "11"],
                    "Prime numbers are numbers that are divisible only by 1 and themselves.",
                ),
                Question::text(
                    "Who developed the theory of relativity? (Type full name)",
                    "Albert Einstein",
                    "Albert Einstein formulated the theory of relativity, revolutionizing physics.",
                ),
                Question::multiple_choice(
                    "Which planet is known as the Red Planet?",
                    &["Earth", "Venus", "Mars", "Jupiter"],
                    "Mars",
                    "Mars is called the Red Planet due to the iron oxide on its surface.",
                ),
            ],
        }
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
