use anyhow::{anyhow, Result};
use itertools::Itertools;
use serde::Deserialize;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;

const LIST_SEPARATOR: char = '|';
const NO_OPTIONS: &[String] = &[];

fn split_list(list: &str) -> Vec<String> {
    list.split(LIST_SEPARATOR)
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    Mcq,
    Checkbox,
    Text,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub kind: RawKind,
    pub prompt: String,
    #[serde(default)]
    pub options: Option<String>,
    pub answer: String,
    pub explanation: String,
}

/// What the user submitted for a question.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Answer {
    Choice(String),
    Choices(Vec<String>),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Choice(choice) => write!(f, "{}", choice),
            Answer::Choices(choices) => write!(f, "{}", choices.iter().join(", ")),
            Answer::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QuestionKind {
    MultipleChoice { options: Vec<String>, answer: String },
    Checkbox { options: Vec<String>, answer: Vec<String> },
    Text { answer: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub kind: QuestionKind,
    pub explanation: String,
}

impl Question {
    pub fn multiple_choice(
        prompt: &str,
        options: &[&str],
        answer: &str,
        explanation: &str,
    ) -> Self {
        Question {
            prompt: prompt.to_owned(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
                answer: answer.to_owned(),
            },
            explanation: explanation.to_owned(),
        }
    }

    pub fn checkbox(prompt: &str, options: &[&str], answer: &[&str], explanation: &str) -> Self {
        Question {
            prompt: prompt.to_owned(),
            kind: QuestionKind::Checkbox {
                options: options.iter().map(|o| o.to_string()).collect(),
                answer: answer.iter().map(|a| a.to_string()).collect(),
            },
            explanation: explanation.to_owned(),
        }
    }

    pub fn text(prompt: &str, answer: &str, explanation: &str) -> Self {
        Question {
            prompt: prompt.to_owned(),
            kind: QuestionKind::Text {
                answer: answer.trim().to_owned(),
            },
            explanation: explanation.to_owned(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(anyhow!("Question has an empty prompt"));
        }
        match &self.kind {
            QuestionKind::MultipleChoice { options, answer } => {
                if options.is_empty() {
                    return Err(anyhow!("Multiple choice question has no options"));
                }
                if !options.contains(answer) {
                    return Err(anyhow!("Answer `{}` is not one of the options", answer));
                }
            }
            QuestionKind::Checkbox { options, answer } => {
                if options.is_empty() {
                    return Err(anyhow!("Checkbox question has no options"));
                }
                if let Some(stray) = answer.iter().find(|a| !options.contains(*a)) {
                    return Err(anyhow!("Answer `{}` is not one of the options", stray));
                }
            }
            QuestionKind::Text { answer } => {
                if answer.trim().is_empty() {
                    return Err(anyhow!("Text question has an empty answer"));
                }
            }
        }
        Ok(())
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::Checkbox { options, .. } => options,
            QuestionKind::Text { .. } => NO_OPTIONS,
        }
    }

    pub fn is_answer_correct(&self, answer: &Answer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { answer: expected, .. }, Answer::Choice(choice)) => {
                choice == expected
            }
            (QuestionKind::Checkbox { answer: expected, .. }, Answer::Choices(choices)) => {
                let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();
                let given: HashSet<&str> = choices.iter().map(String::as_str).collect();
                expected == given
            }
            (QuestionKind::Text { answer: expected }, Answer::Text(text)) => {
                text.trim().to_lowercase() == expected.to_lowercase()
            }
            _ => false,
        }
    }

    pub fn correct_answer(&self) -> String {
        match &self.kind {
            QuestionKind::MultipleChoice { answer, .. } => answer.clone(),
            QuestionKind::Checkbox { answer, .. } => answer.iter().join(", "),
            QuestionKind::Text { answer } => answer.clone(),
        }
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = anyhow::Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let options = raw_question
            .options
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        let kind = match raw_question.kind {
            RawKind::Mcq => QuestionKind::MultipleChoice {
                options,
                answer: raw_question.answer.trim().to_owned(),
            },
            RawKind::Checkbox => QuestionKind::Checkbox {
                options,
                answer: split_list(&raw_question.answer),
            },
            RawKind::Text => {
                if !options.is_empty() {
                    return Err(anyhow!("Text questions cannot have options"));
                }
                QuestionKind::Text {
                    answer: raw_question.answer.trim().to_owned(),
                }
            }
        };

        let question = Question {
            prompt: raw_question.prompt.trim().to_owned(),
            kind,
            explanation: raw_question.explanation.trim().to_owned(),
        };
        question.validate()?;
        Ok(question)
    }
}
