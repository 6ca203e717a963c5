use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::quiz::definition::{Answer, Question, QuestionKind};
use crate::quiz::{Event, InputMode};

#[cfg(test)]
mod tests;

lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(r"^!(\w+)\s*$").unwrap();
    static ref SELECTION_SEPARATOR_REGEX: Regex = Regex::new(r"\s*[,;]\s*").unwrap();
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Quiz(Event),
    Help,
    Quit,
}

pub fn parse(line: &str, mode: InputMode<'_>) -> Result<Option<Command>> {
    let line = line.trim();

    if line.starts_with('!') {
        return parse_command(line).map(Some);
    }

    match mode {
        InputMode::Answer(question) => parse_answer(line, question)
            .map(|answer| Some(Command::Quiz(Event::Submit(answer)))),
        InputMode::Continue if line.is_empty() => Ok(Some(Command::Quiz(Event::Next))),
        InputMode::Continue => Err(anyhow!("Press Enter or use `!next` to continue")),
        InputMode::Finished if line.is_empty() => Ok(None),
        InputMode::Finished => Err(anyhow!(
            "The quiz is over, use `!restart` to play again or `!quit` to leave"
        )),
    }
}

fn parse_command(line: &str) -> Result<Command> {
    let name = COMMAND_REGEX
        .captures(line)
        .map(|captures| captures[1].to_lowercase())
        .ok_or_else(|| anyhow!("Commands take no arguments, try `!help`"))?;
    match name.as_str() {
        "next" => Ok(Command::Quiz(Event::Next)),
        "restart" => Ok(Command::Quiz(Event::Restart)),
        "theme" => Ok(Command::Quiz(Event::ToggleTheme)),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(anyhow!("Unknown command `!{}`, try `!help`", other)),
    }
}

fn parse_answer(line: &str, question: &Question) -> Result<Answer> {
    match &question.kind {
        QuestionKind::MultipleChoice { options, .. } => {
            if line.is_empty() {
                return Err(anyhow!("Pick one of the options"));
            }
            resolve_option(line, options).map(Answer::Choice)
        }
        QuestionKind::Checkbox { options, .. } => {
            if line.is_empty() {
                return Ok(Answer::Choices(vec![]));
            }
            let choices = SELECTION_SEPARATOR_REGEX
                .split(line)
                .filter(|token| !token.is_empty())
                .map(|token| resolve_option(token, options))
                .collect::<Result<Vec<String>>>()?;
            Ok(Answer::Choices(choices))
        }
        QuestionKind::Text { .. } => {
            if line.is_empty() {
                return Err(anyhow!("Please type an answer before submitting"));
            }
            Ok(Answer::Text(line.to_owned()))
        }
    }
}

/// Options can be picked by their text or by their 1-based number. Text wins,
/// so numeric options like "11" are picked by value.
fn resolve_option(token: &str, options: &[String]) -> Result<String> {
    let token_lowercase = token.to_lowercase();
    let by_text = options
        .iter()
        .find(|option| option.to_lowercase() == token_lowercase);
    if let Some(option) = by_text {
        return Ok(option.clone());
    }
    if let Ok(number) = token.parse::<usize>() {
        if let Some(option) = number.checked_sub(1).and_then(|i| options.get(i)) {
            return Ok(option.clone());
        }
    }
    Err(anyhow!("`{}` is not one of the options", token))
}
