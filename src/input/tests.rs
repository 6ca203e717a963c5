use super::*;
use crate::quiz::definition::QuizDefinition;

fn question(index: usize) -> Question {
    QuizDefinition::builtin().get_questions()[index].clone()
}

fn submitted(line: &str, question: &Question) -> Answer {
    match parse(line, InputMode::Answer(question)).unwrap() {
        Some(Command::Quiz(Event::Submit(answer))) => answer,
        other => panic!("Expected a submission, got {:?}", other),
    }
}

#[test]
fn parses_commands_in_any_mode() {
    let mcq = question(0);
    for mode in vec![
        InputMode::Answer(&mcq),
        InputMode::Continue,
        InputMode::Finished,
    ] {
        assert_eq!(
            parse("!next", mode).unwrap(),
            Some(Command::Quiz(Event::Next))
        );
        assert_eq!(
            parse("  !Restart ", mode).unwrap(),
            Some(Command::Quiz(Event::Restart))
        );
        assert_eq!(
            parse("!theme", mode).unwrap(),
            Some(Command::Quiz(Event::ToggleTheme))
        );
        assert_eq!(parse("!help", mode).unwrap(), Some(Command::Help));
        assert_eq!(parse("!quit", mode).unwrap(), Some(Command::Quit));
    }
}

#[test]
fn rejects_unknown_commands() {
    assert!(parse("!dance", InputMode::Continue).is_err());
    assert!(parse("!next please", InputMode::Continue).is_err());
    assert!(parse("!", InputMode::Continue).is_err());
}

#[test]
fn mcq_accepts_number_or_text() {
    let mcq = question(0);
    assert_eq!(submitted("2", &mcq), Answer::Choice("Delhi".to_owned()));
    assert_eq!(submitted("delhi", &mcq), Answer::Choice("Delhi".to_owned()));
    assert_eq!(submitted(" Chennai ", &mcq), Answer::Choice("Chennai".to_owned()));
}

#[test]
fn mcq_rejects_unknown_options() {
    let mcq = question(0);
    assert!(parse("", InputMode::Answer(&mcq)).is_err());
    assert!(parse("5", InputMode::Answer(&mcq)).is_err());
    assert!(parse("0", InputMode::Answer(&mcq)).is_err());
    assert!(parse("Bangalore", InputMode::Answer(&mcq)).is_err());
}

#[test]
fn checkbox_accepts_lists() {
    let checkbox = question(1);
    assert_eq!(
        submitted("2, 3 ,11", &checkbox),
        Answer::Choices(vec!["2".to_owned(), "3".to_owned(), "11".to_owned()])
    );
    assert_eq!(
        submitted("11;2", &checkbox),
        Answer::Choices(vec!["11".to_owned(), "2".to_owned()])
    );
}

#[test]
fn checkbox_prefers_option_text_over_numbers() {
    let checkbox = question(1);
    assert_eq!(
        submitted("4", &checkbox),
        Answer::Choices(vec!["4".to_owned()])
    );
    assert_eq!(
        submitted("1", &checkbox),
        Answer::Choices(vec!["2".to_owned()])
    );
}

#[test]
fn checkbox_allows_empty_selection() {
    let checkbox = question(1);
    assert_eq!(submitted("", &checkbox), Answer::Choices(vec![]));
}

#[test]
fn checkbox_rejects_unknown_options() {
    let checkbox = question(1);
    assert!(parse("2, 7", InputMode::Answer(&checkbox)).is_err());
}

#[test]
fn text_answers_are_trimmed() {
    let text = question(2);
    assert_eq!(
        submitted("  Albert Einstein  ", &text),
        Answer::Text("Albert Einstein".to_owned())
    );
}

#[test]
fn empty_text_answer_is_rejected() {
    let text = question(2);
    assert!(parse("   ", InputMode::Answer(&text)).is_err());
}

#[test]
fn empty_line_continues_after_reveal() {
    assert_eq!(
        parse("", InputMode::Continue).unwrap(),
        Some(Command::Quiz(Event::Next))
    );
    assert!(parse("Delhi", InputMode::Continue).is_err());
}

#[test]
fn empty_line_is_ignored_when_finished() {
    assert_eq!(parse("", InputMode::Finished).unwrap(), None);
    assert!(parse("again", InputMode::Finished).is_err());
}
