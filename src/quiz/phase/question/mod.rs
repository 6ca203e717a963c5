use anyhow::{anyhow, Result};
use std::time::Duration;
use tracing::debug;

use crate::output::{AudioCue, Message, QuizOutput};
use crate::quiz::definition::{Answer, Question};
use crate::quiz::session::SessionHandle;
use crate::quiz::timer::Countdown;
use crate::quiz::State;


#[derive(Clone, Debug, PartialEq)]
pub struct AnswerOutcome {
    pub given: Option<Answer>,
    pub is_correct: bool,
}

impl AnswerOutcome {
    pub fn timed_out() -> Self {
        AnswerOutcome {
            given: None,
            is_correct: false,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.given.is_none()
    }
}

pub struct QuestionState<O> {
    index: usize,
    num_questions: usize,
    question: Question,
    countdown: Countdown,
    outcome: Option<AnswerOutcome>,
    session: SessionHandle,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(
        index: usize,
        num_questions: usize,
        question: Question,
        duration: Duration,
        session: SessionHandle,
        output: O,
    ) -> Self {
        QuestionState {
            index,
            num_questions,
            question,
            countdown: Countdown::new(duration),
            outcome: None,
            session,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        self.outcome.as_ref()
    }

    pub fn time_remaining(&self) -> Duration {
        self.countdown.remaining()
    }

    pub fn submit(&mut self, answer: Answer) -> Result<AnswerOutcome> {
        if self.outcome.is_some() {
            return Err(anyhow!("This question was already answered"));
        }
        if self.countdown.is_expired() {
            return Err(anyhow!("Time is up for this question"));
        }

        let answer = match answer {
            Answer::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(anyhow!("Please type an answer before submitting"));
                }
                Answer::Text(text.to_owned())
            }
            answer => answer,
        };

        let is_correct = self.question.is_answer_correct(&answer);
        self.countdown.cancel();
        self.session
            .write()
            .record(self.index, Some(answer.clone()), is_correct);

        let cue = AudioCue::for_answer(is_correct);
        debug!("Playing audio cue {}", cue.url());
        self.output.play_audio(cue).ok();

        let outcome = AnswerOutcome {
            given: Some(answer),
            is_correct,
        };
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn print_time_remaining(&self) {
        self.output
            .say(&Message::TimeRemaining(self.countdown.clone()));
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(
            self.index + 1,
            self.num_questions,
            self.question.clone(),
        ));
        self.print_time_remaining();
    }

    fn on_tick(&mut self, dt: Duration) {
        let seconds_before = self.countdown.remaining_seconds();
        let expired = self.countdown.tick(dt);
        let seconds_after = self.countdown.remaining_seconds();
        if !expired && self.outcome.is_none() && seconds_before != seconds_after {
            self.print_time_remaining();
        }
    }

    fn on_end(&mut self) {
        if self.outcome.is_none() {
            self.session.write().record(self.index, None, false);
            self.outcome = Some(AnswerOutcome::timed_out());
            self.output.say(&Message::TimeUp(self.question.clone()));
        }
    }

    fn is_over(&self) -> bool {
        self.outcome.is_some() || self.countdown.is_expired()
    }
}
