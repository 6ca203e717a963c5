use std::time::Duration;

use crate::output::{Message, QuizOutput, Reveal};
use crate::quiz::definition::{Answer, Question};
use crate::quiz::phase::AnswerOutcome;
use crate::quiz::State;


pub struct RevealState<O> {
    index: usize,
    num_questions: usize,
    question: Question,
    outcome: AnswerOutcome,
    time_elapsed: Duration,
    auto_advance: Option<Duration>,
    output: O,
}

impl<O: QuizOutput> RevealState<O> {
    /// `auto_advance` moves on by itself after the given delay. Without it the
    /// state waits for an explicit `Next`.
    pub fn new(
        index: usize,
        num_questions: usize,
        question: Question,
        outcome: AnswerOutcome,
        auto_advance: Option<Duration>,
        output: O,
    ) -> Self {
        RevealState {
            index,
            num_questions,
            question,
            outcome,
            time_elapsed: Duration::default(),
            auto_advance,
            output,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn given_answer(&self) -> Option<&Answer> {
        self.outcome.given.as_ref()
    }
}

impl<O: QuizOutput> State for RevealState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::AnswerReveal(Reveal {
            question: self.question.clone(),
            given: self.outcome.given.clone(),
            is_correct: self.outcome.is_correct,
            timed_out: self.outcome.is_timeout(),
            is_last_question: self.index + 1 == self.num_questions,
        }));
        self.output
            .say(&Message::Progress(self.index + 1, self.num_questions));
    }

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        match self.auto_advance {
            Some(delay) => self.time_elapsed >= delay,
            None => false,
        }
    }
}
