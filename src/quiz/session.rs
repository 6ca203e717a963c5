use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::Theme;
use crate::quiz::definition::Answer;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub score: u32,
    pub current_index: usize,
    pub answers: Vec<Option<Answer>>,
    pub theme: Theme,
}

impl Session {
    pub fn new(num_questions: usize) -> Self {
        Session {
            score: 0,
            current_index: 0,
            answers: vec![None; num_questions],
            theme: Theme::default(),
        }
    }

    pub fn record(&mut self, index: usize, answer: Option<Answer>, is_correct: bool) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = answer;
            if is_correct {
                self.score += 1;
            }
        }
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index).and_then(|a| a.as_ref())
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.current_index = 0;
        for answer in self.answers.iter_mut() {
            *answer = None;
        }
    }
}

pub type SessionHandle = Arc<RwLock<Session>>;
