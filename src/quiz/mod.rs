use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use self::definition::*;
use self::phase::*;
use self::report::Report;
use self::session::{Session, SessionHandle};
use crate::decorations::{Animation, Decorations};
use crate::output::{Message, QuizOutput, Theme};

pub mod definition;
mod phase;
pub mod report;
pub mod session;
mod settings;
pub mod timer;

pub use self::phase::AnswerOutcome;
pub use self::settings::Settings;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Submit(Answer),
    Next,
    Restart,
    ToggleTheme,
}

/// What the quiz is waiting for from the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputMode<'a> {
    Answer(&'a Question),
    Continue,
    Finished,
}

/// Shows the welcome animation, the greeting and the rules.
fn greet<O: QuizOutput>(output: &O, num_questions: usize, animation: Option<&Animation>) {
    if let Some(animation) = animation {
        output.show_animation(animation);
    }
    output.say(&Message::Welcome(num_questions));
    output.say(&Message::QuizRules);
}

enum Phase<O> {
    Question(QuestionState<O>),
    Reveal(RevealState<O>),
    Results(ResultsState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Reveal(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Question(_) => "question",
            Phase::Reveal(_) => "reveal",
            Phase::Results(_) => "results",
        }
    }
}

pub struct Quiz<O> {
    definition: QuizDefinition,
    settings: Settings,
    decorations: Decorations,
    session: SessionHandle,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput + Clone> Quiz<O> {
    pub fn new(
        definition: QuizDefinition,
        settings: Settings,
        decorations: Decorations,
        output: O,
    ) -> Quiz<O> {
        let session = Session::new(definition.len());
        output.set_theme(session.theme);
        greet(&output, definition.len(), decorations.welcome.as_ref());

        let session = Arc::new(RwLock::new(session));
        let first_question = QuestionState::new(
            0,
            definition.len(),
            definition.get_questions()[0].clone(),
            settings.question_duration,
            session.clone(),
            output.clone(),
        );
        let mut quiz = Quiz {
            definition,
            settings,
            decorations,
            session,
            current_phase: Phase::Question(first_question),
            output,
        };
        info!("Entering quiz phase: {}", quiz.current_phase.name());
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn is_over(&self) -> bool {
        matches!(self.current_phase, Phase::Results(_))
    }

    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    pub fn input_mode(&self) -> InputMode<'_> {
        match &self.current_phase {
            Phase::Question(state) => InputMode::Answer(state.question()),
            Phase::Reveal(_) => InputMode::Continue,
            Phase::Results(_) => InputMode::Finished,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.question()),
            Phase::Reveal(state) => Some(state.question()),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.current_phase, Phase::Reveal(_))
    }

    pub fn selected_answer(&self) -> Option<&Answer> {
        match &self.current_phase {
            Phase::Reveal(state) => state.given_answer(),
            _ => None,
        }
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.time_remaining()),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match &self.current_phase {
            Phase::Results(state) => Some(state.report()),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        info!("Entering quiz phase: {}", phase.name());
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Submit(answer) => self.submit(answer).map(|_| ()),
            Event::Next => self.next(),
            Event::Restart => self.restart(),
            Event::ToggleTheme => {
                self.toggle_theme();
                Ok(())
            }
        }
    }

    pub fn submit(&mut self, answer: Answer) -> Result<AnswerOutcome> {
        match &mut self.current_phase {
            Phase::Question(state) => {
                let outcome = state.submit(answer)?;
                info!(
                    "Question #{} answered, correct: {}",
                    state.index() + 1,
                    outcome.is_correct
                );
                self.advance();
                Ok(outcome)
            }
            Phase::Reveal(_) => Err(anyhow!("This question was already answered")),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    pub fn next(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Reveal(_) => {
                self.advance();
                Ok(())
            }
            Phase::Question(_) => Err(anyhow!("Answer the current question first")),
            Phase::Results(_) => Err(anyhow!(
                "The quiz is over, use `!restart` to play again"
            )),
        }
    }

    pub fn restart(&mut self) -> Result<()> {
        match &self.current_phase {
            Phase::Results(_) => {
                self.session.write().reset();
                self.begin_question(0);
                Ok(())
            }
            _ => Err(anyhow!("The quiz can only be restarted once it is over")),
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = {
            let mut session = self.session.write();
            session.theme = session.theme.toggled();
            session.theme
        };
        self.output.set_theme(theme);
        self.output.say(&Message::ThemeChanged(theme));
        theme
    }

    fn advance(&mut self) {
        match &self.current_phase {
            Phase::Question(state) => {
                let index = state.index();
                let outcome = state
                    .outcome()
                    .cloned()
                    .unwrap_or_else(AnswerOutcome::timed_out);
                self.begin_reveal(index, outcome);
            }
            Phase::Reveal(state) => {
                let next_index = state.index() + 1;
                if next_index < self.definition.len() {
                    self.begin_question(next_index);
                } else {
                    self.begin_results();
                }
            }
            Phase::Results(_) => (),
        }
    }

    fn begin_question(&mut self, index: usize) {
        self.session.write().current_index = index;
        let state = QuestionState::new(
            index,
            self.definition.len(),
            self.definition.get_questions()[index].clone(),
            self.settings.question_duration,
            self.session.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }

    fn begin_reveal(&mut self, index: usize, outcome: AnswerOutcome) {
        let auto_advance = if outcome.is_timeout() {
            Some(self.settings.timeout_reveal_duration)
        } else {
            None
        };
        let state = RevealState::new(
            index,
            self.definition.len(),
            self.definition.get_questions()[index].clone(),
            outcome,
            auto_advance,
            self.output.clone(),
        );
        self.set_current_phase(Phase::Reveal(state));
    }

    fn begin_results(&mut self) {
        let report = {
            let mut session = self.session.write();
            session.current_index = self.definition.len();
            Report::compile(&session, self.definition.get_questions())
        };
        info!(
            "Quiz completed: {}/{} ({})",
            report.score, report.total, report.grade
        );
        let state = ResultsState::new(
            report,
            self.decorations.celebration.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Results(state));
    }
}
