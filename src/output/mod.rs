use anyhow::Result;

use crate::decorations::Animation;
use crate::quiz::definition::{Answer, Question};
use crate::quiz::report::Report;
use crate::quiz::timer::Countdown;

#[cfg(test)]
pub mod mock;
pub mod terminal;
mod theme;

pub use self::theme::{Palette, Rgb, Theme};

const SFX_CORRECT: &str = "https://actions.google.com/sounds/v1/cartoon/clang_and_wobble.ogg";
const SFX_INCORRECT: &str = "https://actions.google.com/sounds/v1/cartoon/cartoon_boing.ogg";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AudioCue {
    Correct,
    Incorrect,
}

impl AudioCue {
    pub fn for_answer(is_correct: bool) -> Self {
        if is_correct {
            AudioCue::Correct
        } else {
            AudioCue::Incorrect
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            AudioCue::Correct => SFX_CORRECT,
            AudioCue::Incorrect => SFX_INCORRECT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub question: Question,
    pub given: Option<Answer>,
    pub is_correct: bool,
    pub timed_out: bool,
    pub is_last_question: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerReveal(Reveal),
    Farewell,
    GameResults(Report),
    InputRejected(String),
    Progress(usize, usize),
    QuestionBegins(usize, usize, Question),
    QuizRules,
    ThemeChanged(Theme),
    TimeRemaining(Countdown),
    TimeUp(Question),
    Welcome(usize),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);

    fn play_audio(&self, cue: AudioCue) -> Result<()>;

    fn show_animation(&self, animation: &Animation);

    fn set_theme(&self, theme: Theme);
}
