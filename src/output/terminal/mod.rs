use anyhow::Result;
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

use crate::decorations::Animation;
use crate::output::theme::{CORRECT, INCORRECT};
use crate::output::{AudioCue, Message, QuizOutput, Reveal, Rgb, Theme};
use crate::quiz::definition::{Question, QuestionKind};
use crate::quiz::report::Report;
use crate::quiz::timer::Countdown;


const PROGRESS_BAR_WIDTH: usize = 20;
const NO_ANSWER: &str = "No Answer";
const BELL: &str = "\x07";

fn paint(text: &str, (r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

fn paint_on(text: &str, (r, g, b): Rgb, (br, bg, bb): Rgb) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        r, g, b, br, bg, bb, text
    )
}

fn bold(text: &str) -> String {
    format!("\x1b[1m{}\x1b[22m", text)
}

fn progress_bar(fraction: f32) -> String {
    let fraction = fraction.max(0.0).min(1.0);
    let filled = (fraction * PROGRESS_BAR_WIDTH as f32).round() as usize;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// The countdown is printed sparsely so it does not drown the prompt.
fn should_print_countdown(countdown: &Countdown) -> bool {
    let seconds = countdown.remaining_seconds();
    countdown.remaining() == countdown.time_limit() || seconds <= 3 || seconds % 5 == 0
}

#[derive(Clone, Default)]
pub struct TerminalOutput {
    theme: Arc<RwLock<Theme>>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Default::default()
    }

    fn write(&self, content: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", content).and_then(|_| handle.flush()) {
            debug!("Could not write to terminal: {}", e);
        }
    }

    fn describe_inputs(&self, question: &Question) -> String {
        let accent = self.theme.read().palette().accent;
        let mut description = String::new();
        for (index, option) in question.options().iter().enumerate() {
            description += &format!("\n  {} {}", paint(&format!("{}.", index + 1), accent), option);
        }
        let instructions = match &question.kind {
            QuestionKind::MultipleChoice { .. } => "Pick one option by number or name.",
            QuestionKind::Checkbox { .. } => {
                "Select all that apply, separated by commas. An empty line submits no selection."
            }
            QuestionKind::Text { .. } => "Type your answer here:",
        };
        description += &format!("\n{}", instructions);
        description
    }

    fn interpret_reveal(&self, reveal: &Reveal) -> String {
        let palette = self.theme.read().palette();
        let given = reveal
            .given
            .as_ref()
            .map(|a| a.to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| NO_ANSWER.to_owned());
        let (verdict, color) = if reveal.is_correct {
            ("✅", CORRECT)
        } else {
            ("❌", INCORRECT)
        };
        let mut message = String::new();
        if reveal.timed_out {
            message += if reveal.is_last_question {
                "⏰ Time's up! Here are your results...\n"
            } else {
                "⏰ Time's up! Moving to next question...\n"
            };
        }
        message += &format!(
            "{} {}\n{} {}\n{}",
            verdict,
            paint(&given, color),
            bold("Correct Answer:"),
            reveal.question.correct_answer(),
            paint_on(
                &format!(" 💡 {} ", reveal.question.explanation),
                palette.explanation_text,
                palette.explanation_panel
            )
        );
        if !reveal.timed_out {
            message += "\nPress Enter or use `!next` to continue.";
        }
        message
    }

    fn interpret_results(&self, report: &Report) -> String {
        let accent = self.theme.read().palette().accent;
        let mut message = format!(
            "🎉 Quiz Completed! Your Score: {} / {}\n\n{}\n",
            report.score,
            report.total,
            paint(&bold("── Summary ──"), accent)
        );
        message += &format!("Your Grade: {}\n", bold(&report.grade.to_string()));
        message += &format!("Percentage: {:.2}%\n", report.percentage);
        message += &format!("Total Questions: {}\n", report.total);
        message += &format!("Correct Answers: {}\n", report.score);
        message += &format!("Incorrect Answers: {}\n", report.incorrect());
        message += &format!("\n{}", paint(&bold("── Details ──"), accent));
        for entry in &report.review {
            message += &format!(
                "\n{} {}\n- Correct Answer: {}\n- Your Answer: {}\n---",
                bold(&format!("Q{}:", entry.number)),
                entry.prompt,
                entry.correct_answer,
                entry.given_answer.as_deref().unwrap_or("-")
            );
        }
        message += "\n\nUse `!restart` to play again or `!quit` to leave.";
        message
    }

    fn interpret_message(&self, message: &Message) -> Option<String> {
        use Message::*;
        let palette = self.theme.read().palette();
        let text = match message {
            Welcome(num_questions) => format!(
                "{}\n{} questions are waiting for you.",
                paint(&bold("🧠 Advanced Interactive Quiz"), palette.accent),
                num_questions
            ),
            QuizRules => format!(
                "{}\n- Each question has a time limit, answer before it runs out!\n- Multiple choice: type the option number or its name.\n- Checkboxes: list every correct option, separated by commas.\n- Text: type the answer, case does not matter.\n{}\n`!next` next question, `!theme` switch light/dark mode, `!restart` play again, `!help` show these rules, `!quit` leave.",
                bold("📋 Rules"),
                bold("⌨️ Commands")
            ),
            QuestionBegins(number, total, question) => format!(
                "\n{}{}",
                paint_on(
                    &bold(&format!(" Q{}/{}: {} ", number, total, question.prompt)),
                    palette.text,
                    palette.panel
                ),
                self.describe_inputs(question)
            ),
            TimeRemaining(countdown) => {
                if !should_print_countdown(countdown) {
                    return None;
                }
                format!(
                    "🕒 {} {}s",
                    paint(&progress_bar(countdown.fraction()), palette.accent_hover),
                    countdown.remaining_seconds()
                )
            }
            Farewell => "Thanks for playing the quiz!".to_owned(),
            TimeUp(question) => format!("⏰ Time's up for \"{}\"", question.prompt),
            AnswerReveal(reveal) => self.interpret_reveal(reveal),
            Progress(completed, total) => {
                let fraction = if *total == 0 {
                    0.0
                } else {
                    *completed as f32 / *total as f32
                };
                format!(
                    "{} {}/{}",
                    paint(&progress_bar(fraction), palette.accent),
                    completed,
                    total
                )
            }
            GameResults(report) => self.interpret_results(report),
            ThemeChanged(theme) => format!("🎨 Switched to {} mode.", theme.name()),
            InputRejected(reason) => paint(&format!("⚠️ {}", reason), INCORRECT),
        };
        Some(text)
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        if let Some(content) = self.interpret_message(message) {
            self.write(&content);
        }
    }

    fn play_audio(&self, cue: AudioCue) -> Result<()> {
        debug!("Audio cue: {}", cue.url());
        let mut stdout = io::stdout();
        stdout.write_all(BELL.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn show_animation(&self, animation: &Animation) {
        let accent = self.theme.read().palette().accent;
        let name = if animation.name.is_empty() {
            "animation"
        } else {
            animation.name.as_str()
        };
        self.write(&paint(
            &format!(
                "✨ {} ✨ ({}x{}, {:.1}s)",
                name,
                animation.width,
                animation.height,
                animation.duration().as_secs_f64()
            ),
            accent,
        ));
    }

    fn set_theme(&self, theme: Theme) {
        *self.theme.write() = theme;
    }
}
