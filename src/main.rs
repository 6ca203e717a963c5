use anyhow::Result;
use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::{error, info};

use quizbox::config::Config;
use quizbox::decorations::Decorations;
use quizbox::input::{self, Command};
use quizbox::logging;
use quizbox::output::terminal::TerminalOutput;
use quizbox::output::{Message, QuizOutput};
use quizbox::quiz::definition::QuizDefinition;
use quizbox::quiz::Quiz;

fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

fn run() -> Result<()> {
    let config = Config::load()?;
    logging::init(&config.log_filter)?;

    let definition = match env::args_os().nth(1) {
        Some(path) => QuizDefinition::open(Path::new(&path))?,
        None => QuizDefinition::builtin(),
    };
    info!("Loaded quiz with {} questions", definition.len());

    let settings = config.quiz_settings()?;
    let tick_interval = settings.tick_interval;
    let decorations = Decorations::fetch(&config);
    let output = TerminalOutput::new();
    let mut quiz = Quiz::new(definition, settings, decorations, output.clone());

    let lines = spawn_input_reader();
    let mut last_tick = Instant::now();
    loop {
        match lines.recv_timeout(tick_interval) {
            Ok(line) => match input::parse(&line, quiz.input_mode()) {
                Ok(Some(Command::Quiz(event))) => {
                    if let Err(e) = quiz.handle(event) {
                        output.say(&Message::InputRejected(e.to_string()));
                    }
                }
                Ok(Some(Command::Help)) => output.say(&Message::QuizRules),
                Ok(Some(Command::Quit)) => break,
                Ok(None) => (),
                Err(e) => output.say(&Message::InputRejected(e.to_string())),
            },
            Err(RecvTimeoutError::Timeout) => (),
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        quiz.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    let session = quiz.session();
    info!(
        "Session ended at question #{} with a score of {}",
        session.current_index + 1,
        session.score
    );
    output.say(&Message::Farewell);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
