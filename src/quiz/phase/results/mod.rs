use std::time::Duration;

use crate::decorations::Animation;
use crate::output::{Message, QuizOutput};
use crate::quiz::report::Report;
use crate::quiz::State;


pub struct ResultsState<O> {
    report: Report,
    celebration: Option<Animation>,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(report: Report, celebration: Option<Animation>, output: O) -> Self {
        ResultsState {
            report,
            celebration,
            output,
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        if let Some(animation) = &self.celebration {
            self.output.show_animation(animation);
        }
        self.output
            .say(&Message::GameResults(self.report.clone()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
