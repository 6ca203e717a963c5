use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::decorations::Animation;
use crate::output::{AudioCue, Message, QuizOutput, Theme};

#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Text(Message),
    Audio(AudioCue),
    Animation(Animation),
    Theme(Theme),
}

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn flush_messages(&self) -> Vec<Message> {
        self.flush()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Text(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| matches!(entry, Entry::Text(m) if m == message))
    }

    pub fn played_audio(&self) -> Vec<AudioCue> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Audio(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub fn is_playing_audio(&self, cue: AudioCue) -> bool {
        self.played_audio().last() == Some(&cue)
    }

    pub fn shown_animations(&self) -> Vec<Animation> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Animation(animation) => Some(animation.clone()),
                _ => None,
            })
            .collect()
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(Entry::Text(message.clone()));
    }

    fn play_audio(&self, cue: AudioCue) -> Result<()> {
        self.entries.write().push(Entry::Audio(cue));
        Ok(())
    }

    fn show_animation(&self, animation: &Animation) {
        self.entries
            .write()
            .push(Entry::Animation(animation.clone()));
    }

    fn set_theme(&self, theme: Theme) {
        self.entries.write().push(Entry::Theme(theme));
    }
}
