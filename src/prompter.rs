//! Prompter capability: the interactive parameter/confirmation source.
//!
//! The orchestration core never talks to a user directly. Every question it
//! needs answered during a run (interface identifiers, VLANs, descriptions,
//! yes/no confirmations) goes through this trait, so the per-device protocol
//! is testable with a scripted, non-interactive double and deployable without
//! a UI at all.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

/// Interactive capability consumed by the task protocol.
///
/// Implementations may block on a human (dialog, terminal) or answer from a
/// pre-supplied parameter source like [`ScriptedPrompter`]. An empty or
/// `None` answer to a required question aborts that device's task with a
/// `Skipped` outcome.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask for a free-text value. `None` means the prompt was dismissed.
    async fn ask_text(&self, title: &str, message: &str) -> Option<String>;

    /// Ask a yes/no question.
    async fn ask_yes_no(&self, title: &str, message: &str) -> bool;

    /// Present informational text.
    async fn show_info(&self, title: &str, message: &str);

    /// Present an error to the operator.
    async fn show_error(&self, title: &str, message: &str);
}

/// A non-interactive [`Prompter`] answering from pre-supplied queues.
///
/// Text answers and yes/no answers are consumed in order, one per question.
/// An exhausted queue answers `None` / `false`, which reads as "prompt
/// dismissed" to the protocol. Shown info and error messages are recorded
/// for inspection.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    texts: Mutex<VecDeque<Option<String>>>,
    answers: Mutex<VecDeque<bool>>,
    infos: Mutex<Vec<(String, String)>>,
    errors: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    /// Create an empty scripted prompter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.texts.lock().unwrap().push_back(Some(text.into()));
        self
    }

    /// Queue a dismissed text prompt.
    pub fn with_dismissed_text(self) -> Self {
        self.texts.lock().unwrap().push_back(None);
        self
    }

    /// Queue a yes/no answer.
    pub fn with_answer(self, yes: bool) -> Self {
        self.answers.lock().unwrap().push_back(yes);
        self
    }

    /// Info messages shown so far, as (title, message) pairs.
    pub fn infos(&self) -> Vec<(String, String)> {
        self.infos.lock().unwrap().clone()
    }

    /// Error messages shown so far, as (title, message) pairs.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask_text(&self, _title: &str, _message: &str) -> Option<String> {
        self.texts.lock().unwrap().pop_front().flatten()
    }

    async fn ask_yes_no(&self, _title: &str, _message: &str) -> bool {
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }

    async fn show_info(&self, title: &str, message: &str) {
        self.infos
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }

    async fn show_error(&self, title: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}
