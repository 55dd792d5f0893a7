//! Scripted input for testing prompt-driven flows

use super::input::{Result, UserInput};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the item with this label
    Select(String),
    /// Tick exactly the items with these labels
    Tick(Vec<String>),
    /// Cancel the prompt
    Cancel,
}

/// Mock input that replays predetermined answers in order
///
/// A prompt with no answer left, or whose answer doesn't fit it, is treated
/// as cancelled.
#[derive(Debug, Default)]
pub struct MockInput {
    answers: Mutex<VecDeque<Answer>>,
}

impl MockInput {
    #[must_use]
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
        }
    }

    fn next(&self) -> Option<Answer> {
        self.answers.lock().ok().and_then(|mut a| a.pop_front())
    }
}

impl UserInput for MockInput {
    fn prompt_select(
        &self,
        _prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        Ok(match self.next() {
            Some(Answer::Select(label)) => items.iter().position(|i| *i == label),
            _ => None,
        })
    }

    fn prompt_multi_select(
        &self,
        _prompt: &str,
        items: &[String],
        _checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        Ok(match self.next() {
            Some(Answer::Tick(labels)) => Some(
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| labels.contains(item))
                    .map(|(i, _)| i)
                    .collect(),
            ),
            _ => None,
        })
    }
}
