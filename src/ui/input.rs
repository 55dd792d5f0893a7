//! User input abstraction layer
//!
//! Prompts used outside the dashboard (the `list --pick` picker) go through
//! [`UserInput`] so the picking logic can be driven by a scripted input in
//! tests.

use std::io;

/// Trait for interactive prompts
///
/// Every method returns `Ok(None)` when the user cancels (Esc or `q`).
///
/// # Examples
///
/// ```no_run
/// use adlens::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let items = vec!["Concept".to_string(), "Audio - Type".to_string()];
/// if let Some(index) = input.prompt_select("Category", &items, None).unwrap() {
///     println!("Picked {}", items[index]);
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user to pick one item
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of selected item
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;

    /// Prompt user to tick any number of items
    ///
    /// `checked` gives the initial state of each item and must be as long
    /// as `items`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Vec<usize>))` - Indices of ticked items, ascending
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        use dialoguer::MultiSelect;

        if checked.len() != items.len() {
            return Err(InputError::Invalid(format!(
                "{} check states for {} items",
                checked.len(),
                items.len()
            )));
        }

        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(checked)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
    }

    #[test]
    fn test_multi_select_rejects_mismatched_defaults() {
        let input = DialoguerInput::new();
        let items = vec!["a".to_string(), "b".to_string()];
        let result = input.prompt_multi_select("pick", &items, &[true]);
        assert!(matches!(result, Err(InputError::Invalid(_))));
    }
}
