//! Terminal interaction.
//! The question flow talks to the user through the [`Prompter`] trait so it can
//! be driven by a script in tests.

use crate::error::Result;
use dialoguer::{Input, Select};

/// Source of answers for the question flow.
pub trait Prompter {
    /// Asks the user to pick one of `items` and returns its index.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Asks the user for a line of text.
    fn text(&self, prompt: &str) -> Result<String>;
}

/// Prompter backed by `dialoguer` widgets.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).default(0).items(items).interact()?)
    }

    fn text(&self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
    }
}
