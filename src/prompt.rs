//! User input and interaction handling.
//!
//! A [`Prompter`] only reads raw lines. Validation and the retry loop live in
//! [`Asker`], so any input source gets the same behavior.

use dialoguer::Input;
use log::debug;
use std::collections::VecDeque;
use std::io;

use crate::answer::{Answer, Decision, Identifier, Rule};
use crate::error::{Error, Result};
use crate::interrupt::Interrupt;
use crate::style::{paint, Style};

/// A question put to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    /// Extra line shown under the prompt
    pub note: Option<String>,
    pub rule: Rule,
}

impl Question {
    pub fn new<S: Into<String>>(prompt: S, rule: Rule) -> Self {
        Self { prompt: prompt.into(), note: None, rule }
    }

    pub fn yes_no<S: Into<String>>(prompt: S) -> Self {
        Self::new(prompt, Rule::YesNo)
    }

    pub fn text<S: Into<String>>(prompt: S) -> Self {
        Self::new(prompt, Rule::Text)
    }

    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Lines displayed under the prompt.
    pub fn hints(&self) -> impl Iterator<Item = &str> {
        self.note.as_deref().into_iter().chain(self.rule.hint())
    }
}

/// Source of raw operator input.
pub trait Prompter {
    /// Displays `question` and returns the line typed in response.
    fn read_line(&mut self, question: &Question) -> Result<String>;
}

/// Reads answers from the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn read_line(&mut self, question: &Question) -> Result<String> {
        println!();
        for hint in question.hints() {
            println!("{}", paint(hint, Style::Hint));
        }
        Input::<String>::new()
            .with_prompt(&question.prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
                    Error::Interrupted
                }
                e => Error::PromptError(e.to_string()),
            })
    }
}

/// Replays a fixed list of answers and records the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), asked: Vec::new() }
    }

    /// Prompts of every question asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.prompt.clone());
        self.answers.pop_front().ok_or_else(|| {
            Error::PromptError(format!("no scripted answer left for '{}'", question.prompt))
        })
    }
}

/// Asks questions until the input passes validation.
pub struct Asker<'a> {
    prompter: &'a mut dyn Prompter,
    interrupt: &'a Interrupt,
}

impl<'a> Asker<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, interrupt: &'a Interrupt) -> Self {
        Self { prompter, interrupt }
    }

    /// Reads one line without validation.
    ///
    /// # Errors
    /// * `Error::Interrupted` if the run was cancelled before or during the read
    pub fn read_raw(&mut self, question: &Question) -> Result<String> {
        self.interrupt.check()?;
        let line = self.prompter.read_line(question)?;
        self.interrupt.check()?;
        Ok(line)
    }

    /// Asks `question` again, after the rule's retry notice, until its rule accepts the input.
    pub fn ask(&mut self, question: &Question) -> Result<Answer> {
        loop {
            let raw = self.read_raw(question)?;
            match question.rule.validate(&raw) {
                Some(answer) => return Ok(answer),
                None => {
                    debug!("Rejected answer {raw:?} for {:?}", question.rule);
                    self.notify_retry(question.rule.retry_notice());
                }
            }
        }
    }

    pub fn ask_decision(&mut self, question: &Question) -> Result<Decision> {
        self.ask(question)?.decision().ok_or_else(|| {
            Error::PromptError(format!("'{}' is not a yes/no question", question.prompt))
        })
    }

    pub fn ask_identifier(&mut self, question: &Question) -> Result<Identifier> {
        self.ask(question)?.identifier().cloned().ok_or_else(|| {
            Error::PromptError(format!("'{}' does not ask for an identifier", question.prompt))
        })
    }

    pub fn notify_retry(&self, notice: &str) {
        println!("\n{}", paint(notice, Style::Error));
    }
}
