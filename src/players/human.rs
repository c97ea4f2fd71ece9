//! Human player: ask, validate, re-ask.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::trace;

use crate::core::Decision;
use crate::error::PigError;

use super::{DecisionMaker, TurnView};

pub const PROMPT: &str = "Do you want to roll or hold? (r/h): ";
pub const NOT_UNDERSTOOD: &str = "Sorry, I don't understand.";

/// Text channel to a person.
pub trait InputSource {
    /// Show `prompt` and read one response. `Ok(None)` means the channel
    /// is closed.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a line of text.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

/// Stdin/stdout terminal.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }
}

/// Canned responses, recording everything shown.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    responses: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Responses not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl InputSource for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.responses.pop_front())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}

/// A seat controlled by a person.
#[derive(Debug)]
pub struct HumanPlayer<I> {
    input: I,
}

impl<I: InputSource> HumanPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: InputSource> DecisionMaker for HumanPlayer<I> {
    fn decide(&mut self, view: &TurnView<'_>) -> Result<Decision, PigError> {
        self.input.say(&format!("---{}---", view.name))?;

        loop {
            let Some(response) = self.input.ask(PROMPT)? else {
                return Err(PigError::InputClosed {
                    player: view.name.to_string(),
                });
            };

            if let Some(decision) = Decision::parse(&response) {
                return Ok(decision);
            }

            trace!("rejected response {response:?}");
            self.input.say(NOT_UNDERSTOOD)?;
        }
    }
}
