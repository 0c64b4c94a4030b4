// Prompt/answer plumbing between the session and the console

use crate::display::{print_confirmation, print_error_line, print_retry_prompt};
use crate::input::{InputIssue, TokenReader};
use crate::session_errors::SessionResult;
use log::debug;
use std::io::{BufRead, Write};

/// Prompt labels are padded so every colon lines up
pub const LABEL_WIDTH: usize = 42;

pub struct Prompter<R, W> {
    input: TokenReader<R>,
    out: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(source: R, out: W, use_color: bool) -> Self {
        Self {
            input: TokenReader::new(source),
            out,
            use_color,
        }
    }

    /// Show a label and leave the cursor after its colon
    pub fn ask(&mut self, label: &str) -> SessionResult<()> {
        write!(self.out, "{:<width$}: ", label, width = LABEL_WIDTH)?;
        self.out.flush()?;
        Ok(())
    }

    /// Ask once, then keep reading until `accept` takes an answer
    pub fn read_valid<T, F>(&mut self, label: &str, mut accept: F) -> SessionResult<T>
    where
        F: FnMut(&str) -> Result<T, InputIssue>,
    {
        self.ask(label)?;
        loop {
            let token = self.input.next_token()?;
            match accept(&token) {
                Ok(value) => return Ok(value),
                Err(issue) => {
                    debug!("Rejected {:?} at '{}': {:?}", token, label, issue);
                    self.retry(issue)?;
                }
            }
        }
    }

    /// Raw answer, for menus that judge it themselves
    pub fn read_token(&mut self, label: &str) -> SessionResult<String> {
        self.ask(label)?;
        self.input.next_token()
    }

    pub fn retry(&mut self, issue: InputIssue) -> SessionResult<()> {
        let message = match issue {
            InputIssue::OutOfRange => "Out of range, try again",
            InputIssue::Malformed => "Not a number, try again",
        };
        print_retry_prompt(&mut self.out, message, self.use_color)?;
        Ok(())
    }

    pub fn retry_with(&mut self, message: &str) -> SessionResult<()> {
        print_retry_prompt(&mut self.out, message, self.use_color)?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> SessionResult<()> {
        print_error_line(&mut self.out, message, self.use_color)?;
        Ok(())
    }

    pub fn confirm(&mut self, message: &str) -> SessionResult<()> {
        print_confirmation(&mut self.out, message, self.use_color)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> SessionResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn out_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_out(self) -> W {
        self.out
    }
}
