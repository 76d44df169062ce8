//! Narration
//!
//! Renders the demo conversation. The demo script only talks to the
//! [`Narrator`] trait, so the console renderer can be swapped for a recorder
//! in tests or a different front-end.

use agentdesk_config::{NarrationConfig, PacingConfig};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("narration output failed: {0}")]
    Io(#[from] io::Error),
}

/// Presentation adapter for the scripted conversation.
pub trait Narrator {
    /// Stage banner.
    fn header(&mut self, title: &str) -> Result<(), NarrationError>;

    /// A plain line of narration.
    fn say(&mut self, line: &str) -> Result<(), NarrationError>;

    /// Something the user says or does.
    fn user_action(&mut self, action: &str) -> Result<(), NarrationError>;

    /// An assistant reply: an intro sentence followed by its items.
    fn assistant_response(
        &mut self,
        intro: &str,
        items: &[String],
        numbered: bool,
    ) -> Result<(), NarrationError>;

    /// Hold the scene so the reader can catch up.
    fn linger(&mut self) -> Result<(), NarrationError>;

    /// Wait for the reader before moving to the next stage.
    fn pause(&mut self) -> Result<(), NarrationError>;
}

/// Writes the conversation to a terminal-like sink.
pub struct ConsoleNarrator<W, R> {
    out: W,
    input: R,
    pacing: PacingConfig,
    assistant_name: String,
    banner_width: usize,
}

impl<W: Write, R: BufRead> ConsoleNarrator<W, R> {
    pub fn new(out: W, input: R, narration: &NarrationConfig, pacing: PacingConfig) -> Self {
        Self {
            out,
            input,
            pacing,
            assistant_name: narration.assistant_name.clone(),
            banner_width: narration.banner_width,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait(&mut self, delay: Duration) -> Result<(), NarrationError> {
        if !delay.is_zero() {
            self.out.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }
}

impl<W: Write, R: BufRead> Narrator for ConsoleNarrator<W, R> {
    fn header(&mut self, title: &str) -> Result<(), NarrationError> {
        let rule = "=".repeat(self.banner_width);
        let inner = self.banner_width.saturating_sub(6);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "|| {:^width$} ||", title, width = inner)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)?;
        self.wait(self.pacing.header())
    }

    fn say(&mut self, line: &str) -> Result<(), NarrationError> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn user_action(&mut self, action: &str) -> Result<(), NarrationError> {
        writeln!(self.out, "USER: \"{}\"", action)?;
        self.wait(self.pacing.user_action())
    }

    fn assistant_response(
        &mut self,
        intro: &str,
        items: &[String],
        numbered: bool,
    ) -> Result<(), NarrationError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}: \"{}\"", self.assistant_name, intro)?;
        for (idx, item) in items.iter().enumerate() {
            if numbered {
                writeln!(self.out, "  {}. {}", idx + 1, item)?;
            } else {
                writeln!(self.out, "  {}", item)?;
            }
            self.wait(self.pacing.item())?;
        }
        writeln!(self.out)?;
        self.wait(self.pacing.response())
    }

    fn linger(&mut self) -> Result<(), NarrationError> {
        self.wait(self.pacing.scene())
    }

    fn pause(&mut self) -> Result<(), NarrationError> {
        if !self.pacing.interactive {
            return Ok(());
        }
        write!(self.out, "\nPress Enter to continue...")?;
        self.out.flush()?;
        let mut line = String::new();
        // EOF counts as Enter
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
