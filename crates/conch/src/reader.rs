//! The line-reading/printing adapter the runtime loop talks to.
//!
//! The loop itself only needs three things: read one line (or learn that
//! input is exhausted), print a piece of transcript, and clear the
//! transcript. [`TermConsole`] is the interactive default; hosts that
//! script a shell, and this crate's own tests, use [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use console::Term;

/// Line I/O for one shell instance.
pub trait Console: Send {
    /// Prints the prompt and reads one line, without its terminator.
    ///
    /// Returns `Ok(None)` when input is exhausted; the shell treats that
    /// as a request to stop.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Prints one piece of transcript text, with a trailing newline.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Clears the visible transcript.
    fn clear(&mut self) -> io::Result<()>;
}

/// The interactive console: prompt and output through [`console::Term`],
/// input from stdin.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    /// A console on the process's stdout.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Console for TermConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.term.clear_screen()
    }
}

/// A console fed from a fixed list of lines, recording everything the
/// shell prints. Reading past the last line reports end of input.
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    transcript: Arc<Mutex<String>>,
}

impl ScriptedConsole {
    /// A console that will serve the given lines in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: Arc::new(Mutex::new(String::new())),
        }
    }

    /// A handle to the recorded transcript, usable after the shell has
    /// consumed the console.
    pub fn transcript(&self) -> Transcript {
        Transcript(Arc::clone(&self.transcript))
    }
}

/// Shared view of a [`ScriptedConsole`]'s recorded output.
#[derive(Clone)]
pub struct Transcript(Arc<Mutex<String>>);

impl Transcript {
    /// The transcript recorded so far.
    pub fn contents(&self) -> String {
        self.0.lock().expect("transcript lock poisoned").clone()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut transcript = self.transcript.lock().expect("transcript lock poisoned");
        transcript.push_str(text);
        transcript.push('\n');
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.transcript
            .lock()
            .expect("transcript lock poisoned")
            .clear();
        Ok(())
    }
}
