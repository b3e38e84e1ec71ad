//! Interactive console front-end.
//!
//! Reads one line per turn, prints the reply and stops on an exit phrase or
//! end of input. Input and output are generic so sessions can be driven from
//! tests with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use matcher::{ReplySelector, Responder, is_exit_phrase};
use tracing::debug;

use crate::config::ConsoleYamlConfig;

pub const PROMPT: &str = "You: ";
pub const EOF_FAREWELL: &str = "Goodbye!";

/// How replies are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Typing {
    /// Pause before the reply starts printing.
    pub delay: Duration,
    /// Pause after each character of the reply.
    pub char_delay: Duration,
}

impl Typing {
    /// Print replies at once.
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConsoleYamlConfig) -> Self {
        if config.typing {
            Self {
                delay: config.typing_delay(),
                char_delay: config.char_delay(),
            }
        } else {
            Self::instant()
        }
    }

    fn is_instant(&self) -> bool {
        self.delay.is_zero() && self.char_delay.is_zero()
    }
}

/// How a chat session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed an exit phrase.
    ExitPhrase,
    /// Input ran out.
    EndOfInput,
}

/// Runs a chat session until an exit phrase or end of input.
///
/// Prints the banner, then for each line a `You: ` prompt and
/// `"{name}: {reply}"`. The reply to an exit phrase is printed before the
/// session ends. At end of input `Goodbye!` is printed on a fresh line.
pub fn run_chat<S, R, W>(
    responder: &Responder<S>,
    name: &str,
    typing: Typing,
    mut input: R,
    mut output: W,
) -> io::Result<SessionEnd>
where
    S: ReplySelector,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{name} — type 'exit' or 'quit' to stop")?;

    let mut line = String::new();
    let mut turns = 0usize;
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "{EOF_FAREWELL}")?;
            debug!(turns, "session_eof");
            return Ok(SessionEnd::EndOfInput);
        }
        let raw = line.trim_end_matches(['\n', '\r']);
        turns += 1;

        let reply = responder.respond(raw);
        print_reply(&mut output, name, &reply, typing)?;

        if is_exit_phrase(raw) {
            debug!(turns, "session_exit");
            return Ok(SessionEnd::ExitPhrase);
        }
    }
}

/// Writes `"{name}: {reply}"` followed by a newline, optionally with a
/// typing effect. The written text is identical either way.
pub fn print_reply<W: Write>(
    output: &mut W,
    name: &str,
    reply: &str,
    typing: Typing,
) -> io::Result<()> {
    if typing.is_instant() {
        return writeln!(output, "{name}: {reply}");
    }

    sleep(typing.delay);
    write!(output, "{name}: ")?;
    output.flush()?;
    let mut buf = [0u8; 4];
    for ch in reply.chars() {
        output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        output.flush()?;
        sleep(typing.char_delay);
    }
    writeln!(output)
}

fn sleep(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
