//! # Minibuffer hosts
//!
//! ## Overview
//!
//! Reading the user's choice and showing status messages are left to the host application
//! through the [Minibuffer] trait. An editor would implement it using its own echo area and
//! input loop; [TerminalMinibuffer] is provided for programs running directly in a terminal.
use std::io::{self, Stdout, Write};

use crossterm::{
    event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Print,
    QueueableCommand,
};

use crate::errors::{MenuError, MenuResult};
use crate::prompt::wrap_prompt;

/// The host's prompt and message area.
pub trait Minibuffer {
    /// Show `prompt` and block until the user presses one of `choices`.
    ///
    /// Keys outside of `choices` must not end the read.
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> MenuResult<char>;

    /// Show a status message to the user.
    fn echo(&mut self, msg: &str) -> MenuResult<()>;
}

impl<M: Minibuffer + ?Sized> Minibuffer for &mut M {
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> MenuResult<char> {
        (**self).read_choice(prompt, choices)
    }

    fn echo(&mut self, msg: &str) -> MenuResult<()> {
        (**self).echo(msg)
    }
}

/// Return the character typed by a key event, if it's a plain character.
///
/// Shifted characters count, since SHIFT is already reflected in the character itself.
pub fn choice_char(ke: &KeyEvent) -> Option<char> {
    if let KeyCode::Char(c) = ke.code {
        if (ke.modifiers - KeyModifiers::SHIFT).is_empty() {
            return Some(c);
        }
    }

    None
}

/// Whether a key event should interrupt the prompt: `^C` or `^G`.
pub fn is_interrupt(ke: &KeyEvent) -> bool {
    match ke.code {
        KeyCode::Char('c' | 'g') => ke.modifiers == KeyModifiers::CONTROL,
        _ => false,
    }
}

/// A [Minibuffer] that prompts on a terminal using [crossterm].
pub struct TerminalMinibuffer<W: Write = Stdout> {
    out: W,
}

impl TerminalMinibuffer<Stdout> {
    /// Create a minibuffer that writes to standard output.
    pub fn new() -> Self {
        TerminalMinibuffer { out: io::stdout() }
    }
}

impl Default for TerminalMinibuffer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalMinibuffer<W> {
    /// Create a minibuffer that writes prompts and messages to `out`.
    pub fn with_writer(out: W) -> Self {
        TerminalMinibuffer { out }
    }

    fn linebreak(&mut self) -> Result<(), io::Error> {
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;

        Ok(())
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<(), io::Error> {
        let cols = crossterm::terminal::size().map(|(w, _)| w as usize).unwrap_or(0);
        let lines = wrap_prompt(prompt, cols);

        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.out.queue(Print("\r\n"))?;
            }

            self.out.queue(Print(line.as_ref()))?;
        }

        self.out.queue(Print(" "))?;
        self.out.flush()?;

        Ok(())
    }

    fn wait(&mut self, choices: &[char]) -> MenuResult<char> {
        loop {
            match read()? {
                Event::Key(ke) => {
                    if ke.kind == KeyEventKind::Release {
                        continue;
                    }

                    if is_interrupt(&ke) {
                        return Err(MenuError::Interrupted);
                    }

                    match choice_char(&ke) {
                        Some(c) if choices.contains(&c) => return Ok(c),
                        _ => {
                            tracing::trace!(?ke, "ignoring key outside of menu choices");
                        },
                    }
                },
                Event::FocusGained | Event::FocusLost => {
                    // Do nothing for now.
                },
                Event::Mouse(_) | Event::Paste(_) | Event::Resize(_, _) => {
                    // Do nothing for now.
                },
            }
        }
    }
}

impl<W: Write> Minibuffer for TerminalMinibuffer<W> {
    fn read_choice(&mut self, prompt: &str, choices: &[char]) -> MenuResult<char> {
        self.show_prompt(prompt)?;

        crossterm::terminal::enable_raw_mode()?;

        let res = self.wait(choices);

        crossterm::terminal::disable_raw_mode()?;

        if let Ok(c) = res {
            self.out.queue(Print(c))?;
        }

        self.linebreak()?;

        return res;
    }

    fn echo(&mut self, msg: &str) -> MenuResult<()> {
        self.out.queue(Print(msg))?;
        self.linebreak()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! key_event {
        ($kc: expr) => {
            KeyEvent::new($kc, KeyModifiers::NONE)
        };
        ($kc: expr, $km: expr) => {
            KeyEvent::new($kc, $km)
        };
    }

    #[test]
    fn test_choice_char() {
        assert_eq!(choice_char(&key_event!(KeyCode::Char('k'))), Some('k'));
        assert_eq!(choice_char(&key_event!(KeyCode::Char('K'), KeyModifiers::SHIFT)), Some('K'));

        // Modified characters and special keys aren't choices.
        assert_eq!(choice_char(&key_event!(KeyCode::Char('k'), KeyModifiers::CONTROL)), None);
        assert_eq!(choice_char(&key_event!(KeyCode::Char('k'), KeyModifiers::ALT)), None);
        assert_eq!(choice_char(&key_event!(KeyCode::Enter)), None);
        assert_eq!(choice_char(&key_event!(KeyCode::Esc)), None);
        assert_eq!(choice_char(&key_event!(KeyCode::F(1))), None);
    }

    #[test]
    fn test_is_interrupt() {
        assert!(is_interrupt(&key_event!(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_interrupt(&key_event!(KeyCode::Char('g'), KeyModifiers::CONTROL)));

        assert!(!is_interrupt(&key_event!(KeyCode::Char('c'))));
        assert!(!is_interrupt(&key_event!(KeyCode::Char('x'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&key_event!(KeyCode::Esc)));
    }

    #[test]
    fn test_show_prompt() {
        let mut mb = TerminalMinibuffer::with_writer(Vec::<u8>::new());

        mb.show_prompt("M: [a] A, [q] Quit").unwrap();

        let out = String::from_utf8(mb.out).unwrap();
        assert_eq!(out, "M: [a] A, [q] Quit ");
    }

    #[test]
    fn test_echo() {
        let mut mb = TerminalMinibuffer::with_writer(Vec::<u8>::new());

        mb.echo("Aborted").unwrap();
        mb.echo("Configure menus first").unwrap();

        let out = String::from_utf8(mb.out).unwrap();
        assert_eq!(out, "Aborted\r\nConfigure menus first\r\n");
    }
}
