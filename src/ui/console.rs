//! Line-based I/O seam between the window/dialog and the terminal.

use crate::ui::messages::{self, Level};
use std::io::{self, BufRead, StdinLock, Write};

pub trait Console {
    /// Ask for one line. `None` means input is exhausted, which every
    /// caller treats as "cancel".
    fn prompt(&mut self, label: &str) -> Option<String>;

    /// Print plain text (the grid, menus).
    fn show(&mut self, text: &str);

    /// Print a message the way a message box would be shown.
    fn notify(&mut self, level: Level, text: &str);

    fn heading(&mut self, text: &str) {
        self.show(text);
    }
}

/// Ask a yes/no confirmation; anything but y/yes is a no.
pub fn confirm<C: Console + ?Sized>(console: &mut C, question: &str) -> bool {
    console.notify(Level::Warning, question);
    let answer = console.prompt("Confirm [y/N]: ");
    matches!(
        answer.map(|s| s.trim().to_lowercase()).as_deref(),
        Some("y" | "yes")
    )
}

/// Console over a buffered reader and stdout.
pub struct TerminalConsole<R: BufRead> {
    input: R,
}

impl TerminalConsole<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalConsole<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{}", label);
        let _ = io::stdout().flush();

        // Undecodable bytes become U+FFFD; the line is still answered.
        let mut raw = Vec::new();
        match self.input.read_until(b'\n', &mut raw) {
            Ok(0) => {
                println!();
                None
            }
            Ok(_) => {
                let line = String::from_utf8_lossy(&raw);
                Some(line.trim_end_matches(['\r', '\n']).to_string())
            }
            Err(e) => {
                messages::error(format!("Failed to read input: {}", e));
                None
            }
        }
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn notify(&mut self, level: Level, text: &str) {
        messages::notify(level, text);
    }

    fn heading(&mut self, text: &str) {
        messages::header(text);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedConsole;
    use super::*;

    #[test]
    fn confirm_accepts_only_yes() {
        for (answer, expected) in [("y", true), ("YES", true), ("n", false), ("", false)] {
            let mut c = ScriptedConsole::new(&[answer]);
            assert_eq!(confirm(&mut c, "Delete?"), expected, "answer {answer:?}");
        }
        let mut exhausted = ScriptedConsole::new(&[]);
        assert!(!confirm(&mut exhausted, "Delete?"));
    }

    #[test]
    fn terminal_console_strips_line_endings_and_reports_eof() {
        let mut c = TerminalConsole::new("7\r\nPaint\n".as_bytes());
        assert_eq!(c.prompt("").as_deref(), Some("7"));
        assert_eq!(c.prompt("").as_deref(), Some("Paint"));
        assert_eq!(c.prompt(""), None);
    }

    #[test]
    fn invalid_utf8_line_is_decoded_not_treated_as_eof() {
        let mut c = TerminalConsole::new(&b"\xff\xfe\nq\n"[..]);
        assert_eq!(c.prompt("").as_deref(), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(c.prompt("").as_deref(), Some("q"));
        assert_eq!(c.prompt(""), None);
    }
}
