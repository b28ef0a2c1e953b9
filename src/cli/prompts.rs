//! Warnings, confirmations and prompts for CLI output.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

#[derive(Debug, Clone, Copy)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Interactive prompts are skipped in quiet mode or when stdin is not a tty.
    fn skip_prompt(&self) -> bool {
        self.quiet || !io::stdin().is_tty()
    }

    /// Print a warning message to stderr (yellow) - suppressed in quiet mode
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", msg.yellow());
        }
    }

    /// Errors are always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    pub fn settings_saved(&self) {
        if !self.quiet {
            println!("Settings saved as defaults.");
        }
    }

    pub fn clipboard_copied(&self, count: usize) {
        if !self.quiet {
            let what = if count == 1 { "Password" } else { "Passwords" };
            println!("*** {what} copied to clipboard ***");
        }
    }

    /// Ask whether to print when the clipboard is unavailable. Returns true to
    /// print, false to abort. Non-interactive sessions print without asking.
    pub fn clipboard_fallback_prompt(&self) -> bool {
        if self.skip_prompt() {
            return true;
        }

        eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
        let _ = io::stderr().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return true;
        }

        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}
