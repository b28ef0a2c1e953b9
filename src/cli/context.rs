//! CLI context - bundles settings, flags, clipboard and random source.

use std::io::{self, BufRead};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use safepass::{Password, SecureRand, StrengthResult};
use zeroize::{Zeroize, Zeroizing};

use super::{CliError, CliFlags, Prompts};
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_top, box_wrapped, strength_line, strength_meter,
};

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    prompts: Prompts,
    clipboard: Option<ClipboardContext>,
    rng: SecureRand,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let prompts = Prompts::new(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts.warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };

        Self {
            settings,
            flags,
            prompts,
            clipboard: None,
            rng: SecureRand::new(),
        }
    }

    pub fn prompts(&self) -> Prompts {
        self.prompts
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.flags.check {
            return self.check_stdin();
        }

        self.flags.apply(&mut self.settings);
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => self.prompts.settings_saved(),
            Err(e) => self.prompts.warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), CliError> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                Ok(())
            }
            Err(e) => {
                info!("clipboard unavailable: {e}");
                if self.prompts.clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(CliError::Aborted)
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), CliError> {
        let request = self.settings.request();
        let count = self.settings.count.max(1);
        debug!(
            "generating {count} password(s) of length {} from {}",
            request.length,
            self.rng.source_name()
        );

        let passwords = (0..count)
            .map(|_| safepass::generate_password_with(&mut self.rng, &request))
            .collect::<Result<Vec<Password>, _>>()?;

        match self.clipboard.as_mut() {
            Some(ctx) => copy_to_clipboard(ctx, &passwords)?,
            None => {
                print_passwords(&passwords, self.flags.quiet);
                return Ok(());
            }
        }

        self.prompts.clipboard_copied(passwords.len());
        if !self.flags.quiet
            && let [password] = passwords.as_slice()
        {
            strength_meter(&safepass::score_password(password.as_str()));
        }
        Ok(())
    }

    /// Score one line read from stdin.
    fn check_stdin(&self) -> Result<(), CliError> {
        let mut line = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut line).map_err(CliError::Stdin)?;

        let password = line.trim_end_matches(['\r', '\n']);
        let result = safepass::score_password(password);

        if self.flags.quiet {
            println!("{} {}", result.score, result.level);
        } else {
            strength_meter(&result);
        }
        Ok(())
    }
}

fn copy_to_clipboard(ctx: &mut ClipboardContext, passwords: &[Password]) -> Result<(), CliError> {
    let mut joined = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let outcome = ctx.set_contents(joined.clone());
    joined.zeroize();
    outcome.map_err(|e| CliError::Clipboard(e.to_string()))?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    info!("copied {} password(s) to the clipboard", passwords.len());
    Ok(())
}

fn print_passwords(passwords: &[Password], quiet: bool) {
    if quiet {
        for password in passwords {
            println!("{password}");
        }
        return;
    }

    if let [password] = passwords {
        box_top("Password");
        box_wrapped(password.as_str());
        box_bottom();
        strength_meter(&safepass::score_password(password.as_str()));
        return;
    }

    let total = passwords.len();
    for (i, password) in passwords.iter().enumerate() {
        let result: StrengthResult = safepass::score_password(password.as_str());
        box_top(&format!("Password {} of {total}", i + 1));
        box_wrapped(password.as_str());
        box_line(&strength_line(&result));
        box_bottom();
    }
}
