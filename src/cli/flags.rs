use clap::{ArgAction, Parser};
use safepass::LengthPolicy;

use crate::settings::Settings;

#[derive(Debug, Default, Parser)]
#[command(
    name = "safepass",
    version,
    about = "Generate random passwords that cover every selected character set"
)]
pub struct CliFlags {
    /// Characters per password (8-128)
    #[arg(short, long, value_name = "N", value_parser = parse_length)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", value_parser = parse_count)]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,

    /// Allow look-alike characters (i l 1 L o 0 O)
    #[arg(long, overrides_with = "exclude_similar")]
    pub include_similar: bool,

    /// Drop look-alike characters (i l 1 L o 0 O)
    #[arg(long, overrides_with = "include_similar")]
    pub exclude_similar: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Read a password from stdin and report its strength
    #[arg(long, conflicts_with_all = ["clipboard", "number", "save"])]
    pub check: bool,

    /// Save the effective options as defaults
    #[arg(long)]
    pub save: bool,

    /// Ignore saved settings for this run
    #[arg(short, long)]
    pub default: bool,

    /// Print bare passwords only
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// Overlay explicit flags on loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(count) = self.number {
            settings.count = count;
        }

        if self.no_lowercase {
            settings.lowercase = false;
        }
        if self.no_uppercase {
            settings.uppercase = false;
        }
        if self.no_numbers {
            settings.numbers = false;
        }
        if self.symbols {
            settings.symbols = true;
        }
        if self.no_symbols {
            settings.symbols = false;
        }
        if self.include_similar {
            settings.exclude_similar = false;
        }
        if self.exclude_similar {
            settings.exclude_similar = true;
        }
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    LengthPolicy::default()
        .check(length)
        .map_err(|e| e.to_string())?;
    Ok(length)
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must generate at least one password".into()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid number: {s}")),
    }
}
