//! Command-line front end: flags over saved settings, output to terminal or clipboard.

mod context;
mod flags;
mod prompts;

use std::io;

use thiserror::Error;

pub use context::Context;
pub use flags::CliFlags;
pub use prompts::Prompts;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] safepass::Error),

    #[error("failed to read password from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The user declined to continue; not a failure.
    #[error("aborted")]
    Aborted,
}

/// Run the CLI with parsed flags.
pub fn run(flags: CliFlags) -> Result<(), CliError> {
    let mut context = Context::new(flags);
    let result = context.run();
    if let Err(ref e) = result
        && !matches!(e, CliError::Aborted)
    {
        context.prompts().error(&e.to_string());
    }
    result
}
