//! Process hardening and exit status.

use std::process::ExitCode;

use crate::cli::CliError;

/// Keep generated passwords out of core dumps and same-user ptrace.
pub fn harden() {
    #[cfg(target_os = "linux")]
    {
        let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
        if rc != 0 {
            log::warn!("could not mark process non-dumpable");
        }
    }
}

/// Map the CLI outcome to a process exit status. A declined prompt is not a failure.
pub fn status(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) | Err(CliError::Aborted) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
