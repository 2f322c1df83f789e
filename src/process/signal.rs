use super::ProcessError;

use libc::{sighandler_t, signal, SIGINT, SIG_ERR};

extern "C" fn ignore_sigint(_: i32) {
    // The foreground child owns the terminal and receives the interrupt
    // itself; the shell stays alive.
}

pub fn install_sigint_handler() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, ignore_sigint as sighandler_t) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalError(
            "failed to install SIGINT handler".to_string(),
        ));
    }
    Ok(())
}
