//! SIGINT handling
//!
//! The handler is async-signal-safe: it only sets an atomic flag. It is
//! installed without SA_RESTART so a blocking terminal read returns
//! `ErrorKind::Interrupted` and the menu loop can unwind into the clean
//! informational exit instead of dying mid-prompt.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the Ctrl-C handler. Call once at program start.
#[cfg(unix)]
pub fn install() {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handle_sigint as usize;
        libc::sigemptyset(&mut action.sa_mask);
        action.sa_flags = 0;
        libc::sigaction(libc::SIGINT, &action, std::ptr::null_mut());
    }
}

/// No handler outside unix; Ctrl-C terminates the process directly.
#[cfg(not(unix))]
pub fn install() {}

#[cfg(unix)]
extern "C" fn handle_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Check whether Ctrl-C has been pressed since startup.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_flag_set_by_raised_signal() {
        install();
        assert!(!interrupted());

        unsafe {
            libc::raise(libc::SIGINT);
        }

        assert!(interrupted());
    }
}
