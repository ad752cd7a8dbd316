//! Platform-specific process environment.

#[cfg(unix)]
use std::sync::atomic::{AtomicI32, Ordering};

/// Message printed when the user interrupts a run.
pub const INTERRUPT_MESSAGE: &str = "Setup interrupted by user";

/// Default Python interpreter name for this platform.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Process group of the child currently running in its own group (0 = none).
#[cfg(unix)]
static ACTIVE_GROUP: AtomicI32 = AtomicI32::new(0);

/// Marks a child's process group as the one to kill on interrupt.
///
/// A child in its own group does not see the terminal's SIGINT, so the
/// handler has to take it down. Unregisters on drop.
#[cfg(unix)]
pub(crate) struct GroupRegistration;

#[cfg(unix)]
impl GroupRegistration {
    pub(crate) fn new(pgid: i32) -> Self {
        ACTIVE_GROUP.store(pgid, Ordering::SeqCst);
        Self
    }
}

#[cfg(unix)]
impl Drop for GroupRegistration {
    fn drop(&mut self) {
        ACTIVE_GROUP.store(0, Ordering::SeqCst);
    }
}

/// SIGKILL every process in group `pgid`. Async-signal-safe.
#[cfg(unix)]
pub(crate) fn kill_group(pgid: i32) {
    if pgid > 0 {
        // SAFETY: kill(2) with a negative pid signals a process group; it has
        // no memory-safety preconditions.
        unsafe {
            libc::kill(-pgid, libc::SIGKILL);
        }
    }
}

/// Install a Ctrl-C handler that reports the interrupt and exits with status 1.
///
/// A launcher child running in its own process group is killed first.
pub fn install_interrupt_handler() {
    #[cfg(unix)]
    {
        extern "C" fn on_sigint(_signal: libc::c_int) {
            kill_group(ACTIVE_GROUP.load(Ordering::SeqCst));
            let msg = format_interrupt_line();
            // SAFETY: write(2) and _exit(2) are async-signal-safe; the buffer
            // is a static byte string that outlives the call.
            unsafe {
                libc::write(libc::STDERR_FILENO, msg.as_ptr().cast(), msg.len());
                libc::_exit(1);
            }
        }

        let handler = on_sigint as extern "C" fn(libc::c_int);
        // SAFETY: installing a handler that only performs async-signal-safe calls.
        unsafe {
            libc::signal(libc::SIGINT, handler as libc::sighandler_t);
        }
        tracing::debug!("SIGINT handler installed");
    }
}

#[cfg(unix)]
const fn format_interrupt_line() -> &'static [u8] {
    "\n\n✗ Setup interrupted by user\n".as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }

    #[test]
    fn default_python_is_not_empty() {
        assert!(default_python().starts_with("python"));
    }

    #[cfg(unix)]
    #[test]
    fn kill_group_takes_down_grandchildren() {
        use std::os::unix::process::CommandExt;
        use std::time::{Duration, Instant};

        let start = Instant::now();
        let mut child = std::process::Command::new("sh")
            .args(["-c", "sleep 5 & wait"])
            .process_group(0)
            .spawn()
            .unwrap();

        kill_group(i32::try_from(child.id()).unwrap());
        let status = child.wait().unwrap();

        assert!(!status.success());
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn kill_group_ignores_empty_registration() {
        // 0 would signal our own group.
        kill_group(0);
    }

    #[cfg(unix)]
    #[test]
    fn interrupt_line_carries_message() {
        let line = std::str::from_utf8(format_interrupt_line()).unwrap();
        assert!(line.contains(INTERRUPT_MESSAGE));
    }
}
