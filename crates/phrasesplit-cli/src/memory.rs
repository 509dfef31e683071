//! Core dump prevention
//!
//! A crash while a phrase is in memory must not write it to disk, so the
//! binary calls [`disable_core_dumps`] before reading any input. Failure is
//! logged and tolerated: containers and unprivileged users may not permit it.

use std::sync::atomic::{AtomicBool, Ordering};

static CORE_DUMPS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable core dumps for the current process.
///
/// Returns `true` if core dumps are disabled after the call.
pub fn disable_core_dumps() -> bool {
    if CORE_DUMPS_DISABLED.load(Ordering::SeqCst) {
        return true;
    }

    let disabled = platform::disable_core_dumps_impl();
    if disabled {
        CORE_DUMPS_DISABLED.store(true, Ordering::SeqCst);
    }
    disabled
}

#[cfg(unix)]
mod platform {
    pub fn disable_core_dumps_impl() -> bool {
        let rlim = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        // SAFETY: setrlimit reads a valid, fully initialised rlimit struct
        let result = unsafe { libc::setrlimit(libc::RLIMIT_CORE, &rlim) };
        if result != 0 {
            log::warn!(
                "Failed to disable core dumps: {}",
                std::io::Error::last_os_error()
            );
            return false;
        }
        log::debug!("Core dumps disabled");
        true
    }
}

#[cfg(not(unix))]
mod platform {
    pub fn disable_core_dumps_impl() -> bool {
        log::warn!("Core dump prevention not supported on this platform");
        false
    }
}
