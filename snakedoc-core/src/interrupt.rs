use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the CLI's signal handlers; checked by `apply_plan` between copies.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Ask the running copy loop to stop before its next file.
pub fn request_interrupt() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Clear a pending interrupt request.
pub fn reset_interrupt() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
