use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Install listeners for SIGINT and SIGTERM.
///
/// The returned flag is raised once either signal is received; the enumeration controller polls it
/// and stops the run with the solutions found so far.
pub(crate) fn install() -> std::io::Result<Arc<AtomicBool>> {
    // The signals to listen to for termination.
    const TERMINATION_SIGNALS: &[std::ffi::c_int] =
        &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

    let signal_received = Arc::new(AtomicBool::new(false));

    for &signal in TERMINATION_SIGNALS {
        let _ = signal_hook::flag::register(signal, Arc::clone(&signal_received))?;
    }

    Ok(signal_received)
}
