use once_cell::sync::Lazy;
use parking_lot::ReentrantMutex;
use std::sync::atomic::{AtomicBool, Ordering};

// Process-lifetime state; there is no corresponding teardown.
static RUNTIME_LOCK: Lazy<ReentrantMutex<()>> = Lazy::new(|| ReentrantMutex::new(()));
static RUNTIME_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Registers the process-wide geometry runtime, at most once per process.
///
/// The native geometry library behind [`crate::GeoShape`] needs a one-time
/// process-level setup before shapes are materialized. This guard makes
/// that setup lazy, idempotent, and safe against reentrant calls: the lock
/// is reentrant, so registration triggered from within a registration
/// callback does not deadlock.
///
/// # Returns
/// `true` if this call performed the registration, `false` if the runtime
/// was already registered.
pub fn register_geometry_runtime() -> bool {
    let _guard = RUNTIME_LOCK.lock();
    if RUNTIME_REGISTERED.swap(true, Ordering::SeqCst) {
        return false;
    }
    log::debug!("geometry runtime registered");
    true
}

/// Checks whether the geometry runtime has been registered.
pub fn is_geometry_runtime_registered() -> bool {
    RUNTIME_REGISTERED.load(Ordering::SeqCst)
}
