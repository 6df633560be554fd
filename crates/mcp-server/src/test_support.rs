#[cfg(test)]
use std::sync::Mutex;

/// Tests that read or write `CONTENT_SOURCE_*` must hold this lock; env vars are per-process.
#[cfg(test)]
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());
