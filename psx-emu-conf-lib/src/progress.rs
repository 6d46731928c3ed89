//! Generation progress reporting.

/// Trait for receiving generation progress updates.
pub trait GenerateProgress {
    /// Called after each app has been handed to every selected configurator.
    fn on_app(&self, current: usize, total: usize, label: &str);

    /// Called once generation is finished.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl GenerateProgress for SilentProgress {
    fn on_app(&self, _current: usize, _total: usize, _label: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl GenerateProgress for LogProgress {
    fn on_app(&self, current: usize, total: usize, label: &str) {
        if current.is_multiple_of(500) || current == total {
            log::info!("  [{}/{}] {}", current, total, label);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
