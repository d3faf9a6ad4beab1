//! Transient status shown after a clipboard export.

/// Delay before a copy status falls back to idle.
pub const COPY_FEEDBACK_RESET_MS: u32 = 1500;

/// Reset delay as a browser timer argument. Delays past `i32::MAX` saturate.
pub fn reset_timeout(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    Succeeded,
    Failed,
}

/// Copy status plus a generation counter.
///
/// Every recorded outcome starts a new generation. A reset timer only
/// clears the status if nothing newer has been recorded since it was
/// scheduled, so the latest copy owns the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    pub status: CopyStatus,
    generation: u64,
}

impl CopyFeedback {
    /// Record the outcome of a clipboard write. Returns the generation the
    /// reset timer must present to [`CopyFeedback::expire`].
    pub fn record(&mut self, succeeded: bool) -> u64 {
        self.generation += 1;
        self.status = if succeeded {
            CopyStatus::Succeeded
        } else {
            CopyStatus::Failed
        };
        self.generation
    }

    /// Reset to idle if `generation` is still the latest one.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = CopyStatus::Idle;
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self.status {
            CopyStatus::Idle => None,
            CopyStatus::Succeeded => Some("Copied!"),
            CopyStatus::Failed => Some("Copy failed"),
        }
    }
}
