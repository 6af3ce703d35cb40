// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use std::time::Duration;

/// Knobs for one search invocation.
///
/// `log_progress` affects tracing output only, never the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub timeout: Option<Duration>,
    pub log_progress: bool,
}

impl SearchOptions {
    /// No time budget, no progress logging.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_secs(self, seconds: Option<u64>) -> Self {
        self.with_timeout(seconds.map(Duration::from_secs))
    }

    pub fn with_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}
