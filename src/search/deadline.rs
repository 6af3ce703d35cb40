// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wall-clock budget for a search.

use std::time::{Duration, Instant};

use thiserror::Error;

/// The search ran past its time budget.
///
/// Raised inside the traversal and caught by the top-level search, which
/// turns it into a best-effort result. Callers of `find_longest_chain` never
/// see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Search timed out after {} seconds", .budget.as_secs())]
pub struct SearchInterrupted {
    pub budget: Duration,
}

/// Start time plus optional budget.
///
/// A zero budget is exceeded immediately: no node is expanded.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Option<Duration>,
}

impl Deadline {
    /// Start the clock now.
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// A deadline that never fires.
    pub fn unbounded() -> Self {
        Self::start(None)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    pub fn is_exceeded(&self) -> bool {
        self.budget.is_some_and(|budget| self.started.elapsed() >= budget)
    }

    /// Cancellation point: fail once the budget is used up.
    #[inline]
    pub fn check(&self) -> Result<(), SearchInterrupted> {
        match self.budget {
            Some(budget) if self.started.elapsed() >= budget => Err(SearchInterrupted { budget }),
            _ => Ok(()),
        }
    }
}
