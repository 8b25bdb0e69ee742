//! Reporting finished games to an outside collector
//!
//! Reports are best effort: the session manager logs a failed report and moves
//! on, the game result is already saved by then.

use crate::game::{EndResult, UserId};
use tracing::info;

/// Receives one notification per finished game
pub trait StatsReporter: Send + Sync {
    /// Report that `user` finished a game in `language` with `result`
    ///
    /// # Errors
    /// Any error is logged by the caller and otherwise ignored.
    fn report(&self, user: UserId, result: EndResult, language: &str) -> anyhow::Result<()>;
}

/// Discards every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl StatsReporter for NoopReporter {
    fn report(&self, _user: UserId, _result: EndResult, _language: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Emits each report as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StatsReporter for TracingReporter {
    fn report(&self, user: UserId, result: EndResult, language: &str) -> anyhow::Result<()> {
        info!(user, ?result, language, "Game finished");
        Ok(())
    }
}
