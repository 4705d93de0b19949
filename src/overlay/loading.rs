use serde::Serialize;
use web_time::{Duration, Instant};

/// Loading screen state as the host should render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadingStatus {
    /// Waiting for the manifest.
    Pending,
    /// Assets are loading.
    Loading {
        /// Finished assets, successful or not.
        completed: usize,
        /// Expected assets.
        total: usize,
    },
    /// Everything finished; the screen hides after the reveal delay.
    Complete,
    /// Loading screen dismissed.
    Hidden,
    /// Fatal error; initialization stopped.
    Failed {
        /// User-visible message.
        message: String,
    },
}

/// Fail-open asset counter gating the loading screen.
///
/// Every completion counts, whether it succeeded or not, so one broken
/// asset cannot keep the gallery hidden.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    total: usize,
    completed: usize,
    failed: usize,
    complete_at: Option<Instant>,
    reveal_delay: Duration,
    hidden: bool,
    error: Option<String>,
}

impl LoadingGate {
    /// Gate waiting for a manifest.
    #[must_use]
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            total: 0,
            completed: 0,
            failed: 0,
            complete_at: None,
            reveal_delay,
            hidden: false,
            error: None,
        }
    }

    /// Expect `total` asset completions.
    pub fn expect(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        self.failed = 0;
        self.complete_at = None;
        self.hidden = false;
        self.error = None;
    }

    /// Record a completion. Extra completions past the total are ignored.
    pub fn record(&mut self, success: bool, now: Instant) {
        if self.error.is_some() || self.completed >= self.total {
            return;
        }
        self.completed += 1;
        if !success {
            self.failed += 1;
        }
        if self.completed == self.total {
            self.complete_at = Some(now);
            log::info!(
                "all assets finished ({} failed of {})",
                self.failed,
                self.total
            );
        }
    }

    /// Stop with a user-visible error.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("loading failed: {message}");
        self.error = Some(message);
    }

    /// Hide the screen once the reveal delay elapsed.
    pub fn advance(&mut self, now: Instant) {
        if let Some(at) = self.complete_at {
            if !self.hidden
                && now.saturating_duration_since(at) >= self.reveal_delay
            {
                self.hidden = true;
            }
        }
    }

    /// Whether every expected asset finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete_at.is_some()
    }

    /// Whether initialization stopped on an error.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Assets that finished with an error.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    /// Status for the host.
    #[must_use]
    pub fn status(&self) -> LoadingStatus {
        if let Some(message) = &self.error {
            return LoadingStatus::Failed {
                message: message.clone(),
            };
        }
        if self.hidden {
            return LoadingStatus::Hidden;
        }
        if self.complete_at.is_some() {
            return LoadingStatus::Complete;
        }
        if self.total == 0 {
            return LoadingStatus::Pending;
        }
        LoadingStatus::Loading {
            completed: self.completed,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_still_complete_the_gate() {
        let mut gate = LoadingGate::new(Duration::from_millis(500));
        let t0 = Instant::now();
        gate.expect(4);
        gate.record(true, t0);
        gate.record(false, t0);
        gate.record(true, t0);
        assert_eq!(
            gate.status(),
            LoadingStatus::Loading {
                completed: 3,
                total: 4
            }
        );
        gate.record(false, t0);
        assert!(gate.is_complete());
        assert_eq!(gate.failed_count(), 2);
    }

    #[test]
    fn hides_after_reveal_delay() {
        let mut gate = LoadingGate::new(Duration::from_millis(500));
        let t0 = Instant::now();
        gate.expect(1);
        gate.record(true, t0);
        gate.advance(t0 + Duration::from_millis(499));
        assert_eq!(gate.status(), LoadingStatus::Complete);
        gate.advance(t0 + Duration::from_millis(500));
        assert_eq!(gate.status(), LoadingStatus::Hidden);
    }

    #[test]
    fn failure_is_sticky() {
        let mut gate = LoadingGate::new(Duration::from_millis(500));
        gate.fail("No models available.");
        gate.record(true, Instant::now());
        assert!(gate.is_failed());
        assert!(matches!(gate.status(), LoadingStatus::Failed { .. }));
    }
}
