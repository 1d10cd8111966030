//! Winning-line flicker animation.

use std::time::{Duration, Instant};
use tictac_engine::Line;

/// How a winning line blinks: `toggles` visibility flips, `interval` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct FlickerSchedule {
    toggles: u32,
    interval: Duration,
}

impl Default for FlickerSchedule {
    fn default() -> Self {
        Self::new(6, Duration::from_millis(100))
    }
}

impl FlickerSchedule {
    /// Number of visibility flips.
    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    /// Time between flips.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total running time.
    pub fn duration(&self) -> Duration {
        self.interval * self.toggles
    }

    /// Starts flickering `line` at `now`.
    pub fn start(self, line: Line, now: Instant) -> Flicker {
        Flicker {
            line,
            started: now,
            schedule: self,
        }
    }
}

/// A running flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flicker {
    line: Line,
    started: Instant,
    schedule: FlickerSchedule,
}

impl Flicker {
    /// Line being highlighted.
    pub fn line(&self) -> Line {
        self.line
    }

    /// Flips that have happened by `now`, capped at the schedule's count.
    fn elapsed_toggles(&self, now: Instant) -> u32 {
        if self.schedule.interval.is_zero() {
            return self.schedule.toggles;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let ticks = elapsed.as_nanos() / self.schedule.interval.as_nanos();
        u32::try_from(ticks)
            .unwrap_or(u32::MAX)
            .min(self.schedule.toggles)
    }

    /// True once every flip has happened.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed_toggles(now) >= self.schedule.toggles
    }

    /// Whether the highlight is shown at `now`.
    ///
    /// The line starts hidden and alternates every interval. A finished
    /// flicker is always visible.
    pub fn is_visible(&self, now: Instant) -> bool {
        if self.is_finished(now) {
            return true;
        }
        self.elapsed_toggles(now) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_row() -> Line {
        Line::ALL[0]
    }

    #[test]
    fn test_default_schedule() {
        let schedule = FlickerSchedule::default();
        assert_eq!(schedule.toggles(), 6);
        assert_eq!(schedule.interval(), Duration::from_millis(100));
        assert_eq!(schedule.duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_zero_interval_is_finished_immediately() {
        let now = Instant::now();
        let flicker = FlickerSchedule::new(6, Duration::ZERO).start(top_row(), now);
        assert!(flicker.is_finished(now));
        assert!(flicker.is_visible(now));
    }
}
